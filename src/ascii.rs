use pencil_grid::{GridError, OccupancyGrid};

/// Parses an ASCII drawing. `#` and `1` are painted, anything else is empty.
///
/// The last non-blank line becomes row 0, so the drawing reads the right way
/// up. Short lines are padded with empty cells.
pub fn parse_ascii(text: &str) -> Result<OccupancyGrid, GridError> {
    let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end()).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    let depth = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rows: Vec<Vec<u8>> = lines
        .iter()
        .rev()
        .map(|l| {
            let mut row: Vec<u8> = l.chars().map(|c| u8::from(c == '#' || c == '1')).collect();
            row.resize(depth, 0);
            row
        })
        .collect();
    OccupancyGrid::from_rows(&rows[..])
}

/// Renders with the highest row first, matching [`parse_ascii`].
pub fn render_ascii(grid: &OccupancyGrid) -> String {
    let mut out = String::with_capacity(grid.width() * (grid.depth() + 1));
    for a in (0..grid.width()).rev() {
        if let Some(row) = grid.row(a) {
            out.extend(row.iter().map(|&v| if v == 1 { '#' } else { '.' }));
        }
        out.push('\n');
    }
    out
}
