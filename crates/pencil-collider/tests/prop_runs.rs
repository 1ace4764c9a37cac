use pencil_grid::{OccupancyGrid, VoxelScale};
use pencil_collider::{ColliderCreator, RunLengthColliderCreator};
use proptest::prelude::*;

fn arb_grid() -> impl Strategy<Value = OccupancyGrid> {
    (1usize..=8, 1usize..=10).prop_flat_map(|(w, d)| {
        proptest::collection::vec(0u8..=1, w * d)
            .prop_map(move |cells| OccupancyGrid::from_flat(w, d, &cells).unwrap())
    })
}

fn arb_scale() -> impl Strategy<Value = VoxelScale> {
    (0.25f32..4.0, 0.25f32..4.0).prop_map(|(c, d)| VoxelScale::new(c, d).unwrap())
}

proptest! {
    // Per row, merged widths add up to painted cells times cell size
    #[test]
    fn row_widths_sum_to_painted_cells(g in arb_grid(), s in arb_scale()) {
        prop_assume!(!g.is_empty());
        let boxes = RunLengthColliderCreator::new(s).create_colliders(&g, None).unwrap();
        for a in 0..g.width() {
            let painted = g.row(a).unwrap().iter().filter(|&&v| v == 1).count();
            let width: f32 = boxes.iter().filter(|b| b.row == a).map(|b| b.size.x).sum();
            let want = painted as f32 * s.cell_size();
            prop_assert!((width - want).abs() <= 1e-4 * want.max(1.0));
        }
    }

    // Box edges line up with the first and last merged cells
    #[test]
    fn edges_align_with_cells(g in arb_grid(), s in arb_scale()) {
        prop_assume!(!g.is_empty());
        let cell = s.cell_size();
        let boxes = RunLengthColliderCreator::new(s).create_colliders(&g, None).unwrap();
        for b in &boxes {
            let bb = b.aabb();
            let left = (b.start_column as f32 - 0.5) * cell;
            let right = ((b.start_column + b.cells) as f32 - 0.5) * cell;
            prop_assert!((bb.min.x - left).abs() < 1e-3);
            prop_assert!((bb.max.x - right).abs() < 1e-3);
            prop_assert!((b.size.z - s.extrusion_depth()).abs() < 1e-6);
            // Every merged cell is painted, and the run is maximal
            for col in b.start_column..b.start_column + b.cells {
                prop_assert!(g.is_occupied(b.row as i32, col as i32));
            }
            prop_assert!(!g.is_occupied(b.row as i32, b.start_column as i32 - 1));
            prop_assert!(!g.is_occupied(b.row as i32, (b.start_column + b.cells) as i32));
        }
    }

    // Re-running yields identical boxes in identical order
    #[test]
    fn merge_is_deterministic(g in arb_grid()) {
        let c = RunLengthColliderCreator::default();
        prop_assert_eq!(c.create_colliders(&g, None), c.create_colliders(&g, None));
    }

    // Output is row-major, left to right
    #[test]
    fn output_is_row_major(g in arb_grid()) {
        prop_assume!(!g.is_empty());
        let boxes = RunLengthColliderCreator::default().create_colliders(&g, None).unwrap();
        for pair in boxes.windows(2) {
            let k0 = (pair[0].row, pair[0].start_column);
            let k1 = (pair[1].row, pair[1].start_column);
            prop_assert!(k0 < k1);
        }
    }
}

#[test]
fn single_cell_box_is_unit() {
    let mut rows = vec![vec![0u8; 3]; 3];
    rows[0][0] = 1;
    let g = OccupancyGrid::from_rows(&rows[..]).unwrap();
    let boxes = RunLengthColliderCreator::new(VoxelScale::new(1.0, 1.0).unwrap())
        .create_colliders(&g, None)
        .unwrap();
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].size, pencil_geom::Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn run_touching_row_end_is_closed() {
    let g = OccupancyGrid::from_rows(&[[0u8, 1, 1], [1, 1, 1]]).unwrap();
    let boxes = RunLengthColliderCreator::default()
        .create_colliders(&g, None)
        .unwrap();
    assert_eq!(boxes.len(), 2);
    assert_eq!((boxes[0].cells, boxes[1].cells), (2, 3));
    assert_eq!(boxes[1].center.x, 1.0);
}
