use pencil_grid::OccupancyGrid;
use pencil_pivot::{BorderExtremes, Side, analyze_borders};
use proptest::prelude::*;

fn arb_grid() -> impl Strategy<Value = OccupancyGrid> {
    (1usize..=9, 1usize..=9).prop_flat_map(|(w, d)| {
        proptest::collection::vec(0u8..=1, w * d)
            .prop_map(move |cells| OccupancyGrid::from_flat(w, d, &cells).unwrap())
    })
}

proptest! {
    // Every touch point maps back to a painted cell on its extreme
    #[test]
    fn touch_points_are_painted_and_extreme(g in arb_grid()) {
        let e = analyze_borders(&g);
        for side in Side::ALL {
            for &p in e.touches(side) {
                let (a, b) = BorderExtremes::touch_cell(side, p);
                prop_assert!(g.is_occupied(a, b));
                let on_extreme = match side {
                    Side::Left | Side::Right => p.horizontal,
                    Side::Top | Side::Bottom => p.vertical,
                };
                prop_assert_eq!(on_extreme, e.extreme(side));
            }
        }
    }

    // Touch lists are complete and never empty once anything is painted
    #[test]
    fn touch_lists_cover_the_extreme(g in arb_grid()) {
        let e = analyze_borders(&g);
        prop_assume!(!g.is_empty());
        let cells: Vec<(i32, i32)> = g.iter_occupied().collect();
        let count = |f: &dyn Fn(&(i32, i32)) -> bool| cells.iter().filter(|&c| f(c)).count();
        prop_assert_eq!(e.left_touches.len(), count(&|&(_, b)| b == e.left));
        prop_assert_eq!(e.right_touches.len(), count(&|&(_, b)| b + 1 == e.right));
        prop_assert_eq!(e.top_touches.len(), count(&|&(a, _)| a + 1 == e.top));
        prop_assert_eq!(e.bottom_touches.len(), count(&|&(a, _)| a == e.bottom));
        for side in Side::ALL {
            prop_assert!(!e.touches(side).is_empty());
        }
    }

    // Extremes bound every painted cell
    #[test]
    fn extremes_bound_region(g in arb_grid()) {
        prop_assume!(!g.is_empty());
        let e = analyze_borders(&g);
        for (a, b) in g.iter_occupied() {
            prop_assert!(e.left <= b && b < e.right);
            prop_assert!(e.bottom <= a && a < e.top);
        }
    }
}

#[test]
fn empty_grid_is_degenerate_not_an_error() {
    let e = analyze_borders(&OccupancyGrid::new(4, 4).unwrap());
    assert_eq!((e.left, e.right, e.top, e.bottom), (4, 1, 1, 4));
    for side in Side::ALL {
        assert!(e.touches(side).is_empty());
    }
}
