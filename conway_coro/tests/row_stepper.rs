//! Row-parallel stepping must agree with the sequential scan

use conway::{Grid, Seeding, Sequential, Simulator, Stepper};
use conway_coro::RowStepper;
use proptest::prelude::*;

#[test]
fn long_run_matches_sequential() {
    let seeding = Seeding { seed: Some(2024), density: 0.5 };
    let mut sequential = Simulator::new(64, 48, seeding).unwrap();
    let mut parallel = Simulator::new(64, 48, seeding)
        .unwrap()
        .with_stepper(Box::new(RowStepper::with_worker_threads(4).unwrap()));

    for generation in 1..=100 {
        sequential.step();
        parallel.step();
        assert_eq!(
            parallel.current(),
            sequential.current(),
            "diverged at generation {generation}"
        );
    }
    assert_eq!(parallel.previous(), sequential.previous());
}

#[test]
fn single_row_grid() {
    let start = Grid::from_rows(&[[true, true, true, false, true]]).unwrap();
    let mut stepper = RowStepper::with_worker_threads(2).unwrap();
    let mut next = Grid::new(1, 5).unwrap();
    stepper.advance(&start, &mut next);
    assert_eq!(next, Grid::from_rows(&[[false, true, false, false, false]]).unwrap());
}

fn arbitrary_cells() -> impl Strategy<Value = Vec<Vec<bool>>> {
    (1usize..16, 1usize..16).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), columns), rows)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn agrees_with_sequential(cells in arbitrary_cells()) {
        let start = Grid::from_rows(&cells).unwrap();
        let (rows, columns) = start.dimensions();

        let mut expected = Grid::new(rows, columns).unwrap();
        Sequential.advance(&start, &mut expected);

        let mut stepper = RowStepper::with_worker_threads(2).unwrap();
        // Pre-fill with junk to check every cell is overwritten
        let mut next = Grid::from_rows(&vec![vec![true; columns]; rows]).unwrap();
        stepper.advance(&start, &mut next);

        prop_assert_eq!(next, expected);
    }
}

#[test]
fn stepper_follows_changing_grid_sizes() {
    let mut stepper = RowStepper::with_worker_threads(2).unwrap();
    for (rows, columns) in [(3, 5), (6, 2), (1, 7), (4, 4)] {
        let mut start = Grid::new(rows, columns).unwrap();
        for r in 0..rows {
            for c in 0..columns {
                start.set(r, c, (r * 7 + c * 3) % 5 < 2);
            }
        }

        let mut expected = Grid::new(rows, columns).unwrap();
        Sequential.advance(&start, &mut expected);
        let mut next = Grid::new(rows, columns).unwrap();
        stepper.advance(&start, &mut next);
        assert_eq!(next, expected, "{rows}x{columns}");
    }
}
