// stepper.rs - Strategies for computing the next generation

use crate::grid::Grid;

/// Computes one generation from `current` into `next`.
///
/// Implementations must read only from `current` and must write every cell
/// of `next`; both grids have identical dimensions.
pub trait Stepper {
    fn advance(&mut self, current: &Grid, next: &mut Grid);
}

/// Single-threaded row-by-row scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl Stepper for Sequential {
    fn advance(&mut self, current: &Grid, next: &mut Grid) {
        for row in 0..current.rows() {
            current.next_row(row, next.row_mut(row));
        }
    }
}
