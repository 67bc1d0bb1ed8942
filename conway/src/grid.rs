// grid.rs - Flat row-major cell grid for Conway's Game of Life

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};
use crate::rules;

/// Relative positions of the eight neighbours of a cell.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A fixed-size `rows x columns` grid of live/dead cells.
///
/// Cells are stored in a single flat buffer; index `i` maps to row
/// `i / columns` and column `i % columns`. Positions outside the grid do not
/// exist: there is no wraparound, so edge cells have 5 neighbours and corner
/// cells 3.
#[derive(Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::InvalidDimensions { rows, columns });
        }
        // Vec rejects buffers beyond isize::MAX bytes
        let len = rows
            .checked_mul(columns)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(Error::TooLarge { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![false; len],
        })
    }

    /// Build a grid from nested rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(rows.len(), columns)?;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(Error::RaggedRows {
                    row: r,
                    expected: columns,
                    found: row.len(),
                });
            }
            grid.row_mut(r).copy_from_slice(row);
        }
        Ok(grid)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// State of the cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.columns).then(|| self.cells[self.index(row, col)])
    }

    /// Set a cell. Writes outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.rows && col < self.columns {
            let idx = self.index(row, col);
            self.cells[idx] = alive;
        }
    }

    /// Cells of one row. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = row * self.columns;
        &mut self.cells[start..start + self.columns]
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Set every cell alive independently with probability `density`.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, density: Density) {
        for cell in &mut self.cells {
            *cell = rng.gen_bool(density.0);
        }
    }

    /// Count live neighbours of `(row, col)`, skipping positions off the grid.
    pub fn live_neighbours(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOUR_OFFSETS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if nr < self.rows && nc < self.columns && self.cells[self.index(nr, nc)] {
                count += 1;
            }
        }
        count
    }

    /// Write the next generation of `row` into `out`, reading only `self`.
    pub fn next_row(&self, row: usize, out: &mut [bool]) {
        debug_assert_eq!(out.len(), self.columns);
        for (col, next) in out.iter_mut().enumerate() {
            let alive = self.cells[self.index(row, col)];
            *next = rules::next_state(alive, self.live_neighbours(row, col));
        }
    }
}

// Manual impl so `clone_from` reuses the cell buffer.
impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            cells: self.cells.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.columns = source.columns;
        self.cells.clone_from(&source.cells);
    }
}

/// Probability that a randomly filled cell is alive, checked to lie in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f64);

impl Density {
    pub const HALF: Density = Density(0.5);

    pub fn new(probability: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&probability) {
            Ok(Self(probability))
        } else {
            Err(Error::InvalidDensity(probability))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for &alive in self.row(r) {
                f.write_str(if alive { "O" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(Error::InvalidDimensions { rows: 0, columns: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::from_rows::<[bool; 0]>(&[]).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let side = 1usize << (usize::BITS / 2);
        assert_eq!(
            Grid::new(side, side),
            Err(Error::TooLarge { rows: side, columns: side })
        );
        assert!(Grid::new(usize::MAX, 2).is_err());
        assert_eq!(
            Grid::new(isize::MAX as usize, 2),
            Err(Error::TooLarge { rows: isize::MAX as usize, columns: 2 })
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows: [&[bool]; 2] = [&[true, false], &[true]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(Error::RaggedRows { row: 1, expected: 2, found: 1 })
        );
    }

    #[test]
    fn indexing_is_row_major() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.set(1, 2, true);
        assert_eq!(grid.cells().iter().position(|&c| c), Some(6));
        assert_eq!(grid.row(1), &[false, false, true, false]);
    }

    #[test]
    fn out_of_range_access() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        grid.set(5, 5, true);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn corner_counts_only_in_bounds_neighbours() {
        let full = Grid::from_rows(&[[true; 3]; 3]).unwrap();
        assert_eq!(full.live_neighbours(0, 0), 3);
        assert_eq!(full.live_neighbours(0, 2), 3);
        assert_eq!(full.live_neighbours(2, 2), 3);
        assert_eq!(full.live_neighbours(0, 1), 5);
        assert_eq!(full.live_neighbours(1, 1), 8);
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        let grid = Grid::from_rows(&[[true]]).unwrap();
        assert_eq!(grid.live_neighbours(0, 0), 0);
    }

    #[test]
    fn fill_random_respects_extreme_densities() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(10, 10).unwrap();
        grid.fill_random(&mut rng, Density::new(1.0).unwrap());
        assert_eq!(grid.population(), 100);
        grid.fill_random(&mut rng, Density::new(0.0).unwrap());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn density_outside_unit_range_is_rejected() {
        assert_eq!(Density::new(1.5), Err(Error::InvalidDensity(1.5)));
        assert_eq!(Density::new(-0.1), Err(Error::InvalidDensity(-0.1)));
        assert!(Density::new(f64::NAN).is_err());
        assert_eq!(Density::new(0.6).map(Density::get), Ok(0.6));
    }

    #[test]
    fn clone_from_adopts_source_dimensions() {
        let mut target = Grid::new(2, 2).unwrap();
        let source = Grid::from_rows(&[[true, false, true]]).unwrap();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.dimensions(), (1, 3));
    }

    #[test]
    fn display_uses_one_char_per_cell() {
        let grid = Grid::from_rows(&[[true, false], [false, true]]).unwrap();
        assert_eq!(grid.to_string(), "O.\n.O\n");
    }
}
