// simulator.rs - Double-buffered Game of Life simulator

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::Result;
use crate::grid::{Density, Grid};
use crate::patterns::Pattern;
use crate::shade::CellState;
use crate::stepper::{Sequential, Stepper};

/// How a fresh or reset grid gets populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seeding {
    /// Fixed RNG seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Probability that each cell starts alive.
    pub density: f64,
}

impl Default for Seeding {
    fn default() -> Self {
        Self {
            seed: None,
            density: 0.5,
        }
    }
}

/// Owns the current, previous and scratch generations.
///
/// `previous` exists only so a renderer can tell newly born and newly dead
/// cells apart; it never feeds back into the rules.
pub struct Simulator {
    current: Grid,
    previous: Grid,
    next: Grid,
    generation: u64,
    density: Density,
    rng: StdRng,
    stepper: Box<dyn Stepper>,
}

impl Simulator {
    /// Allocate a `rows x columns` simulator and randomize it.
    pub fn new(rows: usize, columns: usize, seeding: Seeding) -> Result<Self> {
        let density = Density::new(seeding.density)?;
        let rng = match seeding.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut simulator = Self::with_rng(Grid::new(rows, columns)?, density, rng);
        simulator.randomize();
        Ok(simulator)
    }

    /// Wrap an existing grid as generation 0. Randomizing later uses a 50% density.
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_rng(grid, Density::HALF, StdRng::from_entropy())
    }

    fn with_rng(grid: Grid, density: Density, rng: StdRng) -> Self {
        Self {
            previous: grid.clone(),
            next: grid.clone(),
            current: grid,
            generation: 0,
            density,
            rng,
            stepper: Box::new(Sequential),
        }
    }

    /// Replace the strategy used to compute each generation.
    pub fn with_stepper(mut self, stepper: Box<dyn Stepper>) -> Self {
        self.stepper = stepper;
        self
    }

    /// Give every cell a fresh coin flip and restart the generation count.
    pub fn randomize(&mut self) {
        self.current.fill_random(&mut self.rng, self.density);
        self.previous.clone_from(&self.current);
        self.generation = 0;
    }

    /// Clear the grid and stamp `pattern` in its centre.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        pattern.apply(&mut self.current);
        self.previous.clone_from(&self.current);
        self.generation = 0;
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        self.stepper.advance(&self.current, &mut self.next);

        // previous <- current <- next; the stale grid becomes the next scratch buffer
        std::mem::swap(&mut self.previous, &mut self.current);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<CellState> {
        Some(CellState {
            alive: self.current.get(row, col)?,
            was_alive: self.previous.get(row, col)?,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    /// Generations computed since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn previous(&self) -> &Grid {
        &self.previous
    }
}
