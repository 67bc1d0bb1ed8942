//! Conway's Game of Life on a fixed, edge-clamped grid.
//!
//! The [`Simulator`] double-buffers generations so no cell ever sees a
//! neighbour value written during the same step. A [`Session`] wraps it with
//! the run/pause and colour-mode state a front end drives through
//! [`Command`]s.

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod session;
pub mod shade;
pub mod simulator;
pub mod stepper;

pub use error::{Error, Result};
pub use grid::{Density, Grid};
pub use patterns::Pattern;
pub use session::{Command, RunState, Session};
pub use shade::{CellState, Shade};
pub use simulator::{Seeding, Simulator};
pub use stepper::{Sequential, Stepper};
