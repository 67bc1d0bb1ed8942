//! Startup configuration parsed from the command line.

use std::time::Duration;

use clap::Parser;
use conway::Seeding;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("cell size must be at least 1 pixel")]
    ZeroCellSize,

    #[error("a {cell_size}px cell does not fit in a {width}x{height} window")]
    CellLargerThanWindow {
        cell_size: u32,
        width: u32,
        height: u32,
    },

    #[error("frame rate must be at least 1 fps")]
    ZeroFrameRate,

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),
}

#[derive(Parser, Debug, Clone)]
#[command(name = "grid_display")]
#[command(version)]
#[command(about = "Conway's Game of Life on a pixel grid")]
#[command(after_help = "Keys: P pause, Space single step (paused), R reset, C colour mode, Esc quit")]
pub struct Settings {
    /// Window width in pixels
    #[arg(long, default_value = "900")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "900")]
    pub height: u32,

    /// Side length of one cell in pixels
    #[arg(short, long, default_value = "5")]
    pub cell_size: u32,

    /// Target frames (and generations) per second
    #[arg(short, long, default_value = "120")]
    pub fps: u32,

    /// Start paused
    #[arg(short, long)]
    pub paused: bool,

    /// Start without transition colouring
    #[arg(short, long)]
    pub monochrome: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a cell starts alive
    #[arg(long, default_value = "0.5")]
    pub density: f64,

    /// Start from a named pattern instead of random noise
    #[arg(long)]
    pub pattern: Option<String>,

    /// Compute each generation with one task per row
    #[arg(long)]
    pub parallel: bool,
}

impl Settings {
    /// Rows and columns that fit in the window.
    pub fn grid_dimensions(&self) -> Result<(usize, usize), SettingsError> {
        if self.cell_size == 0 {
            return Err(SettingsError::ZeroCellSize);
        }
        let rows = self.height / self.cell_size;
        let columns = self.width / self.cell_size;
        if rows == 0 || columns == 0 {
            return Err(SettingsError::CellLargerThanWindow {
                cell_size: self.cell_size,
                width: self.width,
                height: self.height,
            });
        }
        Ok((rows as usize, columns as usize))
    }

    pub fn frame_interval(&self) -> Result<Duration, SettingsError> {
        if self.fps == 0 {
            return Err(SettingsError::ZeroFrameRate);
        }
        Ok(Duration::from_nanos(1_000_000_000 / u64::from(self.fps)))
    }

    pub fn seeding(&self) -> Seeding {
        Seeding {
            seed: self.seed,
            density: self.density,
        }
    }

    pub fn pattern(&self) -> Result<Option<&'static conway::Pattern>, SettingsError> {
        match &self.pattern {
            None => Ok(None),
            Some(name) => conway::patterns::find(name)
                .map(Some)
                .ok_or_else(|| SettingsError::UnknownPattern(name.clone())),
        }
    }
}
