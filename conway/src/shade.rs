// shade.rs - Per-cell render classification

/// Alive flags of a cell in the current and the previous generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellState {
    pub alive: bool,
    pub was_alive: bool,
}

/// How a cell should be painted. Cells without a shade show the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    /// Alive now (and, in colour mode, also in the previous generation)
    Alive,
    JustBorn,
    JustDied,
}

impl CellState {
    /// Pick the shade for this cell. With `colored` off only live cells are painted.
    pub fn shade(self, colored: bool) -> Option<Shade> {
        match (colored, self.was_alive, self.alive) {
            (false, _, true)    => Some(Shade::Alive),
            (true, true, true)  => Some(Shade::Alive),
            (true, false, true) => Some(Shade::JustBorn),
            (true, true, false) => Some(Shade::JustDied),
            _                   => None,
        }
    }
}
