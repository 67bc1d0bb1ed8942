// session.rs - Control loop state: run/pause, colour mode and user commands

use crate::shade::Shade;
use crate::simulator::Simulator;

/// Discrete user inputs, already decoded from whatever the front end polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    /// Advance exactly one generation; only honoured while paused.
    StepOnce,
    Reset,
    ToggleColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Everything the control loop mutates between frames.
pub struct Session {
    simulator: Simulator,
    state: RunState,
    colored: bool,
    quit_requested: bool,
}

impl Session {
    pub fn new(simulator: Simulator, state: RunState, colored: bool) -> Self {
        Self {
            simulator,
            state,
            colored,
            quit_requested: false,
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Quit => {
                log::info!("Quit requested at generation {}", self.simulator.generation());
                self.quit_requested = true;
            }
            Command::TogglePause => {
                self.state = match self.state {
                    RunState::Running => RunState::Paused,
                    RunState::Paused => RunState::Running,
                };
                log::info!("Simulation {:?}", self.state);
            }
            Command::StepOnce => match self.state {
                RunState::Paused => self.simulator.step(),
                RunState::Running => log::debug!("Ignoring single step while running"),
            },
            Command::Reset => {
                self.simulator.randomize();
                log::info!("Grid reset: population={}", self.simulator.population());
            }
            Command::ToggleColorMode => {
                self.colored = !self.colored;
                log::info!("Draw colored: {}", self.colored);
            }
        }
    }

    /// Advance one generation unless paused. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if self.state == RunState::Paused || self.quit_requested {
            return false;
        }
        self.simulator.step();
        true
    }

    /// Shade of the cell at `(row, col)` under the current colour mode.
    pub fn shade_at(&self, row: usize, col: usize) -> Option<Shade> {
        self.simulator.cell_at(row, col)?.shade(self.colored)
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}
