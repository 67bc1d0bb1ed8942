// input.rs - Keyboard to command mapping

use conway::Command;
use egui::{Event, Key};

pub fn command_for(key: Key) -> Option<Command> {
    match key {
        Key::Escape => Some(Command::Quit),
        Key::P      => Some(Command::TogglePause),
        Key::Space  => Some(Command::StepOnce),
        Key::R      => Some(Command::Reset),
        Key::C      => Some(Command::ToggleColorMode),
        _           => None,
    }
}

/// Commands for this frame's fresh key presses, in arrival order. Auto-repeat is ignored.
pub fn commands(events: &[Event]) -> Vec<Command> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key { key, pressed: true, repeat: false, .. } => command_for(*key),
            _ => None,
        })
        .collect()
}
