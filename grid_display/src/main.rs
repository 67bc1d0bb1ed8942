// main.rs - Conway's Game of Life on a pixel grid

use clap::Parser;
use conway::{RunState, Session, Simulator};
use conway_coro::RowStepper;
use eframe::egui;

mod app;
mod input;
mod settings;

use app::{LifeApp, STATUS_BAR_HEIGHT};
use settings::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::parse();
    let (rows, columns) = settings.grid_dimensions()?;
    let frame_interval = settings.frame_interval()?;

    let mut simulator = Simulator::new(rows, columns, settings.seeding())?;
    if let Some(pattern) = settings.pattern()? {
        simulator.load_pattern(pattern);
    }
    if settings.parallel {
        simulator = simulator.with_stepper(Box::new(RowStepper::new()?));
    }
    log::info!(
        "Grid {}x{} ({}px cells), population={}, target {} fps",
        rows,
        columns,
        settings.cell_size,
        simulator.population(),
        settings.fps
    );

    let state = if settings.paused { RunState::Paused } else { RunState::Running };
    let session = Session::new(simulator, state, !settings.monochrome);
    let app = LifeApp::new(session, settings.cell_size as f32, frame_interval);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            settings.width as f32,
            settings.height as f32 + STATUS_BAR_HEIGHT,
        ]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}
