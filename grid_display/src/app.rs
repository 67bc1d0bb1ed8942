// app.rs - eframe front end: input polling, frame pacing and cell painting

use std::time::{Duration, Instant};

use conway::{Session, Shade};
use eframe::egui;
use egui::{Color32, Rect, Vec2};

use crate::input;

/// Height reserved above the grid for the status line.
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

pub const DEAD_COLOR: Color32 = Color32::WHITE;

pub fn shade_color(shade: Shade) -> Color32 {
    match shade {
        Shade::Alive    => Color32::BLACK,
        Shade::JustBorn => Color32::GREEN,
        Shade::JustDied => Color32::RED,
    }
}

pub struct LifeApp {
    session: Session,
    cell_size: f32,
    frame_interval: Duration,
    last_update: Instant,
    last_frame: Instant,
    fps: f32,
}

impl LifeApp {
    pub fn new(session: Session, cell_size: f32, frame_interval: Duration) -> Self {
        Self {
            session,
            cell_size,
            frame_interval,
            last_update: Instant::now(),
            last_frame: Instant::now(),
            fps: 0.0,
        }
    }

    fn measure_fps(&mut self) {
        let elapsed = self.last_frame.elapsed().as_secs_f32();
        self.last_frame = Instant::now();
        if elapsed > 0.0 {
            // Exponential smoothing keeps the readout steady
            self.fps = 0.9 * self.fps + 0.1 / elapsed;
        }
    }

    fn paint_grid(&self, ui: &mut egui::Ui) {
        let (rows, columns) = self.session.simulator().dimensions();
        let total_size = Vec2::new(columns as f32, rows as f32) * self.cell_size;
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
        let start_pos = response.rect.min;

        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, DEAD_COLOR);

        for row in 0..rows {
            for col in 0..columns {
                let Some(shade) = self.session.shade_at(row, col) else {
                    continue;
                };
                let x = start_pos.x + col as f32 * self.cell_size;
                let y = start_pos.y + row as f32 * self.cell_size;
                let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(self.cell_size));
                painter.rect_filled(rect, 0.0, shade_color(shade));
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for command in ctx.input(|i| input::commands(&i.events)) {
            self.session.apply(command);
        }
        if self.session.quit_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Auto-advance at most once per frame interval
        if self.last_update.elapsed() >= self.frame_interval {
            self.session.tick();
            self.last_update = Instant::now();
        }
        self.measure_fps();

        egui::TopBottomPanel::top("status")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let simulator = self.session.simulator();
                    ui.label(format!("Generation: {}", simulator.generation()));
                    ui.separator();
                    ui.label(format!("Live cells: {}", simulator.population()));
                    ui.separator();
                    ui.label(format!("{:.0} fps", self.fps));
                    if self.session.is_paused() {
                        ui.separator();
                        ui.label("⏸ Paused");
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.paint_grid(ui));

        ctx.request_repaint_after(self.frame_interval);
    }
}
