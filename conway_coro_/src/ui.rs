// ui.rs - egui front end: controls, board painting and cell toggling

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};
use crate::{GameOfLife, GameOfLifeInterface};
use conway::patterns;

const MIN_SPEED: f32 = 0.5;
const MAX_SPEED: f32 = 120.0;
// Interval picked when leaving every-frame mode.
const THROTTLED_INTERVAL: Duration = Duration::from_millis(100);

/// Generations per second for a throttled interval; `None` in every-frame mode.
fn gens_per_sec(interval: Duration) -> Option<f32> {
    if interval.is_zero() {
        return None;
    }
    Some((1.0 / interval.as_secs_f32()).clamp(MIN_SPEED, MAX_SPEED))
}

fn interval_for(speed: f32) -> Duration {
    let ms = (1000.0 / speed.clamp(MIN_SPEED, MAX_SPEED)).round() as u64;
    Duration::from_millis(ms.max(1))
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_released(egui::Key::Escape)) {
            tracing::info!(generation = self.simulation().generation(), "escape pressed, closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            // Speed and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut every_frame = self.update_interval.is_zero();
                if ui.checkbox(&mut every_frame, "Every frame").changed() {
                    self.update_interval = if every_frame { Duration::ZERO } else { THROTTLED_INTERVAL };
                }
                if let Some(mut speed) = gens_per_sec(self.update_interval) {
                    let slider = egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED).suffix(" gen/sec");
                    if ui.add(slider).changed() {
                        self.update_interval = interval_for(speed);
                    }
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            let sim = self.simulation();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", sim.generation()));
                ui.separator();
                ui.label(format!("Edge: {}", sim.topology()));
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.colored_label(Color32::YELLOW, status);
                }
            });

            ui.separator();

            // Board: dead background, live cells painted on top
            let cell = self.cell_size;
            let total_size = self.board_size();
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            let grid = self.simulation().current();
            for (x, y) in grid.live_cells() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(x as f32 * cell, y as f32 * cell),
                    Vec2::splat(cell),
                );
                painter.rect_filled(rect, 0.0, self.live_color);
            }
            painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::from_gray(60)));

            let live_cells = grid.live_count();
            let total_cells = grid.width() * grid.height();

            // Handle clicking (only when not running)
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - origin;
                    if local.x >= 0.0 && local.y >= 0.0 {
                        self.toggle_cell((local.x / cell) as usize, (local.y / cell) as usize);
                    }
                }
            }

            ui.separator();

            // Statistics
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total_cells - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    (live_cells as f32 / total_cells as f32) * 100.0
                ));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
