// ui.rs - egui front end: menu, canvas drawing and pointer handling

use std::time::Instant;

use eframe::egui;
use egui::{Rect, Sense, Stroke, Vec2};

use crate::app::{GameOfLife, GameOfLifeInterface};
use crate::config::{MAX_RUN_DELAY_MS, MIN_RUN_DELAY_MS};

const LINE_WIDTH: f32 = 1.0;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-run timer
        self.tick(Instant::now());

        egui::TopBottomPanel::top("game_menu").show(ctx, |ui| {
            self.menu(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas(ui);
            });

        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

impl GameOfLife {
    fn menu(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let (x, y) = self.viewport.display_coords();
            ui.label(format!("X: {x}"));
            ui.label(format!("Y: {y}"));
            ui.label(format!("Population: {}", self.state.population()));
            ui.label(format!("Generation: {}", self.state.generation()));
        });

        ui.horizontal(|ui| {
            if ui.button("Jump to (0, 0)").clicked() {
                self.jump_to_origin();
            }

            if ui.button("Step Forward").clicked() {
                self.next_generation();
            }

            let button_text = if self.is_running { "Stop" } else { "Start" };
            if ui.button(button_text).clicked() {
                self.set_running(!self.is_running);
            }

            ui.separator();

            ui.label("Time between generations:");
            let mut delay = self.run_delay_ms();
            let slider = egui::Slider::new(&mut delay, MIN_RUN_DELAY_MS..=MAX_RUN_DELAY_MS).suffix(" ms");
            if ui.add(slider).changed() {
                self.set_run_delay_ms(delay);
            }
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let area = response.rect;

        // Drag pans; a click that never moved toggles the cell under it
        if response.dragged() {
            let delta = response.drag_delta();
            self.pan_by(f64::from(delta.x), f64::from(delta.y));
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - area.min;
                self.toggle_at(f64::from(local.x), f64::from(local.y));
            }
        }
        if let Some(pos) = response.hover_pos() {
            let scroll = ui.input(|i| i.scroll_delta.y);
            if scroll != 0.0 {
                let local = pos - area.min;
                self.zoom(f64::from(local.x), f64::from(local.y), f64::from(scroll));
            }
        }

        painter.rect_filled(area, 0.0, self.dead_color);

        let stroke = Stroke::new(LINE_WIDTH, self.line_color);
        let (width, height) = (f64::from(area.width()), f64::from(area.height()));
        for x in self.viewport.vertical_lines(width) {
            let x = area.left() + x as f32;
            painter.line_segment([egui::pos2(x, area.top()), egui::pos2(x, area.bottom())], stroke);
        }
        for y in self.viewport.horizontal_lines(height) {
            let y = area.top() + y as f32;
            painter.line_segment([egui::pos2(area.left(), y), egui::pos2(area.right(), y)], stroke);
        }

        // Only cells inside the visible rectangle
        let (min, max) = self.viewport.visible_cells(width, height);
        let size = Vec2::splat(self.viewport.cell_size() as f32);
        for cell in self.state.cells() {
            if cell.x < min.x || cell.x > max.x || cell.y < min.y || cell.y > max.y {
                continue;
            }
            let (sx, sy) = self.viewport.cell_to_screen(cell);
            let rect = Rect::from_min_size(area.min + egui::vec2(sx as f32, sy as f32), size);
            painter.rect_filled(rect, 0.0, self.live_color);
        }
    }
}
