use super::{App, Appearance};
use crate::Config;
use eframe::egui::{
    pos2, vec2, Button, Painter, Rect, Response, RichText, Sense, Slider, Stroke, Ui,
};
use std::time::Instant;

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Appearance::TEXT_COLOR)
            .size(Appearance::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Appearance::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Appearance::BUTTON_STROKE_WIDTH,
                Appearance::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_run_controls(&mut self, ui: &mut Ui, now: Instant) {
        ui.horizontal(|ui| {
            let text = if self.session.is_running() {
                "⏸ Pause"
            } else {
                "▶ Play"
            };
            if ui.add(Self::new_button(text)).clicked() {
                self.session.toggle_running(now);
            }

            let step = ui.add_enabled(!self.session.is_running(), Self::new_button("Step"));
            if step.clicked() {
                self.session.step();
            }
        });

        ui.horizontal(|ui| {
            if ui.add(Self::new_button("Clear")).clicked() {
                self.session.clear();
            }
            if ui.add(Self::new_button("Random")).clicked() {
                self.randomize();
            }
        });
    }

    fn draw_sliders(&mut self, ui: &mut Ui, now: Instant) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Size: "));
            if ui
                .add(Slider::new(&mut self.size, Config::SIZE_RANGE))
                .changed()
            {
                self.resize(now);
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed: "));
            let slider = Slider::new(&mut self.interval_ms, Config::INTERVAL_MS_RANGE)
                .suffix(" ms")
                .logarithmic(true);
            if ui.add(slider).changed() {
                self.session.set_interval(self.interval_ms, now);
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Density: "));
            ui.add(Slider::new(&mut self.alive_probability, 0.0..=1.0));
        });
    }

    fn draw_stats(&self, ui: &mut Ui) {
        let grid = self.session.grid();
        let total = grid.rows() * grid.cols();
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.session.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {} / {} ({:.1}%)",
            grid.population(),
            total,
            grid.population() as f64 / total as f64 * 100.
        )));
    }

    fn draw_controls(&mut self, ui: &mut Ui, now: Instant) {
        ui.vertical(|ui| {
            ui.set_width(Appearance::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_run_controls(ui, now);
                    ui.add_space(Appearance::WIDGET_GAP);
                    self.draw_sliders(ui, now);
                });
            });
            ui.add_space(Appearance::WIDGET_GAP);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_stats(ui);
                });
            });
        });
    }

    fn paint_board(&self, painter: &Painter, rect: Rect) {
        let grid = self.session.grid();
        let mapping = self.session.mapping(rect.width());
        let side = mapping.cell_size();

        painter.rect_filled(rect, 0., Appearance::CELL_OFF_COLOR);
        for (r, row) in grid.rows_iter().enumerate() {
            for (c, _) in row.iter().enumerate().filter(|&(_, &alive)| alive) {
                let ([x, y], side) = mapping.cell_rect(r, c);
                let cell = Rect::from_min_size(rect.min + vec2(x, y), vec2(side, side));
                painter.rect_filled(cell, 0., Appearance::CELL_ON_COLOR);
            }
        }

        let stroke = Stroke::new(Appearance::GRID_LINE_WIDTH, Appearance::GRID_LINE_COLOR);
        for i in 0..=grid.rows() {
            let y = rect.min.y + i as f32 * side;
            painter.line_segment([pos2(rect.min.x, y), pos2(rect.max.x, y)], stroke);
        }
        for j in 0..=grid.cols() {
            let x = rect.min.x + j as f32 * side;
            painter.line_segment([pos2(x, rect.min.y), pos2(x, rect.max.y)], stroke);
        }
    }

    fn handle_board_click(&mut self, response: &Response) {
        if !response.clicked() {
            return;
        }
        if let Some(pos) = response.interact_pointer_pos() {
            let p = pos - response.rect.min;
            self.session.click(p.x, p.y, response.rect.width());
        }
    }

    fn draw_board(&mut self, ui: &mut Ui, size_px: f32) {
        let (response, painter) = ui.allocate_painter(vec2(size_px, size_px), Sense::click());
        self.handle_board_click(&response);
        self.paint_board(&painter, response.rect);
    }

    pub(super) fn draw(&mut self, ui: &mut Ui, now: Instant) {
        let area = ui.available_size();
        let size_px = area
            .y
            .min(area.x - Appearance::CONTROL_PANEL_WIDTH - Appearance::FRAME_MARGIN)
            .min(Appearance::MAX_BOARD_PX)
            .max(0.);

        ui.horizontal(|ui| {
            self.draw_controls(ui, now);
            ui.add_space(Appearance::FRAME_MARGIN);
            self.draw_board(ui, size_px);
        });
    }
}
