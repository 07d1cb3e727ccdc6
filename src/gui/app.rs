use super::Appearance;
use crate::{Config, GridError, Session};
use eframe::egui::{CentralPanel, Context, Frame, Key, Margin};
use std::time::Instant;

pub struct App {
    pub(super) session: Session, // The field and its run state.
    pub(super) size: usize,      // Value of the size slider, in cells.
    pub(super) interval_ms: u64, // Value of the speed slider.
    pub(super) alive_probability: f64, // Value of the density slider.
}

impl App {
    pub fn new() -> Result<Self, GridError> {
        Ok(Self {
            session: Session::new(Config::DEFAULT_SIZE, Config::DEFAULT_INTERVAL_MS)?,
            size: Config::DEFAULT_SIZE,
            interval_ms: Config::DEFAULT_INTERVAL_MS,
            alive_probability: Config::DEFAULT_ALIVE_PROBABILITY,
        })
    }

    pub(super) fn randomize(&mut self) {
        let result = self
            .session
            .set_alive_probability(self.alive_probability)
            .and_then(|()| self.session.randomize());
        if let Err(err) = result {
            log::error!("failed to randomize the field: {}", err);
        }
    }

    pub(super) fn resize(&mut self, now: Instant) {
        if let Err(err) = self.session.resize(self.size, now) {
            log::error!("failed to resize the field: {}", err);
        }
        self.size = self.session.size();
    }

    fn handle_keys(&mut self, ctx: &Context, now: Instant) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.session.step();
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.session.toggle_running(now);
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.handle_keys(ctx, now);
        self.session.tick(now);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Appearance::FRAME_MARGIN))
                    .fill(Appearance::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                self.draw(ui, now);
            });

        if let Some(delay) = self.session.time_until_tick(Instant::now()) {
            ctx.request_repaint_after(delay);
        }
    }
}
