mod mapping;
#[cfg(test)]
mod tests;

pub use mapping::CellMapping;

use crate::{Config, Grid, GridError, Ticker};
use log::{debug, info, trace};
use rand::Rng;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Paused,
    Running,
}

/// Simulation state owned by the shell: the field, whether it is running and when the next
/// generation is due.
///
/// Every method that depends on time takes `now` explicitly.
pub struct Session {
    grid: Grid,
    state: RunState,
    ticker: Ticker,
    interval: Duration,
    generation: u64,
    alive_probability: f64,
}

impl Session {
    /// Paused session with a blank `size x size` field.
    ///
    /// `size` and `interval_ms` are clamped to the ranges in [`Config`].
    pub fn new(size: usize, interval_ms: u64) -> Result<Self, GridError> {
        let size = Config::clamp_size(size);
        Ok(Self {
            grid: Grid::new(size, size)?,
            state: RunState::Paused,
            ticker: Ticker::default(),
            interval: Duration::from_millis(Config::clamp_interval_ms(interval_ms)),
            generation: 0,
            alive_probability: Config::DEFAULT_ALIVE_PROBABILITY,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Side length of the square field.
    pub fn size(&self) -> usize {
        self.grid.rows()
    }

    pub fn alive_probability(&self) -> f64 {
        self.alive_probability
    }

    /// Time left until the next generation, `None` while paused.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.remaining(now)
    }

    pub fn play(&mut self, now: Instant) {
        if self.is_running() {
            return;
        }
        self.state = RunState::Running;
        self.ticker.schedule(self.interval, now);
        info!("running every {} ms", self.interval.as_millis());
    }

    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = RunState::Paused;
        self.ticker.cancel();
        info!("paused at generation {}", self.generation);
    }

    pub fn toggle_running(&mut self, now: Instant) {
        match self.state {
            RunState::Running => self.pause(),
            RunState::Paused => self.play(now),
        }
    }

    /// Advances one generation if paused. Returns whether it did.
    pub fn step(&mut self) -> bool {
        if self.is_running() {
            debug!("step ignored while running");
            return false;
        }
        self.advance();
        debug!("stepped to generation {}", self.generation);
        true
    }

    /// Advances one generation if running and the next one is due.
    ///
    /// Computes at most one generation per call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running() || !self.ticker.poll(now) {
            return false;
        }
        self.advance();
        trace!("generation {}", self.generation);
        true
    }

    fn advance(&mut self) {
        self.grid = self.grid.next_generation();
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.grid = self.grid.cleared();
        self.generation = 0;
        info!("cleared {}x{} field", self.grid.rows(), self.grid.cols());
    }

    /// Fills the field with random cells using an entropy-seeded generator.
    pub fn randomize(&mut self) -> Result<(), GridError> {
        self.randomize_with(&mut rand::thread_rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        self.grid = self.grid.randomize(self.alive_probability, rng)?;
        self.generation = 0;
        info!(
            "randomized field: {} of {} cells alive",
            self.grid.population(),
            self.grid.rows() * self.grid.cols()
        );
        Ok(())
    }

    pub fn set_alive_probability(&mut self, p: f64) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(GridError::InvalidProbability(p));
        }
        self.alive_probability = p;
        Ok(())
    }

    /// Replaces the field with a blank `size x size` one.
    ///
    /// If running, the pending tick is dropped and the ticker restarted, so no generation is
    /// computed against the old field.
    pub fn resize(&mut self, size: usize, now: Instant) -> Result<(), GridError> {
        let size = Config::clamp_size(size);
        self.grid = Grid::new(size, size)?;
        self.generation = 0;
        self.ticker.reschedule(self.interval, now);
        info!("resized field to {size}x{size}");
        Ok(())
    }

    /// Changes the delay between generations, restarting the ticker if running.
    pub fn set_interval(&mut self, interval_ms: u64, now: Instant) {
        let interval = Duration::from_millis(Config::clamp_interval_ms(interval_ms));
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        self.ticker.reschedule(interval, now);
        debug!("interval set to {} ms", interval.as_millis());
    }

    /// Flips the cell at `(r, c)`; coordinates outside of the field are ignored.
    pub fn toggle_at(&mut self, r: i64, c: i64) -> bool {
        let flipped = self.grid.toggle_cell(r, c);
        if flipped {
            debug!("toggled cell ({r}, {c})");
        }
        flipped
    }

    /// Mapping from pixels of a board `canvas_width` pixels wide to cells of the current field.
    pub fn mapping(&self, canvas_width: f32) -> CellMapping {
        CellMapping::new(canvas_width, self.grid.cols())
    }

    /// Toggles the cell under the pixel `(x, y)` of the board.
    pub fn click(&mut self, x: f32, y: f32, canvas_width: f32) -> bool {
        match self.mapping(canvas_width).cell_at(x, y) {
            Some((r, c)) => self.toggle_at(r, c),
            None => false,
        }
    }
}
