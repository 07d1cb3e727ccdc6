mod engine;
mod gui;
mod session;
mod utils;

pub use engine::{Grid, GridError};
pub use gui::App;
pub use session::{CellMapping, RunState, Session};
pub use utils::{Config, Ticker};
