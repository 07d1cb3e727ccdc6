mod app;
mod appearance;
mod draw;

pub use app::App;
use appearance::Appearance;
