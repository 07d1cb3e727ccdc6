mod config;
mod ticker;

pub use config::Config;
pub use ticker::Ticker;
