use std::ops::RangeInclusive;

/// Bounds and defaults of the simulation controls.
pub struct Config;

impl Config {
    /// Side length of the square field, in cells.
    pub const SIZE_RANGE: RangeInclusive<usize> = 10..=100;
    pub const DEFAULT_SIZE: usize = 50;

    /// Delay between two generations while running.
    pub const INTERVAL_MS_RANGE: RangeInclusive<u64> = 10..=1000;
    pub const DEFAULT_INTERVAL_MS: u64 = 100;

    /// Fill rate of the "Random" command.
    pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

    pub fn clamp_size(size: usize) -> usize {
        size.clamp(*Self::SIZE_RANGE.start(), *Self::SIZE_RANGE.end())
    }

    pub fn clamp_interval_ms(ms: u64) -> u64 {
        ms.clamp(
            *Self::INTERVAL_MS_RANGE.start(),
            *Self::INTERVAL_MS_RANGE.end(),
        )
    }
}
