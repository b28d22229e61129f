//! Tick timing and idle timeout configuration

use crate::queue::OverflowPolicy;

/// Default tick period in microseconds
pub const DEFAULT_TICK_PERIOD_US: u32 = 1250;

/// Default idle timeout before the display blanks (90 s)
pub const DEFAULT_IDLE_TIMEOUT_MS: u32 = 90_000;

/// Idle threshold of the default configuration
pub const DEFAULT_IDLE_THRESHOLD_TICKS: u32 =
    (DEFAULT_IDLE_TIMEOUT_MS as u64 * 1000 / DEFAULT_TICK_PERIOD_US as u64) as u32;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period of zero
    ZeroTickPeriod,
    /// Idle timeout shorter than one tick
    TimeoutBelowTick,
    /// Idle threshold does not fit the tick counter
    TimeoutTooLong,
}

/// Panel runtime configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Period between ticks (µs)
    pub tick_period_us: u32,
    /// Inactivity before the display blanks (ms)
    pub idle_timeout_ms: u32,
    /// What the event queue does when full
    pub overflow: OverflowPolicy,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            tick_period_us: DEFAULT_TICK_PERIOD_US,
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            overflow: OverflowPolicy::RejectNew,
        }
    }
}

impl PanelConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.idle_threshold_ticks().map(|_| ())
    }

    /// Idle threshold in ticks (timeout / tick period, rounded down)
    ///
    /// 90 s at 1250 µs gives 72 000 ticks.
    pub fn idle_threshold_ticks(&self) -> Result<u32, ConfigError> {
        if self.tick_period_us == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        let ticks = self.idle_timeout_ms as u64 * 1000 / self.tick_period_us as u64;
        if ticks == 0 {
            return Err(ConfigError::TimeoutBelowTick);
        }

        u32::try_from(ticks).map_err(|_| ConfigError::TimeoutTooLong)
    }

    /// Tick rate in Hz, rounded down
    pub fn tick_rate_hz(&self) -> u32 {
        1_000_000u32.checked_div(self.tick_period_us).unwrap_or(0)
    }

    /// One full column cycle in microseconds
    pub fn cycle_period_us(&self) -> u32 {
        self.tick_period_us
            .saturating_mul(super::geometry::COLUMNS as u32)
    }
}
