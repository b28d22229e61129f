//! Panel configuration from panel.toml
//!
//! `build.rs` validates panel.toml and generates the constants below, so a
//! bad configuration fails the build rather than the boot.

use defmt::*;
use tessera_core::config::DEFAULT_IDLE_THRESHOLD_TICKS;
use tessera_core::{OverflowPolicy, PanelConfig};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/panel_config.rs"));
}

use generated::{IDLE_TIMEOUT_MS, OVERFLOW_DROP_OLDEST, TICK_PERIOD_US};

/// Configuration built from panel.toml
pub const fn panel_config() -> PanelConfig {
    PanelConfig {
        tick_period_us: TICK_PERIOD_US,
        idle_timeout_ms: IDLE_TIMEOUT_MS,
        overflow: if OVERFLOW_DROP_OLDEST {
            OverflowPolicy::DropOldest
        } else {
            OverflowPolicy::RejectNew
        },
    }
}

/// Validated configuration and its idle threshold in ticks
///
/// Falls back to the defaults if the generated values do not validate.
pub fn load() -> (PanelConfig, u32) {
    let config = panel_config();
    match config.idle_threshold_ticks() {
        Ok(threshold) => (config, threshold),
        Err(e) => {
            error!("Invalid panel configuration: {:?}, using defaults", e);
            (PanelConfig::default(), DEFAULT_IDLE_THRESHOLD_TICKS)
        }
    }
}
