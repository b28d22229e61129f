//! Tick task
//!
//! The fixed-rate timer service for the panel. Every period it runs one
//! [`Panel::tick`]: scan the next column, sample its buttons, poll the dial
//! and queue any events. The body is bounded and never awaits, so it stays
//! well inside one period; overruns are logged.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};
use portable_atomic::Ordering;
use tessera_core::Panel;

use crate::board::BoardLines;
use crate::channels::{QueueProducer, BACKING_STORE, PANEL_IDLE};

/// Tick task - drives the panel at a fixed period
#[embassy_executor::task]
pub async fn tick_task(mut panel: Panel<BoardLines>, period_us: u32) {
    info!("Tick task started ({} us period)", period_us);

    let period = Duration::from_micros(period_us as u64);
    let mut ticker = Ticker::every(period);
    let mut sink = QueueProducer;
    let mut was_idle = false;

    loop {
        ticker.next().await;
        let start = Instant::now();

        let report = panel.tick(&BACKING_STORE, &mut sink);

        if report.idle != was_idle {
            PANEL_IDLE.store(report.idle, Ordering::Release);
            if report.idle {
                info!("Idle timeout reached, display blanked");
            } else {
                info!("Activity, display restored");
            }
            was_idle = report.idle;
        }

        if report.lost > 0 {
            warn!("Event queue full: {} event(s) lost", report.lost);
        }

        let elapsed = start.elapsed();
        if elapsed > period {
            warn!(
                "Tick overran: {} us (column {})",
                elapsed.as_micros(),
                report.column
            );
        }
    }
}
