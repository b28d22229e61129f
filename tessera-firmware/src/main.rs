//! Tessera - LED Matrix / Button / Dial Panel Firmware
//!
//! Two execution contexts:
//! - The tick task, on a high-priority interrupt executor, scans the matrix
//!   and decodes input at a fixed period.
//! - The main loop, in thread mode, drains input events, updates the
//!   backing store and sleeps between ticks while the panel is idle.
//!
//! They only talk through the statics in [`channels`].

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use tessera_core::Panel;
use {defmt_rtt as _, panic_probe as _};

use crate::app::App;
use crate::channels::BACKING_STORE;

mod app;
mod board;
mod channels;
mod config;
mod tasks;

/// Executor for the tick context
static TICK_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    TICK_EXECUTOR.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Tessera firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (lines, mut spare) = board::init(p);
    info!("Panel lines claimed");

    let (config, threshold) = config::load();
    let panel = Panel::with_idle_threshold(lines, threshold);
    info!(
        "Config: tick={}us idle={}ms ({} ticks) overflow={:?}",
        config.tick_period_us,
        config.idle_timeout_ms,
        threshold,
        config.overflow
    );
    channels::set_overflow_policy(config.overflow);

    let mut app = App::new(&BACKING_STORE);

    // Ready, set, go!
    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let spawner = TICK_EXECUTOR.start(interrupt::SWI_IRQ_1);
    spawner
        .spawn(tasks::tick_task(panel, config.tick_period_us))
        .unwrap();
    info!("Tick task spawned");

    let mut reported_drops = 0;
    loop {
        while let Some(event) = channels::next_event() {
            debug!("Event: {:?}", event);
            spare.led.toggle();
            app.handle(event);
        }

        let dropped = channels::dropped_events();
        if dropped != reported_drops {
            warn!("{} event(s) dropped since boot", dropped);
            reported_drops = dropped;
        }

        // Any tick (the next one at the latest) resumes the loop
        if channels::is_idle() {
            cortex_m::asm::wfi();
        }
    }
}
