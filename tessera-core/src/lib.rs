//! Board-agnostic core of the Tessera panel firmware
//!
//! The panel is a multiplexed LED matrix and a button matrix sharing the
//! same column lines, plus a rotary dial. This crate holds everything that
//! runs inside the fixed-rate tick and the types the main loop consumes:
//!
//! - Display backing store (written by the main loop, read by the scanner)
//! - Column scanner and idle blanking
//! - Button sampler with rising-edge detection
//! - Polled two-state dial decoder
//! - Bounded event queue with an explicit overflow policy
//! - The [`Panel`] context composing all of the above for one tick
//!
//! Nothing here touches global state; the firmware owns the statics.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod input;
pub mod panel;
pub mod queue;
pub mod scan;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use config::{ConfigError, PanelConfig};
pub use display::BackingStore;
pub use input::Event;
pub use panel::{Panel, TickReport};
pub use queue::{EventQueue, EventSink, OverflowPolicy, Push};
