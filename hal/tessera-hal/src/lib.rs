//! Tessera Hardware Abstraction Layer
//!
//! Defines the digital line traits the panel core is written against, so the
//! scanner and decoders run unchanged on real pins and on host-side doubles.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tessera-core (scanner, sampler, dial)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  test doubles │
//! │ 1.0 pins (Eh) │       │   (host)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::ActiveLow`] - Polarity inversion for either direction
//! - [`eh::Eh`] - Adapter for any infallible `embedded-hal` 1.0 pin

#![no_std]
#![deny(unsafe_code)]

pub mod eh;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use eh::Eh;
pub use gpio::{ActiveLow, InputPin, Level, OutputPin};
