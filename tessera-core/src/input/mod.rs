//! Input decoding
//!
//! Turns raw line samples into discrete [`Event`]s. Both decoders run in
//! the tick context and hand their events to an [`crate::EventSink`].

pub mod buttons;
pub mod event;
pub mod quadrature;

pub use buttons::ButtonSampler;
pub use event::Event;
pub use quadrature::{DialState, QuadratureDecoder};
