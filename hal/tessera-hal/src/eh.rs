//! Adapter from `embedded-hal` 1.0 digital pins
//!
//! Chip HALs (embassy-rp, embassy-stm32, ...) implement the `embedded-hal`
//! digital traits with `Error = Infallible`. Wrapping such a pin in [`Eh`]
//! makes it usable wherever the panel expects a [`crate::OutputPin`] or
//! [`crate::InputPin`].

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Wraps an infallible `embedded-hal` pin
#[derive(Debug)]
pub struct Eh<P>(pub P);

impl<P> Eh<P> {
    /// Wrap a pin
    pub const fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

impl<P> OutputPin for Eh<P>
where
    P: digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        infallible(self.0.set_high());
    }

    fn set_low(&mut self) {
        infallible(self.0.set_low());
    }
}

impl<P> InputPin for Eh<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        infallible(self.0.is_high())
    }

    fn is_low(&mut self) -> bool {
        infallible(self.0.is_low())
    }
}
