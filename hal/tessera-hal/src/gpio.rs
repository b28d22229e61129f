//! GPIO line abstractions
//!
//! The panel only ever needs two things from a line: drive it to a level, or
//! sample its level. Everything here is infallible; a stuck line is
//! indistinguishable from a legitimate level.

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

/// Digital output line
///
/// Used for LED row drivers and column select lines.
pub trait OutputPin {
    /// Drive the line high (logic 1)
    fn set_high(&mut self);

    /// Drive the line low (logic 0)
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Drive the line high when `high` is true, low otherwise
    fn set_state(&mut self, high: bool) {
        self.set_level(Level::from(high));
    }
}

/// Digital input line
///
/// Takes `&mut self` because `embedded-hal` 1.0 reads require mutable access.
pub trait InputPin {
    /// Check if the line reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the line reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }

    /// Sample the line level
    fn level(&mut self) -> Level {
        Level::from(self.is_high())
    }
}

/// Inverts the logical sense of a line
///
/// Boards that sink LED current through a column driver, or whose row
/// transistors invert, wrap those pins so the scanner keeps reasoning in
/// "high = active".
#[derive(Debug)]
pub struct ActiveLow<P>(pub P);

impl<P> ActiveLow<P> {
    /// Wrap a pin
    pub const fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: OutputPin> OutputPin for ActiveLow<P> {
    fn set_high(&mut self) {
        self.0.set_low();
    }

    fn set_low(&mut self) {
        self.0.set_high();
    }
}

impl<P: InputPin> InputPin for ActiveLow<P> {
    fn is_high(&mut self) -> bool {
        self.0.is_low()
    }
}
