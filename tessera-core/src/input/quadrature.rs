//! Rotary dial decoder
//!
//! Polled once per tick. Each detent pulls one of the two lines low for a
//! few milliseconds; whichever line falls first gives the direction. This is
//! not a full quadrature phase decoder: it never tracks the A/B phase
//! relationship, it only debounces one pulse into one turn.
//!
//! ```text
//! Ready --A low--> emit +1 --> Wait
//! Ready --B low--> emit -1 --> Wait      (A wins if both are low)
//! Wait  --A and B high-----> Ready
//! ```

use crate::input::Event;
use crate::traits::PanelLines;

/// Decoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialState {
    /// Both lines were high; the next low line is a new detent
    #[default]
    Ready,
    /// A detent was reported; waiting for both lines to return high
    Wait,
}

/// Two-state dial decoder
#[derive(Debug, Clone, Default)]
pub struct QuadratureDecoder {
    state: DialState,
}

impl QuadratureDecoder {
    /// Create a decoder in the ready state
    pub const fn new() -> Self {
        Self {
            state: DialState::Ready,
        }
    }

    /// Sample both dial lines and decode them
    pub fn poll<L: PanelLines>(&mut self, lines: &mut L) -> Option<Event> {
        let a = lines.dial_a();
        let b = lines.dial_b();
        self.update(a, b)
    }

    /// Advance the state machine with raw line levels (true = high)
    pub fn update(&mut self, a: bool, b: bool) -> Option<Event> {
        match self.state {
            DialState::Ready => {
                let event = if !a {
                    Event::CW
                } else if !b {
                    Event::CCW
                } else {
                    return None;
                };
                self.state = DialState::Wait;
                Some(event)
            }
            DialState::Wait => {
                if a && b {
                    self.state = DialState::Ready;
                }
                None
            }
        }
    }

    /// Current state
    pub fn state(&self) -> DialState {
        self.state
    }
}
