//! Input events delivered to the main loop

use crate::config::{BUTTON_COUNT, BUTTON_ROWS};

/// A discrete, debounced input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Button slot `column * BUTTON_ROWS + row` went from released to pressed
    ButtonPress(u8),
    /// Dial moved one detent; +1 when line A pulsed first, -1 for line B
    DialTurn(i8),
}

impl Event {
    /// Clockwise dial detent
    pub const CW: Event = Event::DialTurn(1);

    /// Counter-clockwise dial detent
    pub const CCW: Event = Event::DialTurn(-1);

    /// Returns true if this is a button event
    pub fn is_button(&self) -> bool {
        matches!(self, Event::ButtonPress(_))
    }

    /// Returns true if this is a dial event
    pub fn is_dial(&self) -> bool {
        matches!(self, Event::DialTurn(_))
    }

    /// (column, button row) of a button press
    ///
    /// `None` for dial events and for slots outside the matrix.
    pub fn button_slot(&self) -> Option<(usize, usize)> {
        match *self {
            Event::ButtonPress(index) if (index as usize) < BUTTON_COUNT => {
                let index = index as usize;
                Some((index / BUTTON_ROWS, index % BUTTON_ROWS))
            }
            _ => None,
        }
    }

    /// Signed dial movement (0 for button events)
    pub fn dial_delta(&self) -> i8 {
        match *self {
            Event::DialTurn(delta) => delta,
            Event::ButtonPress(_) => 0,
        }
    }
}
