//! Panel line access
//!
//! Logical levels throughout: a column is active when high, an LED row is
//! lit when high, a button row reads high while its button is pressed, and
//! the dial lines idle high and pulse low on a detent. Boards with other
//! polarities wrap their pins in [`tessera_hal::ActiveLow`].

use tessera_hal::{InputPin, OutputPin};

use crate::config::{BUTTON_ROWS, COLUMNS, LED_ROWS};

/// Every line the tick context touches
pub trait PanelLines {
    /// Drive a column select line
    fn set_column(&mut self, column: usize, active: bool);

    /// Drive an LED row line
    fn set_row(&mut self, row: usize, lit: bool);

    /// Sample a button row line for the currently active column
    fn button_row(&mut self, row: usize) -> bool;

    /// Sample dial line A (true = high)
    fn dial_a(&mut self) -> bool;

    /// Sample dial line B (true = high)
    fn dial_b(&mut self) -> bool;

    /// Force every row and column line low
    fn blank(&mut self) {
        for row in 0..LED_ROWS {
            self.set_row(row, false);
        }
        for column in 0..COLUMNS {
            self.set_column(column, false);
        }
    }
}

/// [`PanelLines`] over individual HAL pins
///
/// Each group shares one pin type; chip HALs with type-erased pins (or
/// [`tessera_hal::Eh`] around them) fit directly.
pub struct MatrixLines<C, R, B, Q> {
    columns: [C; COLUMNS],
    rows: [R; LED_ROWS],
    buttons: [B; BUTTON_ROWS],
    dial_a: Q,
    dial_b: Q,
}

impl<C, R, B, Q> MatrixLines<C, R, B, Q>
where
    C: OutputPin,
    R: OutputPin,
    B: InputPin,
    Q: InputPin,
{
    /// Take ownership of the panel pins and drive all outputs low
    pub fn new(
        columns: [C; COLUMNS],
        rows: [R; LED_ROWS],
        buttons: [B; BUTTON_ROWS],
        dial_a: Q,
        dial_b: Q,
    ) -> Self {
        let mut lines = Self {
            columns,
            rows,
            buttons,
            dial_a,
            dial_b,
        };
        lines.blank();
        lines
    }

    /// Release the pins
    pub fn release(self) -> ([C; COLUMNS], [R; LED_ROWS], [B; BUTTON_ROWS], Q, Q) {
        (self.columns, self.rows, self.buttons, self.dial_a, self.dial_b)
    }
}

impl<C, R, B, Q> PanelLines for MatrixLines<C, R, B, Q>
where
    C: OutputPin,
    R: OutputPin,
    B: InputPin,
    Q: InputPin,
{
    fn set_column(&mut self, column: usize, active: bool) {
        if let Some(pin) = self.columns.get_mut(column) {
            pin.set_state(active);
        }
    }

    fn set_row(&mut self, row: usize, lit: bool) {
        if let Some(pin) = self.rows.get_mut(row) {
            pin.set_state(lit);
        }
    }

    fn button_row(&mut self, row: usize) -> bool {
        self.buttons.get_mut(row).is_some_and(|pin| pin.is_high())
    }

    fn dial_a(&mut self) -> bool {
        self.dial_a.is_high()
    }

    fn dial_b(&mut self) -> bool {
        self.dial_b.is_high()
    }
}
