//! Host-side line doubles for tests

use tessera_hal::{InputPin, OutputPin};

use crate::config::{BUTTON_ROWS, COLUMNS, LED_ROWS};
use crate::traits::PanelLines;

/// A single line that remembers its level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPin {
    pub level: bool,
}

impl MockPin {
    pub const fn high() -> Self {
        Self { level: true }
    }

    pub const fn low() -> Self {
        Self { level: false }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.level = true;
    }

    fn set_low(&mut self) {
        self.level = false;
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> bool {
        self.level
    }
}

/// Simulated panel
///
/// Button rows read the `pressed` entry of whichever column is currently
/// active, and read low when no column is active. Dial lines idle high.
#[derive(Debug, Clone)]
pub struct MockLines {
    pub columns: [bool; COLUMNS],
    pub rows: [bool; LED_ROWS],
    pub pressed: [[bool; BUTTON_ROWS]; COLUMNS],
    pub a: bool,
    pub b: bool,
    pub button_reads: usize,
}

impl Default for MockLines {
    fn default() -> Self {
        Self {
            columns: [false; COLUMNS],
            rows: [false; LED_ROWS],
            pressed: [[false; BUTTON_ROWS]; COLUMNS],
            a: true,
            b: true,
            button_reads: 0,
        }
    }
}

impl MockLines {
    /// Index of the single active column, if exactly one is active
    pub fn active_column(&self) -> Option<usize> {
        let mut active = self.columns.iter().enumerate().filter(|(_, on)| **on);
        match (active.next(), active.next()) {
            (Some((column, _)), None) => Some(column),
            _ => None,
        }
    }

    /// Lit rows as a bitmask
    pub fn row_mask(&self) -> u16 {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .fold(0, |mask, (row, _)| mask | 1 << row)
    }

    /// Whether every row and column line is low
    pub fn is_dark(&self) -> bool {
        self.columns.iter().chain(self.rows.iter()).all(|on| !on)
    }
}

impl PanelLines for MockLines {
    fn set_column(&mut self, column: usize, active: bool) {
        self.columns[column] = active;
    }

    fn set_row(&mut self, row: usize, lit: bool) {
        self.rows[row] = lit;
    }

    fn button_row(&mut self, row: usize) -> bool {
        self.button_reads += 1;
        match self.active_column() {
            Some(column) => self.pressed[column][row],
            None => false,
        }
    }

    fn dial_a(&mut self) -> bool {
        self.a
    }

    fn dial_b(&mut self) -> bool {
        self.b
    }
}
