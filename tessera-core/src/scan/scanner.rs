//! Column scanner
//!
//! Each tick releases the active column, steps to the next one, puts that
//! column's row pattern from the backing store on the row lines and selects
//! the column. The scanner never computes pixels; the backing store is the
//! only source of what gets lit.

use crate::config::{COLUMNS, LED_ROWS};
use crate::display::BackingStore;
use crate::traits::PanelLines;

/// Round-robin column multiplexer
#[derive(Debug, Clone)]
pub struct ColumnScanner {
    active: usize,
}

impl Default for ColumnScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnScanner {
    /// Create a scanner whose first step lands on column 0
    pub const fn new() -> Self {
        Self {
            active: COLUMNS - 1,
        }
    }

    /// Step to the next column and drive it
    ///
    /// With `blank` set, every row and column line is forced low instead and
    /// nothing is selected. Returns the new active column.
    pub fn step<L: PanelLines>(
        &mut self,
        lines: &mut L,
        store: &BackingStore,
        blank: bool,
    ) -> usize {
        lines.set_column(self.active, false);
        self.active = (self.active + 1) % COLUMNS;

        if blank {
            lines.blank();
        } else {
            let mask = store.column(self.active);
            for row in 0..LED_ROWS {
                lines.set_row(row, mask & (1 << row) != 0);
            }
            lines.set_column(self.active, true);
        }

        self.active
    }

    /// Column driven by the last step
    pub fn active(&self) -> usize {
        self.active
    }

    /// Whether the last step completed a full column cycle
    ///
    /// True after the last column is scanned; the next step wraps to 0.
    pub fn cycle_complete(&self) -> bool {
        self.active == COLUMNS - 1
    }
}
