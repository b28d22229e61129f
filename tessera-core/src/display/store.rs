//! Display backing store
//!
//! One row bitmask per column. The main loop is the only writer; the
//! scanner reads one column per tick. Each column is a single atomic word,
//! so a column is never observed half-written, and the store can live in a
//! plain `static` without a lock.
//!
//! Coordinates outside the matrix are ignored on write and read as off.

use portable_atomic::{AtomicU16, Ordering};

use crate::config::{COLUMNS, LED_ROWS, LED_ROW_MASK};

/// Column-major LED state, bit `r` of column `c` lights row `r`
pub struct BackingStore {
    columns: [AtomicU16; COLUMNS],
}

impl Default for BackingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BackingStore {
    /// Create a store with every LED off
    pub const fn new() -> Self {
        Self {
            columns: [const { AtomicU16::new(0) }; COLUMNS],
        }
    }

    fn slot(&self, row: usize, col: usize) -> Option<(&AtomicU16, u16)> {
        if row >= LED_ROWS {
            return None;
        }
        self.columns.get(col).map(|word| (word, 1 << row))
    }

    /// Light the LED at (row, col)
    pub fn set(&self, row: usize, col: usize) {
        if let Some((word, bit)) = self.slot(row, col) {
            word.fetch_or(bit, Ordering::Relaxed);
        }
    }

    /// Turn off the LED at (row, col)
    pub fn clear(&self, row: usize, col: usize) {
        if let Some((word, bit)) = self.slot(row, col) {
            word.fetch_and(!bit, Ordering::Relaxed);
        }
    }

    /// Set the LED at (row, col) to `on`
    pub fn write(&self, row: usize, col: usize, on: bool) {
        if on {
            self.set(row, col);
        } else {
            self.clear(row, col);
        }
    }

    /// Flip the LED at (row, col), returning its new state
    pub fn toggle(&self, row: usize, col: usize) -> bool {
        match self.slot(row, col) {
            Some((word, bit)) => word.fetch_xor(bit, Ordering::Relaxed) & bit == 0,
            None => false,
        }
    }

    /// Whether the LED at (row, col) is lit
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        match self.slot(row, col) {
            Some((word, bit)) => word.load(Ordering::Relaxed) & bit != 0,
            None => false,
        }
    }

    /// Replace a whole column; bits above the last LED row are dropped
    pub fn set_column(&self, col: usize, mask: u16) {
        if let Some(word) = self.columns.get(col) {
            word.store(mask & LED_ROW_MASK, Ordering::Relaxed);
        }
    }

    /// Row bitmask for a column (0 when out of range)
    pub fn column(&self, col: usize) -> u16 {
        self.columns
            .get(col)
            .map_or(0, |word| word.load(Ordering::Relaxed))
    }

    /// Turn every LED off
    pub fn clear_all(&self) {
        for word in &self.columns {
            word.store(0, Ordering::Relaxed);
        }
    }

    /// Number of lit LEDs
    pub fn lit_count(&self) -> u32 {
        self.columns
            .iter()
            .map(|word| word.load(Ordering::Relaxed).count_ones())
            .sum()
    }
}
