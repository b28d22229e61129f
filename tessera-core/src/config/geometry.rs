//! Matrix geometry
//!
//! The panel has 8 column select lines shared by an 11-row LED matrix and a
//! 2-row button matrix.

/// Number of multiplexed columns
pub const COLUMNS: usize = 8;

/// LED rows driven per column
pub const LED_ROWS: usize = 11;

/// Button rows sampled per column
pub const BUTTON_ROWS: usize = 2;

/// Total button slots (`COLUMNS * BUTTON_ROWS`)
pub const BUTTON_COUNT: usize = COLUMNS * BUTTON_ROWS;

/// Events the queue holds before its overflow policy applies
pub const EVENT_QUEUE_CAPACITY: usize = 8;

/// Mask covering the button bits of a single column
pub const COLUMN_BUTTON_MASK: u16 = (1 << BUTTON_ROWS) - 1;

/// Mask covering every LED row of a column
pub const LED_ROW_MASK: u16 = (1 << LED_ROWS) - 1;

/// Button slot for a (column, button row) pair
pub const fn button_index(column: usize, row: usize) -> u8 {
    (column * BUTTON_ROWS + row) as u8
}

// Packed button state and column bitmasks are u16.
const _: () = assert!(BUTTON_COUNT <= 16);
const _: () = assert!(LED_ROWS <= 16);
