//! Button matrix sampler
//!
//! Button rows share the LED column select lines, so each tick samples the
//! two button rows of the column the scanner just drove. Samples accumulate
//! into `current`, two bits per column. When the scan wraps, rising edges
//! against the previous full cycle become press events, so a held button
//! reports once and a release reports nothing.

use crate::config::{button_index, BUTTON_ROWS, COLUMNS, COLUMN_BUTTON_MASK};
use crate::input::Event;
use crate::traits::PanelLines;

/// Packed button state, bit `column * BUTTON_ROWS + row`
pub type ButtonBits = u16;

/// Per-cycle button sampler with rising-edge detection
#[derive(Debug, Clone, Default)]
pub struct ButtonSampler {
    /// Samples of the cycle in progress
    current: ButtonBits,
    /// Snapshot of the last complete cycle
    previous: ButtonBits,
}

impl ButtonSampler {
    /// Create a sampler with every button released
    pub const fn new() -> Self {
        Self {
            current: 0,
            previous: 0,
        }
    }

    /// Read the button rows of `column` and record them
    pub fn sample<L: PanelLines>(&mut self, lines: &mut L, column: usize) {
        let mut bits = 0;
        for row in 0..BUTTON_ROWS {
            if lines.button_row(row) {
                bits |= 1 << row;
            }
        }
        self.record(column, bits);
    }

    /// Replace the bits recorded for `column`
    ///
    /// Only that column's slot changes; every other slot keeps its value.
    pub fn record(&mut self, column: usize, bits: ButtonBits) {
        if column >= COLUMNS {
            return;
        }
        let shift = column * BUTTON_ROWS;
        self.current &= !(COLUMN_BUTTON_MASK << shift);
        self.current |= (bits & COLUMN_BUTTON_MASK) << shift;
    }

    /// Close the cycle: return newly pressed bits and snapshot `current`
    pub fn finish_cycle(&mut self) -> ButtonBits {
        let pushed = (self.current ^ self.previous) & self.current;
        self.previous = self.current;
        pushed
    }

    /// Samples of the cycle in progress
    pub fn current(&self) -> ButtonBits {
        self.current
    }

    /// Snapshot of the last complete cycle
    pub fn previous(&self) -> ButtonBits {
        self.previous
    }

    /// Whether a button was held during the last complete cycle
    pub fn is_held(&self, column: usize, row: usize) -> bool {
        column < COLUMNS
            && row < BUTTON_ROWS
            && self.previous & (1 << button_index(column, row)) != 0
    }
}

/// Press events for each set bit, least-significant first
pub fn press_events(pushed: ButtonBits) -> impl Iterator<Item = Event> {
    (0..ButtonBits::BITS as u8)
        .filter(move |&bit| pushed & (1 << bit) != 0)
        .map(Event::ButtonPress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockLines;
    use proptest::prelude::*;

    #[test]
    fn test_record_replaces_only_its_column() {
        let mut sampler = ButtonSampler::new();
        sampler.record(0, 0b11);
        sampler.record(7, 0b01);
        assert_eq!(sampler.current(), 0b11 | (0b01 << 14));

        sampler.record(0, 0b10);
        assert_eq!(sampler.current(), 0b10 | (0b01 << 14));
    }

    #[test]
    fn test_record_ignores_excess_bits() {
        let mut sampler = ButtonSampler::new();
        sampler.record(1, 0xFF);
        assert_eq!(sampler.current(), 0b11 << 2);
        sampler.record(COLUMNS, 0b11);
        assert_eq!(sampler.current(), 0b11 << 2);
    }

    #[test]
    fn test_rising_edges_only() {
        let mut sampler = ButtonSampler::new();
        sampler.record(2, 0b01);
        assert_eq!(sampler.finish_cycle(), 0b01 << 4);
        assert!(sampler.is_held(2, 0));

        // Still held: no new edge
        assert_eq!(sampler.finish_cycle(), 0);

        // Release: no edge
        sampler.record(2, 0);
        assert_eq!(sampler.finish_cycle(), 0);
        assert!(!sampler.is_held(2, 0));

        // Press again
        sampler.record(2, 0b01);
        assert_eq!(sampler.finish_cycle(), 0b01 << 4);
    }

    #[test]
    fn test_sample_reads_active_column() {
        let mut lines = MockLines::default();
        lines.pressed[5] = [false, true];
        lines.columns[5] = true;

        let mut sampler = ButtonSampler::new();
        sampler.sample(&mut lines, 5);
        assert_eq!(sampler.current(), 0b10 << 10);
    }

    #[test]
    fn test_press_events_lsb_first() {
        let events: heapless::Vec<Event, 16> = press_events(0b1000_0000_0000_0101).collect();
        assert_eq!(
            events.as_slice(),
            &[Event::ButtonPress(0), Event::ButtonPress(2), Event::ButtonPress(15)]
        );
        assert_eq!(press_events(0).count(), 0);
    }

    proptest! {
        #[test]
        fn prop_recorded_bits_match_samples(
            samples in proptest::collection::vec((0..COLUMNS, any::<bool>(), any::<bool>()), 1..64)
        ) {
            let mut sampler = ButtonSampler::new();
            let mut expected = [0u16; COLUMNS];
            for (column, r0, r1) in samples {
                let mut lines = MockLines::default();
                lines.columns[column] = true;
                lines.pressed[column] = [r0, r1];
                sampler.sample(&mut lines, column);
                expected[column] = r0 as u16 | (r1 as u16) << 1;

                let slot = (sampler.current() >> (column * BUTTON_ROWS)) & COLUMN_BUTTON_MASK;
                prop_assert_eq!(slot, expected[column]);
            }
            for (column, bits) in expected.iter().enumerate() {
                let slot = (sampler.current() >> (column * BUTTON_ROWS)) & COLUMN_BUTTON_MASK;
                prop_assert_eq!(slot, *bits);
            }
        }
    }
}
