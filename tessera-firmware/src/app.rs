//! Demo application
//!
//! Stands in for the real widgets: a button press toggles the LED at the
//! button's own column and row, and the dial walks a marker along the
//! bottom LED row.

use defmt::*;
use tessera_core::config::{COLUMNS, LED_ROWS};
use tessera_core::{BackingStore, Event};

/// Row used by the dial marker
const MARKER_ROW: usize = LED_ROWS - 1;

pub struct App {
    store: &'static BackingStore,
    marker: usize,
}

impl App {
    pub fn new(store: &'static BackingStore) -> Self {
        store.clear_all();
        store.set(MARKER_ROW, 0);
        Self { store, marker: 0 }
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::ButtonPress(_) => {
                if let Some((column, row)) = event.button_slot() {
                    let lit = self.store.toggle(row, column);
                    debug!("Button ({}, {}) -> LED {}", column, row, lit);
                }
            }
            Event::DialTurn(delta) => {
                self.store.clear(MARKER_ROW, self.marker);
                self.marker = (self.marker as i32 + delta as i32).rem_euclid(COLUMNS as i32) as usize;
                self.store.set(MARKER_ROW, self.marker);
                trace!("Marker at column {}", self.marker);
            }
        }
    }
}
