//! State shared between the tick context and the main loop
//!
//! These statics are the only cross-context channels:
//! - [`BACKING_STORE`]: written by the main loop, read by the tick
//! - [`EVENT_QUEUE`]: produced by the tick, consumed by the main loop
//! - [`PANEL_IDLE`]: published by the tick, read by the main loop

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use portable_atomic::{AtomicBool, Ordering};
use tessera_core::config::EVENT_QUEUE_CAPACITY;
use tessera_core::{BackingStore, Event, EventQueue, EventSink, OverflowPolicy, Push};

type SharedQueue = Mutex<CriticalSectionRawMutex, RefCell<EventQueue<Event, EVENT_QUEUE_CAPACITY>>>;

/// LED pattern the scanner displays
pub static BACKING_STORE: BackingStore = BackingStore::new();

/// Input events awaiting the main loop
pub static EVENT_QUEUE: SharedQueue =
    Mutex::new(RefCell::new(EventQueue::new(OverflowPolicy::RejectNew)));

/// True while the display is blanked for inactivity
pub static PANEL_IDLE: AtomicBool = AtomicBool::new(false);

/// Producer half of [`EVENT_QUEUE`], owned by the tick task
pub struct QueueProducer;

impl EventSink for QueueProducer {
    fn emit(&mut self, event: Event) -> Push<Event> {
        EVENT_QUEUE.lock(|queue| queue.borrow_mut().push(event))
    }
}

/// Take the oldest pending event
pub fn next_event() -> Option<Event> {
    EVENT_QUEUE.lock(|queue| queue.borrow_mut().pop())
}

/// Events lost to queue overflow since boot
pub fn dropped_events() -> u32 {
    EVENT_QUEUE.lock(|queue| queue.borrow().dropped())
}

/// Apply the configured overflow policy
pub fn set_overflow_policy(policy: OverflowPolicy) {
    EVENT_QUEUE.lock(|queue| queue.borrow_mut().set_policy(policy));
}

/// Whether the main loop may sleep until the next tick
pub fn is_idle() -> bool {
    PANEL_IDLE.load(Ordering::Acquire)
}
