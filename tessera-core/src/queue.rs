//! Bounded event queue
//!
//! Carries events from the tick context (single producer) to the main loop
//! (single consumer). The queue never grows and never silently corrupts:
//! when it is full, the configured [`OverflowPolicy`] decides which event is
//! lost, the loss is reported to the producer through [`Push`], and the
//! consumer can read the running total from [`EventQueue::dropped`].

use heapless::Deque;

use crate::input::Event;

/// What to do when an event arrives at a full queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OverflowPolicy {
    /// Keep the queued events, discard the new one
    #[default]
    RejectNew,
    /// Discard the oldest queued event to make room
    DropOldest,
}

/// Outcome of pushing onto the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Push<T> {
    /// Stored without loss
    Stored,
    /// Stored; the returned oldest item was evicted
    Displaced(T),
    /// Not stored; the returned item is the one that was pushed
    Rejected(T),
}

impl<T> Push<T> {
    /// Whether the push lost an item (either the new or an old one)
    pub fn is_lossy(&self) -> bool {
        !matches!(self, Push::Stored)
    }

    /// Whether the pushed item is now in the queue
    pub fn is_stored(&self) -> bool {
        !matches!(self, Push::Rejected(_))
    }
}

/// Fixed-capacity FIFO with an explicit overflow policy
pub struct EventQueue<T, const N: usize> {
    items: Deque<T, N>,
    policy: OverflowPolicy,
    dropped: u32,
}

impl<T, const N: usize> EventQueue<T, N> {
    /// Create an empty queue
    pub const fn new(policy: OverflowPolicy) -> Self {
        Self {
            items: Deque::new(),
            policy,
            dropped: 0,
        }
    }

    /// Append an item, applying the overflow policy when full
    pub fn push(&mut self, item: T) -> Push<T> {
        if !self.items.is_full() {
            return self.store(item);
        }

        self.dropped = self.dropped.saturating_add(1);
        match self.policy {
            OverflowPolicy::RejectNew => Push::Rejected(item),
            OverflowPolicy::DropOldest => match self.items.pop_front() {
                Some(oldest) => match self.store(item) {
                    Push::Rejected(item) => Push::Rejected(item),
                    _ => Push::Displaced(oldest),
                },
                // Zero-capacity queue
                None => Push::Rejected(item),
            },
        }
    }

    fn store(&mut self, item: T) -> Push<T> {
        match self.items.push_back(item) {
            Ok(()) => Push::Stored,
            Err(item) => Push::Rejected(item),
        }
    }

    /// Remove the oldest item
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Look at the oldest item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there is nothing to consume
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the next push will hit the overflow policy
    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Maximum number of queued items
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard every queued item (the dropped counter is kept)
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items lost to overflow since creation (saturating)
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Current overflow policy
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Change the overflow policy
    pub fn set_policy(&mut self, policy: OverflowPolicy) {
        self.policy = policy;
    }
}

/// Destination for events produced in the tick context
///
/// Implemented by [`EventQueue`] directly and by whatever shared wrapper the
/// firmware places around it.
pub trait EventSink {
    /// Hand an event to the consumer side
    fn emit(&mut self, event: Event) -> Push<Event>;
}

impl<const N: usize> EventSink for EventQueue<Event, N> {
    fn emit(&mut self, event: Event) -> Push<Event> {
        self.push(event)
    }
}
