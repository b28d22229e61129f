//! Tick-context panel driver
//!
//! [`Panel`] owns the physical lines and all state that only the tick
//! touches. The two things shared with the main loop are passed in on every
//! tick: the backing store (read here, written there) and an event sink
//! (produced here, consumed there).
//!
//! One tick, in order:
//! 1. Idle timer counts the tick and decides whether this tick is blank
//! 2. Scanner releases the previous column and drives the next one
//! 3. Button sampler records that column's button rows
//! 4. Dial decoder polls both dial lines
//! 5. After the last column, rising button edges become press events
//!
//! Any emitted event resets the idle timer within the same tick.

use crate::config::{ConfigError, PanelConfig};
use crate::display::BackingStore;
use crate::input::buttons::{press_events, ButtonSampler};
use crate::input::{DialState, Event, QuadratureDecoder};
use crate::queue::{EventSink, Push};
use crate::scan::{ColumnScanner, IdleTimer};
use crate::traits::PanelLines;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Column scanned this tick
    pub column: usize,
    /// Lines were forced low instead of driven
    pub blanked: bool,
    /// Panel is idle at the end of the tick
    pub idle: bool,
    /// Events accepted by the sink
    pub emitted: u8,
    /// Events lost to sink overflow (rejected or displaced)
    pub lost: u8,
}

impl TickReport {
    fn deliver<S: EventSink>(&mut self, sink: &mut S, event: Event) {
        match sink.emit(event) {
            Push::Stored => self.emitted += 1,
            Push::Displaced(_) => {
                self.emitted += 1;
                self.lost += 1;
            }
            Push::Rejected(_) => self.lost += 1,
        }
    }
}

/// Scanner, sampler, dial decoder and idle timer over one set of lines
pub struct Panel<L> {
    lines: L,
    scanner: ColumnScanner,
    buttons: ButtonSampler,
    dial: QuadratureDecoder,
    idle: IdleTimer,
}

impl<L: PanelLines> Panel<L> {
    /// Create a panel from validated configuration
    pub fn new(lines: L, config: &PanelConfig) -> Result<Self, ConfigError> {
        let threshold = config.idle_threshold_ticks()?;
        Ok(Self::with_idle_threshold(lines, threshold))
    }

    /// Create a panel that blanks after `threshold` idle ticks
    pub fn with_idle_threshold(lines: L, threshold: u32) -> Self {
        Self {
            lines,
            scanner: ColumnScanner::new(),
            buttons: ButtonSampler::new(),
            dial: QuadratureDecoder::new(),
            idle: IdleTimer::new(threshold),
        }
    }

    /// Run one tick
    ///
    /// Must complete well within one tick period and never block.
    pub fn tick<S: EventSink>(&mut self, store: &BackingStore, sink: &mut S) -> TickReport {
        let blanked = self.idle.tick();
        let column = self.scanner.step(&mut self.lines, store, blanked);
        self.buttons.sample(&mut self.lines, column);

        let mut report = TickReport {
            column,
            blanked,
            ..Default::default()
        };

        if let Some(event) = self.dial.poll(&mut self.lines) {
            self.idle.reset();
            report.deliver(sink, event);
        }

        if self.scanner.cycle_complete() {
            let pushed = self.buttons.finish_cycle();
            if pushed != 0 {
                self.idle.reset();
            }
            for event in press_events(pushed) {
                report.deliver(sink, event);
            }
        }

        report.idle = self.idle.is_idle();
        report
    }

    /// Restart the idle timeout without an input event
    pub fn wake(&mut self) {
        self.idle.reset();
    }

    /// Whether the panel is blanked and the main loop may sleep
    pub fn is_idle(&self) -> bool {
        self.idle.is_idle()
    }

    /// Idle timer state
    pub fn idle(&self) -> &IdleTimer {
        &self.idle
    }

    /// Button sampler state
    pub fn buttons(&self) -> &ButtonSampler {
        &self.buttons
    }

    /// Dial decoder state
    pub fn dial_state(&self) -> DialState {
        self.dial.state()
    }

    /// Column driven by the last tick
    pub fn active_column(&self) -> usize {
        self.scanner.active()
    }

    /// Borrow the lines
    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Mutably borrow the lines
    pub fn lines_mut(&mut self) -> &mut L {
        &mut self.lines
    }

    /// Blank the panel and release the lines
    pub fn release(mut self) -> L {
        self.lines.blank();
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{button_index, COLUMNS};
    use crate::mock::MockLines;
    use crate::queue::{EventQueue, OverflowPolicy};

    type Queue = EventQueue<Event, 8>;

    fn setup(threshold: u32) -> (Panel<MockLines>, BackingStore, Queue) {
        (
            Panel::with_idle_threshold(MockLines::default(), threshold),
            BackingStore::new(),
            EventQueue::new(OverflowPolicy::RejectNew),
        )
    }

    fn drain(queue: &mut Queue) -> heapless::Vec<Event, 8> {
        let mut events = heapless::Vec::new();
        while let Some(event) = queue.pop() {
            events.push(event).unwrap();
        }
        events
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = PanelConfig {
            tick_period_us: 0,
            ..Default::default()
        };
        assert!(Panel::new(MockLines::default(), &config).is_err());

        let panel = Panel::new(MockLines::default(), &PanelConfig::default()).unwrap();
        assert_eq!(panel.idle().threshold(), 72_000);
    }

    #[test]
    fn test_button_pressed_for_one_column_slot() {
        let (mut panel, store, mut queue) = setup(1000);

        for tick in 1..=8 {
            // Column 3 is scanned on tick 4
            panel.lines_mut().pressed[3] = if tick == 4 { [true, true] } else { [false, false] };
            let report = panel.tick(&store, &mut queue);
            assert_eq!(report.column, tick - 1);
            if tick < 8 {
                assert!(queue.is_empty());
            }
        }

        assert_eq!(
            drain(&mut queue).as_slice(),
            &[
                Event::ButtonPress(3 * 2),
                Event::ButtonPress(3 * 2 + 1)
            ]
        );
    }

    #[test]
    fn test_held_button_reports_once_release_silent() {
        let (mut panel, store, mut queue) = setup(10_000);
        panel.lines_mut().pressed[6] = [false, true];

        for _ in 0..COLUMNS * 4 {
            panel.tick(&store, &mut queue);
        }
        assert_eq!(drain(&mut queue).as_slice(), &[Event::ButtonPress(button_index(6, 1))]);
        assert!(panel.buttons().is_held(6, 1));

        panel.lines_mut().pressed[6] = [false, false];
        for _ in 0..COLUMNS * 2 {
            panel.tick(&store, &mut queue);
        }
        assert!(queue.is_empty());

        panel.lines_mut().pressed[6] = [false, true];
        for _ in 0..COLUMNS {
            panel.tick(&store, &mut queue);
        }
        assert_eq!(drain(&mut queue).as_slice(), &[Event::ButtonPress(13)]);
    }

    #[test]
    fn test_dial_pulse_single_turn() {
        let (mut panel, store, mut queue) = setup(1000);

        for tick in 0..10 {
            panel.lines_mut().a = !(2..5).contains(&tick);
            let report = panel.tick(&store, &mut queue);
            assert_eq!(report.emitted, u8::from(tick == 2));
        }

        assert_eq!(drain(&mut queue).as_slice(), &[Event::DialTurn(1)]);
        assert_eq!(panel.dial_state(), DialState::Ready);
    }

    #[test]
    fn test_idle_blanks_on_threshold_tick() {
        let (mut panel, store, mut queue) = setup(5);
        store.set_column(0, 0b1);
        store.set_column(1, 0b1);
        store.set_column(2, 0b1);
        store.set_column(3, 0b1);
        store.set_column(4, 0b1);

        for tick in 1..=4 {
            let report = panel.tick(&store, &mut queue);
            assert!(!report.blanked, "tick {tick}");
            assert_eq!(panel.lines().active_column(), Some(tick - 1));
            assert_eq!(panel.lines().row_mask(), 0b1);
        }

        for _ in 5..=20 {
            let report = panel.tick(&store, &mut queue);
            assert!(report.blanked);
            assert!(report.idle);
            assert!(panel.lines().is_dark());
            assert_eq!(panel.idle().ticks(), 5);
        }
        assert!(panel.is_idle());
    }

    #[test]
    fn test_event_resets_idle_same_tick() {
        let (mut panel, store, mut queue) = setup(5);
        for _ in 0..10 {
            panel.tick(&store, &mut queue);
        }
        assert!(panel.is_idle());

        // Dial pulse while blank
        panel.lines_mut().b = false;
        let report = panel.tick(&store, &mut queue);
        assert!(report.blanked);
        assert!(!report.idle);
        assert_eq!(panel.idle().ticks(), 0);
        assert_eq!(queue.pop(), Some(Event::DialTurn(-1)));

        // Next tick drives again
        panel.lines_mut().b = true;
        let report = panel.tick(&store, &mut queue);
        assert!(!report.blanked);
        assert_eq!(panel.idle().ticks(), 1);
        assert!(panel.lines().active_column().is_some());
    }

    #[test]
    fn test_button_edge_resets_idle() {
        let (mut panel, store, mut queue) = setup(1000);
        panel.lines_mut().pressed[0] = [true, false];
        for _ in 0..COLUMNS - 1 {
            panel.tick(&store, &mut queue);
        }
        assert_eq!(panel.idle().ticks(), 7);
        panel.tick(&store, &mut queue);
        assert_eq!(panel.idle().ticks(), 0);
        assert_eq!(queue.pop(), Some(Event::ButtonPress(0)));
    }

    #[test]
    fn test_wake_restores_display() {
        let (mut panel, store, mut queue) = setup(2);
        panel.tick(&store, &mut queue);
        panel.tick(&store, &mut queue);
        assert!(panel.is_idle());
        panel.wake();
        assert!(!panel.tick(&store, &mut queue).blanked);
    }

    #[test]
    fn test_overflow_reported() {
        let mut panel = Panel::with_idle_threshold(MockLines::default(), 1000);
        let store = BackingStore::new();
        let mut queue: EventQueue<Event, 1> = EventQueue::new(OverflowPolicy::RejectNew);
        panel.lines_mut().pressed = [[true, true]; COLUMNS];

        let last = (0..COLUMNS)
            .map(|_| panel.tick(&store, &mut queue))
            .last()
            .unwrap();
        assert_eq!(last.emitted, 1);
        assert_eq!(last.lost, 15);
        assert_eq!(queue.dropped(), 15);
        assert_eq!(queue.pop(), Some(Event::ButtonPress(0)));
    }

    #[test]
    fn test_release_blanks_lines() {
        let (mut panel, store, mut queue) = setup(100);
        store.set_column(0, 0x7FF);
        panel.tick(&store, &mut queue);
        assert!(!panel.lines().is_dark());
        assert!(panel.release().is_dark());
    }
}
