//! Idle timeout controller
//!
//! Counts ticks since the last button press or dial turn. The count
//! saturates at the threshold; once there the display stays blank and the
//! main loop may sleep between ticks, until an interaction resets it.

/// Tick counter with a saturating idle threshold
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdleTimer {
    ticks: u32,
    threshold: u32,
}

impl IdleTimer {
    /// Create a timer that goes idle after `threshold` ticks (at least 1)
    pub const fn new(threshold: u32) -> Self {
        Self {
            ticks: 0,
            threshold: if threshold == 0 { 1 } else { threshold },
        }
    }

    /// Count one tick; returns whether the panel is now idle
    pub fn tick(&mut self) -> bool {
        if self.ticks < self.threshold {
            self.ticks += 1;
        }
        self.is_idle()
    }

    /// Record an interaction
    pub fn reset(&mut self) {
        self.ticks = 0;
    }

    /// Whether the threshold has been reached
    pub fn is_idle(&self) -> bool {
        self.ticks >= self.threshold
    }

    /// Ticks since the last interaction (capped at the threshold)
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Idle threshold in ticks
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reaches_threshold_on_nth_tick() {
        let mut idle = IdleTimer::new(5);
        for _ in 0..4 {
            assert!(!idle.tick());
        }
        assert!(idle.tick());
        assert_eq!(idle.ticks(), 5);
    }

    #[test]
    fn test_saturates() {
        let mut idle = IdleTimer::new(3);
        for _ in 0..100 {
            idle.tick();
        }
        assert_eq!(idle.ticks(), 3);
        assert!(idle.is_idle());
    }

    #[test]
    fn test_reset_wakes() {
        let mut idle = IdleTimer::new(2);
        idle.tick();
        idle.tick();
        assert!(idle.is_idle());
        idle.reset();
        assert!(!idle.is_idle());
        assert_eq!(idle.ticks(), 0);
    }

    #[test]
    fn test_zero_threshold_clamped() {
        let mut idle = IdleTimer::new(0);
        assert_eq!(idle.threshold(), 1);
        assert!(!idle.is_idle());
        assert!(idle.tick());
    }

    proptest! {
        #[test]
        fn prop_counts_up_by_one_until_threshold(threshold in 1u32..200, ticks in 0u32..400) {
            let mut idle = IdleTimer::new(threshold);
            let mut last = idle.ticks();
            for _ in 0..ticks {
                idle.tick();
                let now = idle.ticks();
                if last < threshold {
                    prop_assert_eq!(now, last + 1);
                } else {
                    prop_assert_eq!(now, threshold);
                }
                last = now;
            }
        }
    }
}
