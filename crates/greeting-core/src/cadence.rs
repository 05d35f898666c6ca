//! Fixed-interval staggering.
//!
//! [`Stagger`] turns ordinal positions into delays, used both for entrance
//! animations and for [`AutoReveal`], which uncovers a [`RevealSet`] one item
//! at a time in ordinal order.

use std::time::Duration;

use crate::RevealSet;

/// Interval between auto-revealed items.
pub const AUTO_REVEAL_STEP: Duration = Duration::from_millis(100);

/// Entrance delay between consecutive wish cards.
pub const WISH_ENTRANCE: Stagger = Stagger::new(Duration::from_millis(100));

/// Entrance delay between consecutive reason boxes.
pub const REASON_ENTRANCE: Stagger = Stagger::new(Duration::from_millis(50));

/// Entrance of the distance stat cards, after the map has settled.
pub const STAT_ENTRANCE: Stagger =
    Stagger::new(Duration::from_millis(150)).with_lead(Duration::from_millis(600));

/// Entrance of the finale blessings.
pub const BLESSING_ENTRANCE: Stagger =
    Stagger::new(Duration::from_millis(100)).with_lead(Duration::from_millis(600));

/// A constant step between ordinal positions, optionally after a lead-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
    lead: Duration,
}

impl Stagger {
    pub const fn new(step: Duration) -> Self {
        Self {
            step,
            lead: Duration::ZERO,
        }
    }

    /// Delays every position by an extra `lead`.
    pub const fn with_lead(self, lead: Duration) -> Self {
        Self { lead, ..self }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Delay before the item at `position` starts.
    pub fn offset(&self, position: usize) -> Duration {
        self.lead + self.step * position as u32
    }

    /// [`Stagger::offset`] in whole milliseconds, for CSS animation delays.
    pub fn delay_ms(&self, position: usize) -> u64 {
        self.offset(position).as_millis() as u64
    }

    /// Time from the first to the last of `count` items.
    pub fn span(&self, count: usize) -> Duration {
        self.step * count.saturating_sub(1) as u32
    }
}

/// Progress of a one-by-one reveal.
///
/// The first item is revealed as soon as the run starts; each later item is
/// revealed one [`Stagger::step`] after the previous one. Items the user has
/// already uncovered are skipped.
#[derive(Debug, Clone)]
pub struct AutoReveal {
    stagger: Stagger,
    running: bool,
    revealed_in_run: usize,
}

impl Default for AutoReveal {
    fn default() -> Self {
        Self::new(Stagger::new(AUTO_REVEAL_STEP))
    }
}

impl AutoReveal {
    pub fn new(stagger: Stagger) -> Self {
        Self {
            stagger,
            running: false,
            revealed_in_run: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Items revealed since the current (or last) run started.
    pub fn revealed_in_run(&self) -> usize {
        self.revealed_in_run
    }

    /// Starts a run, revealing the first hidden item immediately.
    ///
    /// Returns the delay until [`AutoReveal::step`] should be called, or
    /// `None` if nothing remains. Starting while already running, or on a
    /// complete set, does nothing.
    pub fn start(&mut self, set: &mut RevealSet) -> Option<Duration> {
        if self.running || set.is_complete() {
            return None;
        }
        self.running = true;
        self.revealed_in_run = 0;
        self.reveal_next(set)
    }

    /// Reveals the next hidden item of a running run.
    pub fn step(&mut self, set: &mut RevealSet) -> Option<Duration> {
        if !self.running {
            return None;
        }
        self.reveal_next(set)
    }

    /// Stops the run; already revealed items stay revealed.
    pub fn cancel(&mut self) {
        self.running = false;
    }

    fn reveal_next(&mut self, set: &mut RevealSet) -> Option<Duration> {
        if let Some(index) = set.next_hidden() {
            set.reveal(index);
            self.revealed_in_run += 1;
        }
        if set.next_hidden().is_some() {
            Some(self.stagger.step())
        } else {
            self.running = false;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RevealPolicy;

    #[test]
    fn test_stagger_offsets() {
        assert_eq!(WISH_ENTRANCE.offset(0), Duration::ZERO);
        assert_eq!(WISH_ENTRANCE.offset(5), Duration::from_millis(500));
        assert_eq!(REASON_ENTRANCE.offset(31), Duration::from_millis(1550));
        assert_eq!(
            Stagger::new(AUTO_REVEAL_STEP).span(32),
            Duration::from_millis(3100)
        );
        assert_eq!(Stagger::new(AUTO_REVEAL_STEP).span(0), Duration::ZERO);
    }

    #[test]
    fn test_lead_in_delays_in_whole_millis() {
        assert_eq!(STAT_ENTRANCE.delay_ms(0), 600);
        assert_eq!(STAT_ENTRANCE.delay_ms(2), 900);
        assert_eq!(BLESSING_ENTRANCE.delay_ms(3), 900);
        assert_eq!(STAT_ENTRANCE.span(3), Duration::from_millis(300));
        assert_eq!(WISH_ENTRANCE.delay_ms(4), 400);
    }

    #[test]
    fn test_run_reveals_in_order() {
        let mut set = RevealSet::new(4, RevealPolicy::OneWay);
        let mut run = AutoReveal::default();

        assert_eq!(run.start(&mut set), Some(AUTO_REVEAL_STEP));
        assert_eq!(set.revealed().collect::<Vec<_>>(), vec![0]);

        run.step(&mut set);
        run.step(&mut set);
        assert_eq!(set.revealed().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(run.is_running());

        assert_eq!(run.step(&mut set), None);
        assert!(set.is_complete());
        assert!(!run.is_running());
        assert_eq!(run.revealed_in_run(), 4);
    }

    #[test]
    fn test_run_skips_revealed_items() {
        let mut set = RevealSet::new(3, RevealPolicy::OneWay);
        set.reveal(0);
        set.reveal(1);
        let mut run = AutoReveal::default();

        assert_eq!(run.start(&mut set), None);
        assert!(set.is_complete());
        assert_eq!(run.revealed_in_run(), 1);
    }

    #[test]
    fn test_start_on_complete_set_is_noop() {
        let mut set = RevealSet::new(2, RevealPolicy::OneWay);
        set.reveal_all();
        let mut run = AutoReveal::default();
        assert_eq!(run.start(&mut set), None);
        assert!(!run.is_running());
        assert_eq!(run.revealed_in_run(), 0);
    }

    #[test]
    fn test_cancelled_run_stops_stepping() {
        let mut set = RevealSet::new(5, RevealPolicy::OneWay);
        let mut run = AutoReveal::default();
        run.start(&mut set);
        run.cancel();
        assert_eq!(run.step(&mut set), None);
        assert_eq!(set.revealed_count(), 1);
    }
}
