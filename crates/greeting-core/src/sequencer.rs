//! Linear slide navigation.
//!
//! The sequencer is a bounded counter over a fixed list of slides. Requests
//! that would leave the valid range are silently ignored rather than
//! reported, mirroring a forgiving UI control.

use serde::{Deserialize, Serialize};

use crate::SlideKind;

/// When entering the first slide arms the celebration effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationPolicy {
    /// Every entry into the first slide arms it again.
    EveryEntry,
    /// Arms at most once for the lifetime of the sequencer.
    #[default]
    OncePerSession,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    Unchanged,
}

impl Navigation {
    /// Returns whether the current slide changed.
    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }
}

/// Owns the ordered slide list and the current position within it.
#[derive(Debug, Clone)]
pub struct Sequencer {
    slides: Vec<SlideKind>,
    current: usize,
    policy: CelebrationPolicy,
    celebration_armed: bool,
    celebrations: u32,
}

impl Sequencer {
    /// Creates a sequencer positioned at `start`, or at the first slide if
    /// `start` is out of range.
    ///
    /// An empty slide list falls back to [`SlideKind::DEFAULT_ORDER`].
    pub fn new(slides: Vec<SlideKind>, policy: CelebrationPolicy, start: usize) -> Self {
        let slides = if slides.is_empty() {
            tracing::warn!("Empty slide list, using default order");
            SlideKind::DEFAULT_ORDER.to_vec()
        } else {
            slides
        };
        let current = if start < slides.len() { start } else { 0 };

        let mut sequencer = Self {
            slides,
            current,
            policy,
            celebration_armed: false,
            celebrations: 0,
        };
        if sequencer.is_first() {
            sequencer.arm_celebration();
        }
        sequencer
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; a sequencer holds at least one slide.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the current slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The current slide.
    pub fn current_slide(&self) -> SlideKind {
        self.slides[self.current]
    }

    /// The slide at `index`, if valid.
    pub fn slide(&self, index: usize) -> Option<SlideKind> {
        self.slides.get(index).copied()
    }

    /// All slides in order.
    pub fn slides(&self) -> &[SlideKind] {
        &self.slides
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.slides.len()
    }

    pub fn policy(&self) -> CelebrationPolicy {
        self.policy
    }

    /// Moves one slide forward unless already on the last slide.
    pub fn advance(&mut self) -> Navigation {
        if self.is_last() {
            return Navigation::Unchanged;
        }
        self.move_to(self.current + 1)
    }

    /// Moves one slide back unless already on the first slide.
    pub fn retreat(&mut self) -> Navigation {
        if self.is_first() {
            return Navigation::Unchanged;
        }
        self.move_to(self.current - 1)
    }

    /// Jumps to `index` if it names a slide.
    pub fn jump_to(&mut self, index: usize) -> Navigation {
        if index >= self.slides.len() {
            return Navigation::Unchanged;
        }
        self.move_to(index)
    }

    fn move_to(&mut self, to: usize) -> Navigation {
        if to == self.current {
            return Navigation::Unchanged;
        }
        let from = self.current;
        self.current = to;
        tracing::debug!(from, to, slide = %self.current_slide(), "Slide changed");

        if self.is_first() {
            self.arm_celebration();
        }
        Navigation::Moved { from, to }
    }

    fn arm_celebration(&mut self) {
        match self.policy {
            CelebrationPolicy::EveryEntry => {}
            CelebrationPolicy::OncePerSession if self.celebrations == 0 => {}
            CelebrationPolicy::OncePerSession => return,
        }
        self.celebration_armed = true;
        self.celebrations += 1;
    }

    /// Returns whether a celebration is armed and not yet consumed.
    pub fn celebration_armed(&self) -> bool {
        self.celebration_armed
    }

    /// Consumes the armed celebration, returning whether one was pending.
    pub fn take_celebration(&mut self) -> bool {
        std::mem::take(&mut self.celebration_armed)
    }

    /// How many times the celebration has been armed.
    pub fn celebrations(&self) -> u32 {
        self.celebrations
    }

    /// Dot indicator states as `(index, is_current)` pairs.
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.slides.len()).map(move |i| (i, i == self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Sequencer {
        Sequencer::new(
            SlideKind::DEFAULT_ORDER.to_vec(),
            CelebrationPolicy::EveryEntry,
            0,
        )
    }

    #[test]
    fn test_advance_clamps_at_last() {
        let mut seq = five();
        for _ in 0..4 {
            assert!(seq.advance().moved());
        }
        assert_eq!(seq.current(), 4);
        assert_eq!(seq.advance(), Navigation::Unchanged);
        assert_eq!(seq.current(), 4);
        assert!(seq.is_last());
    }

    #[test]
    fn test_retreat_clamps_at_first() {
        let mut seq = five();
        assert_eq!(seq.retreat(), Navigation::Unchanged);
        assert_eq!(seq.current(), 0);
    }

    #[test]
    fn test_advance_then_retreat_restores() {
        for start in 0..4 {
            let mut seq = Sequencer::new(
                SlideKind::DEFAULT_ORDER.to_vec(),
                CelebrationPolicy::OncePerSession,
                start,
            );
            seq.advance();
            seq.retreat();
            assert_eq!(seq.current(), start);
        }

        // At the last slide advance is a no-op, so retreat lands one earlier.
        let mut seq = five();
        seq.jump_to(4);
        seq.advance();
        seq.retreat();
        assert_eq!(seq.current(), 3);
    }

    #[test]
    fn test_jump_out_of_range_ignored() {
        let mut seq = five();
        seq.jump_to(2);
        for bad in [5, 6, 100, usize::MAX] {
            assert_eq!(seq.jump_to(bad), Navigation::Unchanged);
            assert_eq!(seq.current(), 2);
        }
    }

    #[test]
    fn test_jump_to_current_is_unchanged() {
        let mut seq = five();
        seq.jump_to(3);
        assert_eq!(seq.jump_to(3), Navigation::Unchanged);
        assert_eq!(
            seq.jump_to(1),
            Navigation::Moved { from: 3, to: 1 }
        );
    }

    #[test]
    fn test_invalid_start_falls_back_to_first() {
        let seq = Sequencer::new(
            SlideKind::DEFAULT_ORDER.to_vec(),
            CelebrationPolicy::EveryEntry,
            9,
        );
        assert_eq!(seq.current(), 0);
        assert!(seq.celebration_armed());
    }

    #[test]
    fn test_empty_slides_use_default_order() {
        let seq = Sequencer::new(Vec::new(), CelebrationPolicy::EveryEntry, 0);
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.current_slide(), SlideKind::Landing);
    }

    #[test]
    fn test_celebration_every_entry() {
        let mut seq = five();
        assert!(seq.take_celebration());
        assert!(!seq.take_celebration());

        seq.advance();
        assert!(!seq.celebration_armed());
        seq.retreat();
        assert!(seq.take_celebration());
        assert_eq!(seq.celebrations(), 2);
    }

    #[test]
    fn test_celebration_once_per_session() {
        let mut seq = Sequencer::new(
            SlideKind::DEFAULT_ORDER.to_vec(),
            CelebrationPolicy::OncePerSession,
            0,
        );
        assert!(seq.take_celebration());

        seq.jump_to(3);
        seq.jump_to(0);
        assert!(!seq.take_celebration());
        assert_eq!(seq.celebrations(), 1);
    }

    #[test]
    fn test_late_start_celebrates_on_first_visit() {
        let mut seq = Sequencer::new(
            SlideKind::DEFAULT_ORDER.to_vec(),
            CelebrationPolicy::OncePerSession,
            2,
        );
        assert!(!seq.celebration_armed());
        seq.jump_to(0);
        assert!(seq.take_celebration());
    }

    #[test]
    fn test_dots_mark_current() {
        let mut seq = five();
        seq.advance();
        let dots: Vec<_> = seq.dots().collect();
        assert_eq!(dots.len(), 5);
        assert_eq!(dots.iter().filter(|(_, current)| *current).count(), 1);
        assert_eq!(dots[1], (1, true));
    }
}
