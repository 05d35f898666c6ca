//! The presentation aggregate.
//!
//! [`Deck`] owns the sequencer, per-slide reveal state, the landing overlay,
//! confetti and every timer. It is the single mutation path: input arrives
//! as [`DeckEvent`]s through [`Deck::dispatch`], timer notifications through
//! [`Deck::on_timer`].
//!
//! Slide-local state lives only while its slide is current. Leaving a slide
//! cancels its timers and resets its reveal set, so re-entering it starts
//! fresh.

use std::time::Duration;

use rand::rngs::StdRng;

use crate::confetti::{self, Particle, DEFAULT_PARTICLES};
use crate::{
    AutoReveal, CelebrationPolicy, DeckContent, Navigation, RevealSet, Sequencer, SlideKind,
    TimerEvents, TimerFired, TimerKind, Timers,
};

/// Delay before the landing overlay appears.
pub const DEFAULT_OVERLAY_DELAY: Duration = Duration::from_secs(10);

/// Delay between the last wish card flipping and the gallery unlocking.
pub const WISHES_COMPLETION_DELAY: Duration = Duration::from_millis(500);

/// Startup settings.
#[derive(Debug, Clone)]
pub struct DeckConfig {
    pub content: DeckContent,
    /// Initial slide index; out-of-range values start on the first slide.
    pub start: usize,
    pub celebration: CelebrationPolicy,
    pub overlay_delay: Duration,
    pub confetti_count: usize,
    /// Seed for reproducible confetti.
    pub seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            content: DeckContent::default(),
            start: 0,
            celebration: CelebrationPolicy::default(),
            overlay_delay: DEFAULT_OVERLAY_DELAY,
            confetti_count: DEFAULT_PARTICLES,
            seed: None,
        }
    }
}

/// User input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    Next,
    Previous,
    JumpTo(usize),
    ToggleWish(usize),
    ToggleReason(usize),
    /// "Reveal All" / "Hide All" on the reasons slide.
    ToggleAllReasons,
    StartAutoReveal,
    DismissOverlay,
}

/// Presentation state plus the timers that drive it.
#[derive(Debug)]
pub struct Deck {
    content: DeckContent,
    sequencer: Sequencer,
    wishes: RevealSet,
    wishes_unlocked: bool,
    reasons: RevealSet,
    auto_reveal: AutoReveal,
    overlay_visible: bool,
    overlay_delay: Duration,
    confetti: Vec<Particle>,
    confetti_count: usize,
    rng: StdRng,
    timers: Timers,
    started: bool,
}

impl Deck {
    /// Creates a deck and the receiver for its timer notifications.
    ///
    /// Nothing is scheduled until [`Deck::start`].
    pub fn new(config: DeckConfig) -> (Self, TimerEvents) {
        let DeckConfig {
            content,
            start,
            celebration,
            overlay_delay,
            confetti_count,
            seed,
        } = config;

        let sequencer = Sequencer::new(content.slides.clone(), celebration, start);
        let wishes = RevealSet::new(content.wishes.cards.len(), content.wishes.policy);
        let reasons = RevealSet::new(content.reasons.items.len(), content.reasons.policy);
        let (timers, events) = Timers::new();

        let deck = Self {
            content,
            sequencer,
            wishes,
            wishes_unlocked: false,
            reasons,
            auto_reveal: AutoReveal::default(),
            overlay_visible: false,
            overlay_delay,
            confetti: Vec::new(),
            confetti_count,
            rng: confetti::source(seed),
            timers,
            started: false,
        };
        (deck, events)
    }

    /// Mounts the initial slide. Later calls do nothing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        tracing::info!(
            slides = self.sequencer.len(),
            start = %self.current_slide(),
            "Starting deck"
        );
        self.enter_current();
    }

    /// Applies one input event.
    pub fn dispatch(&mut self, event: DeckEvent) {
        tracing::debug!(?event, slide = %self.current_slide(), "Dispatch");
        match event {
            DeckEvent::Next => {
                let nav = self.sequencer.advance();
                self.apply_navigation(nav);
            }
            DeckEvent::Previous => {
                let nav = self.sequencer.retreat();
                self.apply_navigation(nav);
            }
            DeckEvent::JumpTo(index) => {
                let nav = self.sequencer.jump_to(index);
                self.apply_navigation(nav);
            }
            DeckEvent::ToggleWish(index) if self.on(SlideKind::Wishes) => {
                self.toggle_wish(index);
            }
            DeckEvent::ToggleReason(index) if self.on(SlideKind::Reasons) => {
                self.reasons.toggle(index);
                if self.reasons.is_complete() {
                    self.stop_auto_reveal();
                }
            }
            DeckEvent::ToggleAllReasons if self.on(SlideKind::Reasons) => {
                self.stop_auto_reveal();
                let complete = self.reasons.toggle_all();
                tracing::debug!(complete, "Reasons toggled in bulk");
            }
            DeckEvent::StartAutoReveal if self.on(SlideKind::Reasons) => {
                if let Some(delay) = self.auto_reveal.start(&mut self.reasons) {
                    self.timers.schedule(TimerKind::AutoRevealStep, delay);
                }
            }
            DeckEvent::DismissOverlay => {
                self.overlay_visible = false;
            }
            DeckEvent::ToggleWish(_)
            | DeckEvent::ToggleReason(_)
            | DeckEvent::ToggleAllReasons
            | DeckEvent::StartAutoReveal => {
                tracing::trace!(?event, "Ignoring event for unmounted slide");
            }
        }
    }

    /// Applies a timer notification. Stale notifications are ignored.
    pub fn on_timer(&mut self, fired: TimerFired) {
        if !self.timers.accept(fired) {
            return;
        }
        match fired.kind {
            TimerKind::SpecialImage => {
                if self.on(SlideKind::Landing) {
                    tracing::debug!("Showing special image overlay");
                    self.overlay_visible = true;
                }
            }
            TimerKind::WishesCompletion => {
                if self.wishes.is_complete() {
                    tracing::info!("All wishes unlocked");
                    self.wishes_unlocked = true;
                }
            }
            TimerKind::AutoRevealStep => {
                if let Some(delay) = self.auto_reveal.step(&mut self.reasons) {
                    self.timers.schedule(TimerKind::AutoRevealStep, delay);
                }
            }
            TimerKind::ConfettiExpiry => {
                self.confetti.clear();
            }
        }
    }

    /// Cancels every pending timer.
    pub fn shutdown(&mut self) {
        tracing::debug!(pending = self.timers.pending_count(), "Shutting down deck");
        self.timers.cancel_all();
        self.auto_reveal.cancel();
    }

    fn on(&self, slide: SlideKind) -> bool {
        self.current_slide() == slide
    }

    fn apply_navigation(&mut self, nav: Navigation) {
        if let Navigation::Moved { from, .. } = nav {
            if let Some(previous) = self.sequencer.slide(from) {
                self.leave(previous);
            }
            self.enter_current();
        }
    }

    fn leave(&mut self, slide: SlideKind) {
        match slide {
            SlideKind::Landing => {
                self.timers.cancel(TimerKind::SpecialImage);
                self.overlay_visible = false;
            }
            SlideKind::Wishes => {
                self.timers.cancel(TimerKind::WishesCompletion);
                self.wishes.hide_all();
                self.wishes_unlocked = false;
            }
            SlideKind::Reasons => {
                self.stop_auto_reveal();
                self.reasons.hide_all();
            }
            SlideKind::Distance | SlideKind::Finale => {}
        }
    }

    fn enter_current(&mut self) {
        if self.on(SlideKind::Landing) {
            self.timers
                .schedule(TimerKind::SpecialImage, self.overlay_delay);
        }
        if self.sequencer.take_celebration() {
            self.celebrate();
        }
    }

    fn celebrate(&mut self) {
        self.confetti = confetti::generate(self.confetti_count, &self.content.palette, &mut self.rng);
        self.timers
            .schedule(TimerKind::ConfettiExpiry, confetti::burst_lifetime());
        tracing::info!(particles = self.confetti.len(), "Celebration");
    }

    fn toggle_wish(&mut self, index: usize) {
        if !self.wishes.toggle(index) {
            return;
        }
        if self.wishes.is_complete() {
            self.timers
                .schedule(TimerKind::WishesCompletion, WISHES_COMPLETION_DELAY);
        } else {
            self.timers.cancel(TimerKind::WishesCompletion);
        }
    }

    fn stop_auto_reveal(&mut self) {
        self.auto_reveal.cancel();
        self.timers.cancel(TimerKind::AutoRevealStep);
    }

    pub fn content(&self) -> &DeckContent {
        &self.content
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn current_slide(&self) -> SlideKind {
        self.sequencer.current_slide()
    }

    pub fn wishes(&self) -> &RevealSet {
        &self.wishes
    }

    /// Whether the "all wishes unlocked" message is showing.
    pub fn wishes_unlocked(&self) -> bool {
        self.wishes_unlocked
    }

    pub fn reasons(&self) -> &RevealSet {
        &self.reasons
    }

    pub fn auto_reveal_running(&self) -> bool {
        self.auto_reveal.is_running()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn confetti(&self) -> &[Particle] {
        &self.confetti
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        let config = DeckConfig {
            seed: Some(11),
            ..DeckConfig::default()
        };
        Deck::new(config).0
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_celebrates_and_schedules_overlay() {
        let mut deck = deck();
        assert!(deck.confetti().is_empty());

        deck.start();
        assert_eq!(deck.confetti().len(), DEFAULT_PARTICLES);
        assert!(deck.timers().is_pending(TimerKind::SpecialImage));
        assert!(deck.timers().is_pending(TimerKind::ConfettiExpiry));

        deck.start();
        assert_eq!(deck.timers().pending_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_landing_cancels_overlay() {
        let mut deck = deck();
        deck.start();
        deck.dispatch(DeckEvent::Next);
        assert!(!deck.timers().is_pending(TimerKind::SpecialImage));
        assert!(deck.timers().is_pending(TimerKind::ConfettiExpiry));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reveal_events_ignored_off_slide() {
        let mut deck = deck();
        deck.start();
        deck.dispatch(DeckEvent::ToggleWish(0));
        deck.dispatch(DeckEvent::ToggleAllReasons);
        assert_eq!(deck.wishes().revealed_count(), 0);
        assert_eq!(deck.reasons().revealed_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unflipping_cancels_completion() {
        let mut deck = deck();
        deck.start();
        deck.dispatch(DeckEvent::JumpTo(1));

        for i in 0..6 {
            deck.dispatch(DeckEvent::ToggleWish(i));
        }
        assert!(deck.timers().is_pending(TimerKind::WishesCompletion));

        deck.dispatch(DeckEvent::ToggleWish(2));
        assert!(!deck.wishes().is_revealed(2));
        assert!(!deck.timers().is_pending(TimerKind::WishesCompletion));
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_reasons_resets_state() {
        let mut deck = deck();
        deck.start();
        deck.dispatch(DeckEvent::JumpTo(3));
        deck.dispatch(DeckEvent::StartAutoReveal);
        assert!(deck.auto_reveal_running());

        deck.dispatch(DeckEvent::Previous);
        assert!(!deck.auto_reveal_running());
        assert!(!deck.timers().is_pending(TimerKind::AutoRevealStep));

        deck.dispatch(DeckEvent::Next);
        assert_eq!(deck.reasons().revealed_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_all_stops_auto_reveal() {
        let mut deck = deck();
        deck.start();
        deck.dispatch(DeckEvent::JumpTo(3));
        deck.dispatch(DeckEvent::StartAutoReveal);
        deck.dispatch(DeckEvent::ToggleAllReasons);

        assert!(deck.reasons().is_complete());
        assert!(!deck.auto_reveal_running());
        assert!(!deck.timers().is_pending(TimerKind::AutoRevealStep));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_everything() {
        let mut deck = deck();
        deck.start();
        deck.shutdown();
        assert_eq!(deck.timers().pending_count(), 0);
    }
}
