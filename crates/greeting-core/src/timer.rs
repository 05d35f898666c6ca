//! Owned, cancellable timers.
//!
//! Each timer is a tokio task that sleeps and then reports a [`TimerFired`]
//! over a channel. Timers never touch presentation state themselves; the
//! owner drains [`TimerEvents`] and hands every notification back to
//! [`Timers::accept`], which drops notifications from timers that were
//! cancelled or replaced after they fired.
//!
//! Dropping [`Timers`] aborts every pending task.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Purpose of a scheduled timer. At most one timer per kind is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Shows the special-image overlay on the landing slide.
    SpecialImage,
    /// Unlocks the wishes gallery after every card is flipped.
    WishesCompletion,
    /// Reveals the next reason during an auto-reveal run.
    AutoRevealStep,
    /// Clears confetti once the burst has finished falling.
    ConfettiExpiry,
}

/// Notification that a timer elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub kind: TimerKind,
    pub generation: u64,
}

#[derive(Debug)]
struct Pending {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Set of pending timers, keyed by [`TimerKind`].
#[derive(Debug)]
pub struct Timers {
    tx: mpsc::UnboundedSender<TimerFired>,
    pending: HashMap<TimerKind, Pending>,
    next_generation: u64,
}

/// Receiving side for timer notifications.
#[derive(Debug)]
pub struct TimerEvents {
    rx: mpsc::UnboundedReceiver<TimerFired>,
}

impl TimerEvents {
    /// Waits for the next notification. Returns `None` once the owning
    /// [`Timers`] has been dropped.
    pub async fn recv(&mut self) -> Option<TimerFired> {
        self.rx.recv().await
    }

    /// Returns a notification if one is already queued.
    pub fn try_recv(&mut self) -> Option<TimerFired> {
        self.rx.try_recv().ok()
    }
}

impl Timers {
    /// Creates an empty timer set and its notification receiver.
    pub fn new() -> (Self, TimerEvents) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timers = Self {
            tx,
            pending: HashMap::new(),
            next_generation: 0,
        };
        (timers, TimerEvents { rx })
    }

    /// Schedules `kind` to fire after `delay`, replacing any pending timer
    /// of the same kind.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration) {
        let generation = self.next_generation;
        self.next_generation += 1;

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone only when the whole deck is shutting down.
            let _ = tx.send(TimerFired { kind, generation });
        });

        tracing::trace!(?kind, generation, ?delay, "Timer scheduled");
        if let Some(previous) = self.pending.insert(kind, Pending { generation, handle }) {
            previous.handle.abort();
        }
    }

    /// Cancels the pending timer of `kind`. Returns whether one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        match self.pending.remove(&kind) {
            Some(pending) => {
                pending.handle.abort();
                tracing::trace!(?kind, generation = pending.generation, "Timer cancelled");
                true
            }
            None => false,
        }
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) {
        for (_, pending) in self.pending.drain() {
            pending.handle.abort();
        }
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Checks a notification against the pending set.
    ///
    /// Returns true and clears the entry if `fired` belongs to the timer
    /// currently pending for its kind; returns false for stale notifications.
    pub fn accept(&mut self, fired: TimerFired) -> bool {
        match self.pending.get(&fired.kind) {
            Some(pending) if pending.generation == fired.generation => {
                self.pending.remove(&fired.kind);
                true
            }
            _ => {
                tracing::trace!(?fired, "Discarding stale timer");
                false
            }
        }
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
