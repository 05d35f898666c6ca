//! # Greeting Core
//!
//! State and logic behind the greeting deck, kept free of any UI toolkit so
//! it can be driven and tested without a display surface.
//!
//! ## Key Types
//!
//! - [`Sequencer`]: Current slide index with clamped navigation
//! - [`RevealSet`]: Per-slide record of which items have been uncovered
//! - [`AutoReveal`]: Staggered one-by-one reveal of a [`RevealSet`]
//! - [`Timers`]: Owned, cancellable scheduled tasks
//! - [`Deck`]: The presentation aggregate that ties everything together
//! - [`DeckContent`]: Copy, colors and image references for every slide

pub mod cadence;
pub mod confetti;
pub mod content;
pub mod deck;
pub mod error;
pub mod reveal;
pub mod sequencer;
pub mod slide;
pub mod timer;

pub use cadence::*;
pub use confetti::{Particle, DEFAULT_PALETTE, DEFAULT_PARTICLES};
pub use content::*;
pub use deck::*;
pub use error::*;
pub use reveal::*;
pub use sequencer::*;
pub use slide::*;
pub use timer::*;
