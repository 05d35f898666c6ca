//! Falling confetti overlay.

use dioxus::prelude::*;
use greeting_core::{Deck, Particle};

/// Renders the deck's current confetti burst, if any.
#[component]
pub fn ConfettiLayer(deck: Signal<Deck>) -> Element {
    let (burst, styles) = {
        let deck_read = deck.read();
        let styles: Vec<String> = deck_read.confetti().iter().map(Particle::style).collect();
        (deck_read.sequencer().celebrations(), styles)
    };

    if styles.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "confetti-layer",
            for (index, style) in styles.iter().enumerate() {
                div {
                    key: "{burst}-{index}",
                    class: "confetti-piece",
                    style: "{style}",
                }
            }
        }
    }
}
