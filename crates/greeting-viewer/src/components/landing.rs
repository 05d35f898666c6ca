//! Landing slide and its delayed special-image overlay.

use dioxus::prelude::*;
use greeting_core::{Deck, DeckEvent, ImageRef};

use crate::image::ImageWithFallback;

/// Opening slide with the greeting and the call to action.
#[component]
pub fn LandingSlide(deck: Signal<Deck>) -> Element {
    let mut deck_write = deck;
    let (landing, overlay_visible) = {
        let deck_read = deck.read();
        (deck_read.content().landing.clone(), deck_read.overlay_visible())
    };

    rsx! {
        div {
            class: "landing slide-enter",

            div {
                class: "landing-background",
                ImageWithFallback {
                    image: landing.background.clone(),
                    class: "landing-background-img".to_string(),
                }
            }

            div {
                class: "landing-body",

                // Floating icons
                span { class: "floating-icon float-cake", "🎂" }
                span { class: "floating-icon float-sparkles", "✨" }
                span { class: "floating-icon float-gift", "🎁" }

                div { class: "landing-emoji pop-in", "{landing.emoji}" }

                h1 {
                    class: "landing-title fade-up",
                    style: "animation-delay: 0.5s",
                    "{landing.title}"
                }

                div {
                    class: "landing-lines fade-up",
                    style: "animation-delay: 0.8s",
                    for line in landing.lines.iter() {
                        p { "{line}" }
                    }
                }

                div {
                    class: "fade-up",
                    style: "animation-delay: 1.1s",

                    if !landing.highlight.is_empty() {
                        div {
                            class: "landing-highlight",
                            for line in landing.highlight.iter() {
                                p { "{line}" }
                            }
                        }
                    }

                    div {
                        class: "landing-cta",
                        button {
                            class: "cta-btn",
                            onclick: move |_| deck_write.write().dispatch(DeckEvent::Next),
                            "{landing.call_to_action}"
                        }
                    }
                }

                p {
                    class: "landing-footnote fade-in",
                    style: "animation-delay: 1.5s",
                    "{landing.footnote}"
                }
            }

            if overlay_visible {
                SpecialImageOverlay {
                    deck,
                    image: landing.special_image.clone(),
                    close_label: landing.close_label.clone(),
                }
            }
        }
    }
}

/// Full-screen overlay dismissed by clicking the backdrop or the close button.
#[component]
fn SpecialImageOverlay(deck: Signal<Deck>, image: ImageRef, close_label: String) -> Element {
    let mut deck_write = deck;

    rsx! {
        div {
            class: "special-overlay",
            onclick: move |_| deck_write.write().dispatch(DeckEvent::DismissOverlay),

            div {
                class: "special-dialog",
                onclick: move |e| e.stop_propagation(),

                ImageWithFallback {
                    image: image.clone(),
                    class: "special-image".to_string(),
                }

                button {
                    class: "special-close",
                    onclick: move |e| {
                        e.stop_propagation();
                        deck_write.write().dispatch(DeckEvent::DismissOverlay);
                    },
                    "{close_label}"
                }
            }
        }
    }
}
