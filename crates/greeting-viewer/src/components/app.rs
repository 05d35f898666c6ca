//! Root application component for the greeting viewer.

use dioxus::prelude::*;
use greeting_core::{Deck, DeckEvent, SlideKind};

use crate::theme::ThemedRoot;

use super::{ConfettiLayer, DistanceMap, FinalMessage, LandingSlide, ReasonsGrid, WishesGallery};

/// Root application component.
#[component]
pub fn App(deck: Signal<Deck>) -> Element {
    let slide = deck.read().current_slide();

    let body = match slide {
        SlideKind::Landing => rsx! { LandingSlide { deck } },
        SlideKind::Wishes => rsx! { WishesGallery { deck } },
        SlideKind::Distance => rsx! { DistanceMap { deck } },
        SlideKind::Reasons => rsx! { ReasonsGrid { deck } },
        SlideKind::Finale => rsx! { FinalMessage { deck } },
    };

    rsx! {
        ThemedRoot {
            div {
                class: "deck",

                ConfettiLayer { deck }

                div {
                    class: "slide-frame slide-{slide.name()}",
                    {body}
                }

                NavigationBar { deck }
            }
        }
    }
}

/// Previous/next arrows with one dot per slide.
#[component]
fn NavigationBar(deck: Signal<Deck>) -> Element {
    let mut deck_write = deck;
    let (is_first, is_last, dots) = {
        let deck_read = deck.read();
        let sequencer = deck_read.sequencer();
        let dots: Vec<(usize, bool)> = sequencer.dots().collect();
        (sequencer.is_first(), sequencer.is_last(), dots)
    };

    rsx! {
        nav {
            class: "deck-nav",

            button {
                class: "nav-btn",
                disabled: is_first,
                onclick: move |_| deck_write.write().dispatch(DeckEvent::Previous),
                "‹"
            }

            div {
                class: "nav-dots",
                for (index, current) in dots {
                    button {
                        key: "{index}",
                        class: if current { "nav-dot nav-dot-current" } else { "nav-dot" },
                        onclick: move |_| deck_write.write().dispatch(DeckEvent::JumpTo(index)),
                    }
                }
            }

            button {
                class: "nav-btn",
                disabled: is_last,
                onclick: move |_| deck_write.write().dispatch(DeckEvent::Next),
                "›"
            }
        }
    }
}
