//! Wishes gallery: flippable cards with a delayed unlock message.

use dioxus::prelude::*;
use greeting_core::{Deck, DeckEvent, WishCard, WISH_ENTRANCE};

use crate::image::ImageWithFallback;

/// Grid of wish cards. Clicking a card flips it; once every card is face up
/// the unlock message appears after a short delay.
#[component]
pub fn WishesGallery(deck: Signal<Deck>) -> Element {
    let mut deck_write = deck;
    let (wishes, flipped, unlocked) = {
        let deck_read = deck.read();
        let wishes = deck_read.content().wishes.clone();
        let flipped: Vec<bool> = (0..wishes.cards.len())
            .map(|i| deck_read.wishes().is_revealed(i))
            .collect();
        (wishes, flipped, deck_read.wishes_unlocked())
    };

    rsx! {
        div {
            class: "wishes slide-enter",

            div {
                class: "section-header fade-down",
                h2 { "{wishes.title}" }
                p { "{wishes.subtitle}" }
            }

            div {
                class: "wish-grid",
                for (index, card) in wishes.cards.iter().enumerate() {
                    WishCardView {
                        key: "{index}",
                        card: card.clone(),
                        flipped: flipped[index],
                        delay_ms: WISH_ENTRANCE.delay_ms(index),
                        front_hint: wishes.front_hint.clone(),
                        on_click: move |_| deck_write.write().dispatch(DeckEvent::ToggleWish(index)),
                    }
                }
            }

            if unlocked {
                div {
                    class: "wishes-unlocked pop-in",
                    p { class: "wishes-unlocked-title", "{wishes.unlocked_title}" }
                    p { class: "wishes-unlocked-hint", "{wishes.unlocked_hint}" }
                }
            }
        }
    }
}

#[component]
fn WishCardView(
    card: WishCard,
    flipped: bool,
    delay_ms: u64,
    front_hint: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "wish-slot fade-up",
            style: "animation-delay: {delay_ms}ms",

            div {
                class: if flipped { "wish-card wish-card-flipped" } else { "wish-card" },
                onclick: move |_| on_click.call(()),

                if flipped {
                    div {
                        class: "wish-back flip-in",
                        div {
                            class: "wish-image",
                            ImageWithFallback {
                                image: card.image.clone(),
                                class: "wish-image-img".to_string(),
                            }
                        }
                        div {
                            class: "wish-text",
                            h3 { "{card.title}" }
                            p { "{card.message}" }
                        }
                    }
                } else {
                    div {
                        class: "wish-front flip-in",
                        style: "background: {card.accent}",
                        span { class: "wish-icon", "{card.icon}" }
                        h3 { "{card.title}" }
                        p { class: "wish-hint", "{front_hint}" }
                    }
                }
            }
        }
    }
}
