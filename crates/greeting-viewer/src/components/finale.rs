//! Closing slide.

use dioxus::prelude::*;
use greeting_core::{Deck, BLESSING_ENTRANCE};

use crate::image::ImageWithFallback;

#[component]
pub fn FinalMessage(deck: Signal<Deck>) -> Element {
    let finale = deck.read().content().finale.clone();

    rsx! {
        div {
            class: "finale slide-enter",

            h2 { class: "finale-title pop-in", "{finale.title}" }

            div {
                class: "finale-card fade-up",
                style: "animation-delay: 0.3s",

                div {
                    class: "finale-image",
                    ImageWithFallback {
                        image: finale.image.clone(),
                        class: "finale-image-img".to_string(),
                    }
                }

                div {
                    class: "finale-verses",
                    for (index, verse) in finale.verses.iter().enumerate() {
                        p { key: "{index}", class: "finale-verse", "{verse}" }
                    }
                }

                p { class: "finale-blessings-intro", "{finale.blessings_intro}" }
                div {
                    class: "finale-blessings",
                    for (index, blessing) in finale.blessings.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "blessing tone-{blessing.tone} fade-up",
                            style: "animation-delay: {BLESSING_ENTRANCE.delay_ms(index)}ms",
                            span { class: "blessing-icon", "{blessing.icon}" }
                            span { "{blessing.text}" }
                        }
                    }
                }

                p { class: "finale-thanks", "{finale.thanks}" }
                p { class: "finale-closing", "{finale.closing}" }
                p { class: "finale-signature", "{finale.signature}" }
            }

            div {
                class: "finale-parting fade-in",
                style: "animation-delay: 1.2s",
                for line in finale.parting.iter() {
                    p { "{line}" }
                }
            }
        }
    }
}
