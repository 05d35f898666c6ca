//! Distance slide: two pins joined by an animated path.

use dioxus::prelude::*;
use greeting_core::{Deck, Place, STAT_ENTRANCE};

#[component]
pub fn DistanceMap(deck: Signal<Deck>) -> Element {
    let distance = deck.read().content().distance.clone();

    rsx! {
        div {
            class: "distance slide-enter",

            div {
                class: "section-header fade-down",
                h2 { "{distance.title}" }
                p { "{distance.subtitle}" }
            }

            div {
                class: "distance-map fade-up",
                style: "animation-delay: 0.2s",

                svg {
                    class: "distance-line",
                    view_box: "0 0 400 120",
                    preserve_aspect_ratio: "none",
                    path {
                        class: "distance-path",
                        d: "M 40 80 Q 200 -10 360 80",
                        fill: "none",
                        stroke_width: "3",
                        stroke_dasharray: "8 6",
                        stroke_linecap: "round",
                    }
                }

                PlacePin { place: distance.from.clone(), side: "from" }
                span { class: "distance-heart pulse", "💖" }
                PlacePin { place: distance.to.clone(), side: "to" }
            }

            div {
                class: "distance-stats",
                for (index, stat) in distance.stats.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "stat-card tone-{stat.tone} pop-in",
                        style: "animation-delay: {STAT_ENTRANCE.delay_ms(index)}ms",
                        span { class: "stat-icon", "{stat.icon}" }
                        p { class: "stat-label", "{stat.label}" }
                        p { class: "stat-value", "{stat.value}" }
                    }
                }
            }

            div {
                class: "distance-message fade-up",
                style: "animation-delay: 1.2s",
                for paragraph in distance.message.iter() {
                    p { "{paragraph}" }
                }
            }
        }
    }
}

#[component]
fn PlacePin(place: Place, side: &'static str) -> Element {
    rsx! {
        div {
            class: "place-pin place-{side}",
            span { class: "pin-marker", "📍" }
            p { class: "place-name", "{place.name}" }
            p { class: "place-caption", "{place.caption}" }
        }
    }
}
