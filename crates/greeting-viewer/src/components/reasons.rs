//! Reasons grid: numbered boxes that reveal one line each.

use dioxus::prelude::*;
use greeting_core::{Deck, DeckEvent, REASON_ENTRANCE};

/// Grid of reason boxes plus the reveal-all and one-by-one controls.
#[component]
pub fn ReasonsGrid(deck: Signal<Deck>) -> Element {
    let mut deck_write = deck;
    let (reasons, revealed, complete, running) = {
        let deck_read = deck.read();
        let reasons = deck_read.content().reasons.clone();
        let set = deck_read.reasons();
        let revealed: Vec<bool> = (0..reasons.items.len()).map(|i| set.is_revealed(i)).collect();
        (reasons, revealed, set.is_complete(), deck_read.auto_reveal_running())
    };
    let count = reasons.items.len();
    let toggle_label = if complete {
        reasons.hide_all_label.clone()
    } else {
        reasons.reveal_all_label.clone()
    };

    rsx! {
        div {
            class: "reasons slide-enter",

            div {
                class: "section-header fade-down",
                h2 { "{reasons.title}" }
                p { "{reasons.subtitle}" }
            }

            div {
                class: "reasons-controls",
                button {
                    class: "pill-btn",
                    onclick: move |_| deck_write.write().dispatch(DeckEvent::ToggleAllReasons),
                    "{toggle_label}"
                }
                button {
                    class: "pill-btn pill-btn-secondary",
                    disabled: complete || running,
                    onclick: move |_| deck_write.write().dispatch(DeckEvent::StartAutoReveal),
                    "{reasons.auto_reveal_label}"
                }
            }

            div {
                class: "reason-grid",
                for (index, text) in reasons.items.iter().enumerate() {
                    ReasonBox {
                        key: "{index}",
                        number: index + 1,
                        text: text.clone(),
                        revealed: revealed[index],
                        delay_ms: REASON_ENTRANCE.delay_ms(index),
                        on_click: move |_| deck_write.write().dispatch(DeckEvent::ToggleReason(index)),
                    }
                }
            }

            if complete {
                p { class: "reasons-complete pop-in", "{reasons.complete_message}" }
            }

            p { class: "reasons-footer", "{count} {reasons.footer}" }
        }
    }
}

#[component]
fn ReasonBox(
    number: usize,
    text: String,
    revealed: bool,
    delay_ms: u64,
    on_click: EventHandler<()>,
) -> Element {
    let label = if revealed {
        format!("Reason {number}: {text}")
    } else {
        format!("Reveal reason {number}")
    };

    rsx! {
        div {
            class: if revealed { "reason-box reason-box-revealed pop-in" } else { "reason-box pop-in" },
            style: "animation-delay: {delay_ms}ms",
            role: "button",
            tabindex: "0",
            "aria-label": "{label}",
            "aria-pressed": "{revealed}",
            onclick: move |_| on_click.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if matches!(e.key(), Key::Enter) || e.key() == Key::Character(" ".to_string()) {
                    on_click.call(());
                }
            },

            if revealed {
                p { class: "reason-text flip-in", "{revealed_text(number, &text)}" }
            } else {
                span { class: "reason-number", "{number}" }
            }
        }
    }
}

/// Text of a revealed box, keeping its ordinal.
pub fn revealed_text(number: usize, text: &str) -> String {
    format!("{number}. {text}")
}
