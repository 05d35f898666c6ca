//! Content table for the deck.
//!
//! Every piece of copy, color and image reference lives here so one generic
//! renderer per slide can serve any greeting. The [`Default`] table is the
//! 32nd-birthday greeting the deck was first built for; other greetings are
//! loaded from JSON, where every field is optional and falls back to the
//! default.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::confetti::DEFAULT_PALETTE;
use crate::{ContentError, ContentResult, RevealPolicy, SlideKind};

/// Source name of the special image shipped inside the viewer binary.
pub const BUNDLED_SPECIAL_IMAGE: &str = "assets/special.svg";

/// Reference to an image plus its alt text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// URL, `data:` URL, bundled asset name, or local file path.
    pub source: String,
    #[serde(default)]
    pub alt: String,
}

impl ImageRef {
    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
        }
    }
}

/// The whole deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckContent {
    pub slides: Vec<SlideKind>,
    /// Confetti colors.
    pub palette: Vec<String>,
    pub landing: LandingContent,
    pub wishes: WishesContent,
    pub distance: DistanceContent,
    pub reasons: ReasonsContent,
    pub finale: FinaleContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingContent {
    pub emoji: String,
    pub title: String,
    pub lines: Vec<String>,
    /// Two-line callout under the intro text.
    pub highlight: Vec<String>,
    pub call_to_action: String,
    pub footnote: String,
    pub background: ImageRef,
    /// Shown in the delayed overlay.
    pub special_image: ImageRef,
    pub close_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WishesContent {
    pub title: String,
    pub subtitle: String,
    pub cards: Vec<WishCard>,
    pub policy: RevealPolicy,
    pub unlocked_title: String,
    pub unlocked_hint: String,
    pub front_hint: String,
}

/// A flippable wish card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishCard {
    pub icon: String,
    pub title: String,
    pub message: String,
    /// CSS background for the card front.
    pub accent: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceContent {
    pub title: String,
    pub subtitle: String,
    pub from: Place,
    pub to: Place,
    pub stats: Vec<Stat>,
    pub message: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub caption: String,
}

/// A labelled figure under the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: String,
    pub label: String,
    pub value: String,
    /// Color family used for the card, e.g. `pink`.
    #[serde(default)]
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonsContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<String>,
    pub policy: RevealPolicy,
    pub reveal_all_label: String,
    pub hide_all_label: String,
    pub auto_reveal_label: String,
    pub complete_message: String,
    /// Appended to the item count in the footer.
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinaleContent {
    pub title: String,
    pub image: ImageRef,
    pub verses: Vec<String>,
    pub blessings_intro: String,
    pub blessings: Vec<Blessing>,
    pub thanks: String,
    pub closing: String,
    pub signature: String,
    pub parting: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blessing {
    pub icon: String,
    pub text: String,
    #[serde(default)]
    pub tone: String,
}

impl DeckContent {
    /// Parses and validates a JSON content table.
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Reads, parses and validates a JSON content table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            slides = content.slides.len(),
            wishes = content.wishes.cards.len(),
            reasons = content.reasons.items.len(),
            "Loaded deck content"
        );
        Ok(content)
    }

    /// Checks the structural rules every renderer relies on.
    pub fn validate(&self) -> ContentResult<()> {
        if self.slides.is_empty() {
            return Err(ContentError::Invalid("deck has no slides".into()));
        }
        let mut seen = HashSet::new();
        for slide in &self.slides {
            if !seen.insert(slide) {
                return Err(ContentError::Invalid(format!(
                    "slide `{slide}` appears more than once"
                )));
            }
        }
        if self.palette.is_empty() {
            return Err(ContentError::Invalid("confetti palette is empty".into()));
        }
        if self.wishes.cards.is_empty() {
            return Err(ContentError::Invalid("wishes slide has no cards".into()));
        }
        if let Some(index) = self
            .wishes
            .cards
            .iter()
            .position(|card| card.title.trim().is_empty())
        {
            return Err(ContentError::Invalid(format!(
                "wish card {index} has a blank title"
            )));
        }
        if self.reasons.items.is_empty() {
            return Err(ContentError::Invalid("reasons slide has no items".into()));
        }
        Ok(())
    }

    /// Serializes the table as pretty JSON, e.g. as a template to edit.
    pub fn to_json_pretty(&self) -> ContentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for DeckContent {
    fn default() -> Self {
        Self {
            slides: SlideKind::DEFAULT_ORDER.to_vec(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            landing: LandingContent::default(),
            wishes: WishesContent::default(),
            distance: DistanceContent::default(),
            reasons: ReasonsContent::default(),
            finale: FinaleContent::default(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            emoji: "🎉".into(),
            title: "Happy 32nd Birthday!".into(),
            lines: strings(&[
                "Today is YOUR special day!",
                "Get ready for an amazing journey through",
                "this special birthday experience made just for you ✨",
            ]),
            highlight: strings(&[
                "Age is just a number, but",
                "32 looks absolutely wonderful on you!",
            ]),
            call_to_action: "Let's Celebrate! 🎊".into(),
            footnote: "(This will take about 2 minutes - every second worth it!)".into(),
            background: ImageRef::new(
                "https://images.unsplash.com/photo-1760954525386-cd1c15032c04?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080",
                "Birthday celebration",
            ),
            special_image: ImageRef::new(BUNDLED_SPECIAL_IMAGE, "Special birthday message"),
            close_label: "Close ✨".into(),
        }
    }
}

impl Default for WishesContent {
    fn default() -> Self {
        let card = |icon: &str, title: &str, message: &str, accent: &str, image: &str| WishCard {
            icon: icon.into(),
            title: title.into(),
            message: message.into(),
            accent: accent.into(),
            image: ImageRef::new(image, title),
        };
        Self {
            title: "Birthday Wishes Just for You".into(),
            subtitle: "Click on each card to reveal a special message! 💝".into(),
            cards: vec![
                card(
                    "❤",
                    "Warmest Wishes",
                    "May this year bring you endless joy, countless adventures, and all the happiness your heart can hold!",
                    "linear-gradient(135deg, #ec4899, #f43f5e)",
                    "https://lh3.googleusercontent.com/d/1F0xYLUA1wxMrVrUBT60E9c1M8Kppmwnr",
                ),
                card(
                    "⭐",
                    "Shine Bright",
                    "You're a star! May you continue to shine brightly and inspire everyone around you with your amazing spirit!",
                    "linear-gradient(135deg, #eab308, #f97316)",
                    "https://lh3.googleusercontent.com/d/1Agw9ZxoEsaZwYT_hwYPaHtJWr2Ngj7Y5",
                ),
                card(
                    "😊",
                    "Keep Smiling",
                    "Your smile lights up the world! Here's to another year of laughter, love, and unforgettable moments!",
                    "linear-gradient(135deg, #a855f7, #ec4899)",
                    "https://lh3.googleusercontent.com/d/1jv4xFmEKgRDuwC2tfpwA9mZXuZ7RQLHj",
                ),
                card(
                    "✨",
                    "Make Magic",
                    "May your 32nd year be filled with magical moments, beautiful surprises, and dreams coming true!",
                    "linear-gradient(135deg, #3b82f6, #06b6d4)",
                    "https://lh3.googleusercontent.com/d/1wfK7-Kn7vUkrsnzjhp1KgM9QPvMpoGw9",
                ),
                card(
                    "🎉",
                    "Celebrate You",
                    "Today we celebrate YOU - your kindness, your strength, your beautiful soul. You're truly one of a kind!",
                    "linear-gradient(135deg, #22c55e, #10b981)",
                    "https://lh3.googleusercontent.com/d/1k9d0SWTobMkWFU-uR8nOXrLOYUUwfynj",
                ),
                card(
                    "☀",
                    "Bright Future",
                    "Here's to 32 years of being absolutely amazing and to many more years of success, love, and happiness ahead!",
                    "linear-gradient(135deg, #f59e0b, #ef4444)",
                    "https://lh3.googleusercontent.com/d/1Agw9ZxoEsaZwYT_hwYPaHtJWr2Ngj7Y5",
                ),
            ],
            policy: RevealPolicy::Toggle,
            unlocked_title: "✨ You've unlocked all the wishes! ✨".into(),
            unlocked_hint: "Continue to see something special...".into(),
            front_hint: "Click to reveal".into(),
        }
    }
}

impl Default for DistanceContent {
    fn default() -> Self {
        let stat = |icon: &str, label: &str, value: &str, tone: &str| Stat {
            icon: icon.into(),
            label: label.into(),
            value: value.into(),
            tone: tone.into(),
        };
        Self {
            title: "Though Miles Apart, Always Close at Heart".into(),
            subtitle: "Our friendship knows no distance 💕".into(),
            from: Place {
                name: "Bangalore".into(),
                caption: "Your Friend".into(),
            },
            to: Place {
                name: "Nandurbar".into(),
                caption: "Birthday Star ⭐".into(),
            },
            stats: vec![
                stat("🧭", "Distance", "1,200 km", "pink"),
                stat("❤", "Friendship", "Infinite", "purple"),
                stat("📍", "Connection", "Unbreakable", "blue"),
            ],
            message: strings(&[
                "To my favorite women cum friend, Happy Birthday! You mean the world to me.",
                "I'm sending you all the best wishes and the biggest virtual hug for a truly wonderful celebration. I'm so grateful to have you in my life 💝",
            ]),
        }
    }
}

impl Default for ReasonsContent {
    fn default() -> Self {
        Self {
            title: "32 Reasons Why You're Amazing".into(),
            subtitle: "Tap on a box to reveal a reason!".into(),
            items: strings(&[
                "Your infectious smile 😊 makes everyone's day.",
                "You're incredibly kind and thoughtful.",
                "You have an amazing energy ✨ people enjoy being around.",
                "You make time for the people you care about.",
                "You're a brilliant problem-solver.",
                "Your laugh is truly unforgettable.",
                "You always show up for your friends.",
                "You have a great sense of humor.",
                "You inspire others with your determination.",
                "Your curiosity for the world is endless.",
                "You're always willing to learn new things.",
                "Your unique perspective makes you so valuable.",
                "You manage to stay positive, even when things are tough.",
                "Your creativity is a source of amazement.",
                "You have impeccable taste (in everything!).",
                "You know how to tell a great story.",
                "You find the fun in every situation.",
                "Your ability to forgive is truly admirable.",
                "You always see the best in people.",
                "Your genuine compassion for others.",
                "You set ambitious goals for yourself.",
                "Your resilience helps you bounce back.",
                "Your quiet strength speaks volumes.",
                "You know how to dream big 🌠.",
                "Your passion is contagious.",
                "You possess a great sense of style.",
                "Your thoughtful gestures mean everything.",
                "You're an exceptional listener.",
                "Your heart is full of generosity.",
                "You are authentic and true to yourself.",
                "You make the world a better place just by being in it.",
                "You make me look like a genius for finding you! 😉",
            ]),
            policy: RevealPolicy::OneWay,
            reveal_all_label: "Reveal All".into(),
            hide_all_label: "Hide All".into(),
            auto_reveal_label: "One by One".into(),
            complete_message: "Every reason uncovered 💖".into(),
            footer: "reasons. And there are so many more.".into(),
        }
    }
}

impl Default for FinaleContent {
    fn default() -> Self {
        let blessing = |icon: &str, text: &str, tone: &str| Blessing {
            icon: icon.into(),
            text: text.into(),
            tone: tone.into(),
        };
        Self {
            title: "The Best is Yet to Come!".into(),
            image: ImageRef::new(
                "https://lh3.googleusercontent.com/d/1bNAYTTmoNxtviheM9bEtZRLXT6jgUzF0",
                "Birthday celebration",
            ),
            verses: strings(&[
                "Thirty-two candles, a brilliant gleam,\nFor Shraddha, whose code is a sweet, strong dream.\nA backend wizard, with logic so keen,\nBuilding the future, a digital scene.",
                "With Maumati purring, a furry delight,\nYou craft algorithms, morning and night.\nMay your special day be joyful and bright,\nFilled with laughter, love, and pure light!",
            ]),
            blessings_intro: "May your 32nd year be filled with:".into(),
            blessings: vec![
                blessing("❤", "Love that fills your heart", "pink"),
                blessing("✨", "Dreams that come true", "purple"),
                blessing("⭐", "Moments that take your breath away", "blue"),
                blessing("🎁", "Blessings beyond measure", "green"),
            ],
            thanks: "Thank you for being such an amazing friend. Here's to you, to us, and to many more years of beautiful friendship! 🎉".into(),
            closing: "Happy 32nd Birthday! 🎂✨".into(),
            signature: "With love from Bangalore to Nandurbar 💝".into(),
            parting: strings(&[
                "Make a wish and blow out those candles! 🕯️",
                "(You can navigate back through the sections using the arrows below)",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let content = DeckContent::default();
        content.validate().unwrap();
        assert_eq!(content.wishes.cards.len(), 6);
        assert_eq!(content.reasons.items.len(), 32);
        assert_eq!(content.wishes.policy, RevealPolicy::Toggle);
        assert_eq!(content.reasons.policy, RevealPolicy::OneWay);
        assert_eq!(content.landing.special_image.source, BUNDLED_SPECIAL_IMAGE);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let content = DeckContent::from_json_str(
            r#"{
                "reasons": { "title": "Three Reasons", "items": ["a", "b", "c"] },
                "landing": { "title": "Happy Anniversary!" }
            }"#,
        )
        .unwrap();

        assert_eq!(content.reasons.items.len(), 3);
        assert_eq!(content.reasons.hide_all_label, "Hide All");
        assert_eq!(content.landing.title, "Happy Anniversary!");
        assert_eq!(content.landing.call_to_action, "Let's Celebrate! 🎊");
        assert_eq!(content.wishes.cards.len(), 6);
    }

    #[test]
    fn test_pretty_json_round_trip() {
        let content = DeckContent::default();
        let json = content.to_json_pretty().unwrap();
        assert_eq!(DeckContent::from_json_str(&json).unwrap(), content);
    }

    #[test]
    fn test_rejects_invalid_tables() {
        let cases = [
            r#"{ "slides": [] }"#,
            r#"{ "slides": ["landing", "landing"] }"#,
            r#"{ "palette": [] }"#,
            r#"{ "wishes": { "cards": [] } }"#,
            r#"{ "reasons": { "items": [] } }"#,
            r#"{ "wishes": { "cards": [{ "icon": "x", "title": " ", "message": "m", "accent": "red", "image": { "source": "a.png" } }] } }"#,
        ];
        for json in cases {
            let err = DeckContent::from_json_str(json).unwrap_err();
            assert!(matches!(err, ContentError::Invalid(_)), "{json}: {err}");
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = DeckContent::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, r#"{ "slides": ["reasons", "finale"] }"#).unwrap();

        let content = DeckContent::from_path(&path).unwrap();
        assert_eq!(content.slides, vec![SlideKind::Reasons, SlideKind::Finale]);

        let missing = DeckContent::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ContentError::Read { .. }));
        assert!(missing.to_string().contains("missing.json"));
    }
}
