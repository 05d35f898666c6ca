//! Theme system for the greeting viewer.

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Pink, lilac and sky-blue gradients on a light background.
    #[default]
    Pastel,
    /// The same accents on a deep violet night sky.
    Twilight,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Pastel => "pastel",
            Theme::Twilight => "twilight",
        }
    }

    /// Parses a CSS value back into a theme.
    pub fn from_css_value(value: &str) -> Option<Theme> {
        Theme::all().iter().copied().find(|t| t.css_value() == value)
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Pastel, Theme::Twilight]
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_values_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_css_value(theme.css_value()), Some(*theme));
        }
        assert_eq!(Theme::from_css_value("neon"), None);
    }
}
