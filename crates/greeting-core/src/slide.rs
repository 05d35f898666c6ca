//! Slide identifiers.

use serde::{Deserialize, Serialize};

/// One full-screen section of the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Landing,
    Wishes,
    Distance,
    Reasons,
    Finale,
}

impl SlideKind {
    /// The order slides appear in when the content table does not override it.
    pub const DEFAULT_ORDER: [SlideKind; 5] = [
        SlideKind::Landing,
        SlideKind::Wishes,
        SlideKind::Distance,
        SlideKind::Reasons,
        SlideKind::Finale,
    ];

    /// Returns the short name used for CSS classes and logs.
    pub fn name(&self) -> &'static str {
        match self {
            SlideKind::Landing => "landing",
            SlideKind::Wishes => "wishes",
            SlideKind::Distance => "distance",
            SlideKind::Reasons => "reasons",
            SlideKind::Finale => "final",
        }
    }
}

impl std::fmt::Display for SlideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SlideKind::DEFAULT_ORDER).unwrap();
        assert_eq!(
            json,
            r#"["landing","wishes","distance","reasons","finale"]"#
        );
    }

    #[test]
    fn test_finale_displays_as_final() {
        assert_eq!(SlideKind::Finale.to_string(), "final");
        assert_eq!(SlideKind::Landing.to_string(), "landing");
    }
}
