//! Image loading with a fallback visual.
//!
//! Remote URLs and `data:` URLs are handed to the webview untouched. Assets
//! compiled into the binary are served from memory. Local paths are read and
//! inlined as base64 data URLs. If a source cannot be resolved, or the
//! webview reports a load error, a placeholder SVG is shown instead.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use dioxus::prelude::*;
use greeting_core::{ImageRef, BUNDLED_SPECIAL_IMAGE};

const FALLBACK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="88" height="88" viewBox="0 0 88 88" fill="none" stroke="#9ca3af" stroke-width="3.7" opacity=".4"><rect x="16" y="16" width="56" height="56" rx="6"/><path d="m16 58 16-18 32 32"/><circle cx="53" cy="35" r="7"/></svg>"##;

/// Placeholder shown when an image cannot be displayed.
pub static FALLBACK_DATA_URL: LazyLock<String> =
    LazyLock::new(|| format!("data:image/svg+xml;base64,{}", STANDARD.encode(FALLBACK_SVG)));

/// Images compiled into the binary: source name, MIME type, bytes.
const BUNDLED: &[(&str, &str, &[u8])] = &[(
    BUNDLED_SPECIAL_IMAGE,
    "image/svg+xml",
    include_bytes!("../assets/special.svg"),
)];

/// Local files already inlined, keyed by their source string. Only
/// successful loads are kept so a file that appears later is picked up.
static DATA_URL_CACHE: LazyLock<Mutex<HashMap<String, String>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns the data URL for an asset compiled into the binary.
pub fn bundled_data_url(source: &str) -> Option<String> {
    BUNDLED
        .iter()
        .find(|(name, _, _)| *name == source)
        .map(|(_, mime, bytes)| format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

fn is_passthrough(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://") || source.starts_with("data:")
}

/// Returns the MIME type for an image path based on its extension.
pub fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Converts a local file path to a data URL for display in the webview.
pub fn load_image_as_data_url(path: &str) -> Option<String> {
    let full_path = if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        std::env::current_dir().ok()?.join(path)
    };

    let data = match std::fs::read(&full_path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Image {} unavailable: {}", full_path.display(), e);
            return None;
        }
    };

    let encoded = STANDARD.encode(&data);
    Some(format!("data:{};base64,{}", mime_for(&full_path), encoded))
}

/// Resolves an image source to something the webview can display.
pub fn resolve_source(source: &str) -> Option<String> {
    let source = source.trim();
    if source.is_empty() {
        return None;
    }
    if is_passthrough(source) {
        return Some(source.to_string());
    }

    let mut cache = DATA_URL_CACHE.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(url) = cache.get(source) {
        return Some(url.clone());
    }

    let url = bundled_data_url(source).or_else(|| load_image_as_data_url(source))?;
    cache.insert(source.to_string(), url.clone());
    Some(url)
}

/// Displays `image`, or the placeholder if it cannot be loaded.
#[component]
pub fn ImageWithFallback(image: ImageRef, class: String) -> Element {
    // Remember which source failed so a new source gets a fresh attempt.
    let mut failed_source = use_signal(|| None::<String>);

    let failed = failed_source.read().as_deref() == Some(image.source.as_str());
    let resolved = if failed {
        None
    } else {
        resolve_source(&image.source)
    };

    match resolved {
        Some(src) => {
            let source = image.source.clone();
            rsx! {
                img {
                    class: "{class}",
                    src: "{src}",
                    alt: "{image.alt}",
                    onerror: move |_| {
                        tracing::debug!("Falling back for image {}", source);
                        failed_source.set(Some(source.clone()));
                    },
                }
            }
        }
        None => {
            let fallback = FALLBACK_DATA_URL.as_str();
            rsx! {
                div {
                    class: "image-fallback {class}",
                    img {
                        src: "{fallback}",
                        alt: "Error loading image",
                        "data-original-url": "{image.source}",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_sources_pass_through() {
        let url = "https://lh3.googleusercontent.com/d/abc";
        assert_eq!(resolve_source(url).as_deref(), Some(url));
        assert_eq!(
            resolve_source("data:image/png;base64,AAAA").as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_blank_and_missing_sources() {
        assert_eq!(resolve_source("   "), None);
        assert_eq!(resolve_source("/definitely/not/here.png"), None);
    }

    #[test]
    fn test_local_file_inlined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cake.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let url = resolve_source(path.to_str().unwrap()).unwrap();
        assert_eq!(url, format!("data:image/gif;base64,{}", STANDARD.encode(b"GIF89a")));
    }

    #[test]
    fn test_missing_file_retried_once_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("late.png");
        let source = path.to_str().unwrap();

        assert_eq!(resolve_source(source), None);

        std::fs::write(&path, b"\x89PNG").unwrap();
        let url = resolve_source(source).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_default_special_image_is_bundled() {
        let content = greeting_core::DeckContent::default();
        let url = resolve_source(&content.landing.special_image.source).unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
        assert_ne!(url, *FALLBACK_DATA_URL);
        assert_eq!(Some(url), bundled_data_url(BUNDLED_SPECIAL_IMAGE));
    }

    #[test]
    fn test_mime_for_extensions() {
        assert_eq!(mime_for(Path::new("a.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(mime_for(Path::new("a")), "application/octet-stream");
    }

    #[test]
    fn test_fallback_is_svg_data_url() {
        assert!(FALLBACK_DATA_URL.starts_with("data:image/svg+xml;base64,"));
    }
}
