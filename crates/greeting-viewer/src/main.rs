//! Entry point for the greeting viewer.
//!
//! This Dioxus desktop application presents the greeting deck: a landing
//! page, a wishes gallery, a distance map, a reasons grid and a closing
//! message, navigated with arrows and dots.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use greeting_core::{CelebrationPolicy, Deck, DeckConfig, DeckContent, TimerEvents};
use greeting_viewer::components::App;
use greeting_viewer::theme::{Theme, CURRENT_THEME};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Deck settings resolved from the command line.
static DECK_CONFIG: OnceLock<DeckConfig> = OnceLock::new();

/// Initial theme chosen on the command line.
static INITIAL_THEME: OnceLock<Theme> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "greeting-viewer")]
#[command(about = "Animated birthday greeting presentation")]
struct Args {
    /// JSON file overriding the built-in copy, colors and images
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Index of the slide to open on
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Burst confetti every time the first slide is entered, not just once
    #[arg(long)]
    celebrate_every_visit: bool,

    /// Seconds before the special image appears on the landing slide
    #[arg(long, default_value_t = 10)]
    overlay_delay_secs: u64,

    /// Seed for reproducible confetti
    #[arg(long)]
    seed: Option<u64>,

    /// Number of confetti particles per burst
    #[arg(long, default_value_t = greeting_core::DEFAULT_PARTICLES)]
    confetti: usize,

    /// Color theme (pastel or twilight)
    #[arg(long, default_value = "pastel")]
    theme: String,

    /// Print the effective content as JSON and exit
    #[arg(long)]
    dump_content: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    let content = match &args.content {
        Some(path) => DeckContent::from_path(path)
            .with_context(|| format!("Failed to load deck content from {}", path.display()))?,
        None => DeckContent::default(),
    };

    if args.dump_content {
        println!("{}", content.to_json_pretty()?);
        return Ok(());
    }

    let theme = Theme::from_css_value(&args.theme)
        .ok_or_else(|| anyhow::anyhow!("Unknown theme: {}", args.theme))?;

    let celebration = if args.celebrate_every_visit {
        CelebrationPolicy::EveryEntry
    } else {
        CelebrationPolicy::OncePerSession
    };

    DECK_CONFIG
        .set(DeckConfig {
            content,
            start: args.start,
            celebration,
            overlay_delay: Duration::from_secs(args.overlay_delay_secs),
            confetti_count: args.confetti,
            seed: args.seed,
        })
        .ok();
    INITIAL_THEME.set(theme).ok();

    tracing::info!("Starting Greeting Viewer");

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Happy Birthday!")
                        .with_inner_size(LogicalSize::new(1200, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Dancing+Script:wght@600;700&family=Quicksand:wght@400;500;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);

    Ok(())
}

/// Root application component that owns the deck and pumps its timers.
#[component]
fn RootApp() -> Element {
    // The receiver is handed to the timer pump exactly once.
    let pending_events = use_hook(|| Rc::new(Cell::new(None::<TimerEvents>)));

    let deck = use_signal({
        let pending_events = pending_events.clone();
        move || {
            let config = DECK_CONFIG.get().cloned().unwrap_or_default();
            let (deck, events) = Deck::new(config);
            pending_events.set(Some(events));
            deck
        }
    });

    use_hook(|| {
        if let Some(theme) = INITIAL_THEME.get() {
            *CURRENT_THEME.write() = *theme;
        }
    });

    use_drop(move || {
        tracing::info!("Shutting down Greeting Viewer");
        let mut deck = deck;
        if let Ok(mut deck) = deck.try_write() {
            deck.shutdown();
        }
    });

    use_future(move || {
        let mut deck = deck;
        let pending_events = pending_events.clone();

        async move {
            let Some(mut events) = pending_events.take() else {
                return;
            };

            deck.write().start();

            while let Some(fired) = events.recv().await {
                deck.write().on_timer(fired);
            }
            tracing::debug!("Timer channel closed");
        }
    });

    rsx! {
        App { deck }
    }
}
