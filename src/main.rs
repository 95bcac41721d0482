//! uplift - Terminal Affirmation Card Deck
//!
//! Renders a fixed deck of affirmation cards in a scrolling terminal list.

use anyhow::Result;
use clap::{Arg, Command};
use std::path::Path;
use uplift::config::AppConfig;
use uplift::ui::{ColorTheme, TerminalUI};
use uplift::{Application, Resources};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("uplift")
        .version(uplift::VERSION)
        .about("A terminal affirmation card deck")
        .long_about(
            "uplift renders a fixed deck of affirmation cards - ASCII art above a \
             short text - in a scrolling terminal list. Navigation follows less: \
             j/k, space/b, g/G, q to quit.",
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .value_name("TAG")
                .help("Locale tag for the affirmation text (e.g. en, es, en-US)"),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Color theme: default, monochrome, high-contrast"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file path (defaults to the platform config directory)"),
        )
        .get_matches();

    // Load config; CLI flags override file values
    let config = match matches.get_one::<String>("config") {
        Some(path) => AppConfig::load_from(Path::new(path))?,
        None => AppConfig::load()?,
    };

    let locale = matches
        .get_one::<String>("locale")
        .cloned()
        .or(config.locale)
        .unwrap_or_else(|| "en".to_string());

    let theme_name = matches
        .get_one::<String>("theme")
        .cloned()
        .or(config.theme)
        .unwrap_or_else(|| "default".to_string());

    let Some(theme) = ColorTheme::by_name(&theme_name) else {
        anyhow::bail!(
            "Unknown theme '{}' (expected one of: {})",
            theme_name,
            ColorTheme::NAMES.join(", ")
        );
    };

    let resources = Resources::load(&locale)?;

    // Initialize the Application and start the interactive event loop
    let ui_renderer = Box::new(TerminalUI::with_theme(theme)?);
    let mut app = Application::new(resources, ui_renderer)?;

    app.run().await?;

    Ok(())
}
