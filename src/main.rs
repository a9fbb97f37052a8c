//! Folio - Terminal portfolio viewer
//!
//! Renders an interactive portfolio page in the terminal: themed palettes,
//! section navigation, scroll animations, and a contact form wired to an
//! HTTP endpoint.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use folio::config::{Config, ThemeMode};
use folio::constants::{APP_BINARY_NAME, APP_NAME};
use folio::contact::spawn_offline_probe;
use folio::content::Portfolio;
use folio::{logging, tui};

/// Folio - Terminal portfolio viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a portfolio content file (TOML)
    #[arg(value_name = "FILE")]
    content_path: Option<PathBuf>,

    /// Theme override for this session (auto, dark, light)
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Contact endpoint base URL override
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Auto,
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => ThemeMode::Auto,
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {e}");
    }

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal portfolio viewer");
    println!();

    let portfolio = match cli.content_path {
        Some(path) => {
            if !path.exists() {
                eprintln!("Error: Content file not found: {}", path.display());
                eprintln!();
                eprintln!("Please provide a valid path to a TOML content file.");
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {} portfolio.toml", APP_BINARY_NAME);
                eprintln!();
                eprintln!("For more options, run:");
                eprintln!("  {} --help", APP_BINARY_NAME);
                std::process::exit(1);
            }
            Portfolio::load(&path)?
        }
        None => Portfolio::sample(),
    };

    // Load or create default config, then apply CLI overrides (session only,
    // not persisted until the user toggles something)
    let mut config = Config::load().unwrap_or_else(|_| Config::new());
    if let Some(theme) = cli.theme {
        config.ui.theme = theme.into();
    }
    if let Some(endpoint) = cli.endpoint {
        config.contact.base_url = endpoint;
    }

    // Non-blocking connectivity probe; result only reaches the log
    spawn_offline_probe(config.contact.base_url.clone());

    let config_path = Config::config_dir()
        .map(|dir| dir.join("config.toml"))
        .unwrap_or_else(|_| PathBuf::from("folio-config.toml"));
    let mut state = tui::AppState::new(config, config_path, portfolio);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}
