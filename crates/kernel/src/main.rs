//! menustate CLI
//!
//! Encodes declarative menus into view-state tokens and decodes tokens back
//! into menus.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use menustate_kernel::{Config, Menu, MenuDefinition};

#[derive(Debug, Parser)]
#[command(name = "menustate", version, about = "Menu view-state round-trip tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a menu from a definition and print its view-state token.
    Encode {
        /// Menu definition (.toml or .json).
        definition: PathBuf,
    },
    /// Restore a menu from a view-state token and print it as JSON.
    Decode {
        /// Token to decode; `-` reads it from stdin.
        token: String,
    },
    /// Print a menu definition, normalized, as JSON.
    Show {
        /// Menu definition (.toml or .json).
        definition: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    match cli.command {
        Command::Encode { definition } => encode(&config, &definition),
        Command::Decode { token } => decode(&config, &token),
        Command::Show { definition } => show(&config, &definition),
    }
}

fn encode(config: &Config, path: &Path) -> Result<()> {
    let mut menu = load_menu(path)?;

    // Declarative items predate tracking; mark them so the token carries the
    // whole menu.
    menu.begin_tracking();
    menu.set_dirty();

    let snapshot = menu.capture_state();
    let token = config
        .codec()
        .encode(snapshot.as_ref())
        .context("failed to encode view state")?;

    info!(
        items = menu.items().len(),
        signed = config.mac_key.is_some(),
        "encoded menu"
    );
    println!("{token}");
    Ok(())
}

fn decode(config: &Config, token: &str) -> Result<()> {
    let token = if token == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read token from stdin")?;
        buf
    } else {
        token.to_string()
    };

    let snapshot = config
        .codec()
        .decode(&token)
        .context("failed to decode view state")?;

    let mut menu = Menu::new();
    menu.begin_tracking();
    menu.restore_state(snapshot.as_ref())
        .context("failed to restore menu from view state")?;

    info!(items = menu.items().len(), "restored menu");
    print_json(config, &MenuDefinition::from_menu(&menu))
}

fn show(config: &Config, path: &Path) -> Result<()> {
    let menu = load_menu(path)?;
    print_json(config, &MenuDefinition::from_menu(&menu))
}

fn load_menu(path: &Path) -> Result<Menu> {
    let definition = MenuDefinition::load(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    definition.build().context("invalid menu structure")
}

fn print_json<T: Serialize>(config: &Config, value: &T) -> Result<()> {
    let json = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
