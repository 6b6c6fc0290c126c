//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

use crate::viewstate::Codec;

/// Command-line configuration.
#[derive(Clone)]
pub struct Config {
    /// Key for signing view-state tokens (MENUSTATE_MAC_KEY). Unsigned
    /// tokens are produced and accepted when unset.
    pub mac_key: Option<String>,

    /// Pretty-print JSON output (default: true).
    pub pretty: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mac_key = env::var("MENUSTATE_MAC_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let pretty: bool = env::var("MENUSTATE_PRETTY")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .context("MENUSTATE_PRETTY must be true or false")?;

        Ok(Self { mac_key, pretty })
    }

    /// Codec matching the configured key.
    pub fn codec(&self) -> Codec {
        match &self.mac_key {
            Some(key) => Codec::signed(key),
            None => Codec::unsigned(),
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mac_key", &self.mac_key.as_ref().map(|_| "<redacted>"))
            .field("pretty", &self.pretty)
            .finish()
    }
}
