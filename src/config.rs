//! Host configuration parsed from the environment.
//!
//! Leptos defaults come from `[package.metadata.leptos]` (or the `LEPTOS_*`
//! variables `cargo leptos` exports); the variables below override them.
//!
//! Optional:
//! - `PORT`: listen port, keeping the configured host address
//! - `DOCUCHAIN_SITE_ROOT`: directory holding the compiled `pkg/` bundle
//! - `DOCUCHAIN_GZIP`: `true` (default) or `false`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::sync::Arc;

use leptos::prelude::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The Leptos metadata could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// An environment variable held a value that does not parse.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Environment overrides applied on top of the Leptos options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostOverrides {
    pub port: Option<u16>,
    pub site_root: Option<String>,
    pub gzip: bool,
}

impl HostOverrides {
    /// Read overrides through `lookup` so tests can supply their own values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unparseable port or flag.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = lookup("PORT").map(|raw| parse_port(&raw)).transpose()?;
        let site_root = lookup("DOCUCHAIN_SITE_ROOT").filter(|s| !s.trim().is_empty());
        let gzip = lookup("DOCUCHAIN_GZIP")
            .map(|raw| parse_bool("DOCUCHAIN_GZIP", &raw))
            .transpose()?
            .unwrap_or(true);
        Ok(Self { port, site_root, gzip })
    }
}

#[derive(Debug, Clone)]
pub struct HostConfig {
    pub leptos: LeptosOptions,
    pub gzip: bool,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns an error if the Leptos metadata is missing or an override does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let overrides = HostOverrides::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Self::with_overrides(conf.leptos_options, overrides))
    }

    pub fn with_overrides(mut leptos: LeptosOptions, overrides: HostOverrides) -> Self {
        if let Some(port) = overrides.port {
            leptos.site_addr.set_port(port);
        }
        if let Some(root) = overrides.site_root {
            leptos.site_root = Arc::from(root);
        }
        Self { leptos, gzip: overrides.gzip }
    }

    pub fn addr(&self) -> SocketAddr {
        self.leptos.site_addr
    }
}

pub(crate) fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.to_owned() })
}

pub(crate) fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: raw.to_owned() }),
    }
}
