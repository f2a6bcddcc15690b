//! Host configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Landing host configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    /// Origin used for shared links, canonical URLs and the sitemap.
    pub base_url: String,
    /// Directory holding the seen-flag record.
    pub data_dir: PathBuf,
    /// JSON deck replacing the built-in cards.
    pub deck_path: Option<PathBuf>,
    /// Skip the typing animation.
    pub reduced_motion: bool,
    /// Height of one card on the scroll surface.
    pub viewport_height: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            base_url: "https://zenon.wtf".to_string(),
            data_dir: PathBuf::from("./zenon-data"),
            deck_path: None,
            reduced_motion: false,
            viewport_height: 24.0,
        }
    }
}

impl LandingConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = match lookup("ZENON_BASE_URL") {
            Some(url) => parse_base_url(&url)?,
            None => defaults.base_url,
        };

        let data_dir = lookup("ZENON_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let deck_path = lookup("ZENON_DECK_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let reduced_motion = match lookup("ZENON_REDUCED_MOTION") {
            Some(value) => parse_bool("ZENON_REDUCED_MOTION", &value)?,
            None => defaults.reduced_motion,
        };

        let viewport_height = match lookup("ZENON_VIEWPORT_HEIGHT") {
            Some(value) => parse_height(&value)?,
            None => defaults.viewport_height,
        };

        Ok(Self {
            base_url,
            data_dir,
            deck_path,
            reduced_motion,
            viewport_height,
        })
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[must_use]
    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    #[must_use]
    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }
}

fn parse_base_url(value: &str) -> Result<String> {
    let url = value.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(Error::Config {
            var: "ZENON_BASE_URL",
            reason: format!("expected an http(s) origin, got {value:?}"),
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::Config {
            var,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

fn parse_height(value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(height) if height.is_finite() && height > 0.0 => Ok(height),
        _ => Err(Error::Config {
            var: "ZENON_VIEWPORT_HEIGHT",
            reason: format!("expected a positive number, got {value:?}"),
        }),
    }
}
