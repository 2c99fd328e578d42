//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM,
};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the slide editor.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the single durable snapshot slot.
    pub storage_path: String,
    /// Debounce window for field edits, in milliseconds.
    pub debounce_ms: u64,
    /// Debounce window for sidebar search input, in milliseconds.
    pub search_debounce_ms: u64,
    /// Zoom factor applied at startup.
    pub default_zoom: f32,
    /// Lower zoom clamp.
    pub min_zoom: f32,
    /// Upper zoom clamp.
    pub max_zoom: f32,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    // Prefer explicit HOME if set (Unix, some Windows shells)
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows USERPROFILE (standard)
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    // Fallback to current directory if available
    std::env::current_dir().ok()
}

fn default_storage_path() -> String {
    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".local")
        .join("share")
        .join("slidedeck")
        .join("presentation.json")
        .to_string_lossy()
        .to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            storage_path: env::var("SLIDEDECK_STORAGE_PATH")
                .map(expand_tilde)
                .unwrap_or_else(|_| default_storage_path()),
            debounce_ms: env::var("SLIDEDECK_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DEBOUNCE_MS),
            search_debounce_ms: env::var("SLIDEDECK_SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
            default_zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            default_zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}
