//! Site settings management for `waypost.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `[site]`    | Site address (url, prefix) and timezone            |
//! | `[build]`   | Permalink style, relative-URL mode, static prefix  |
//! | `[writers]` | Writer toggles (tagcloud)                          |
//!
//! Settings are loaded once at build start and are immutable for the
//! duration of a build; every consumer takes them by shared reference.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::permalink::PermalinkStyle;

// ============================================================================
// root settings
// ============================================================================

/// Root settings structure representing waypost.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Absolute path to the settings file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site address settings
    #[serde(default)]
    pub site: SiteSection,

    /// Build settings
    #[serde(default)]
    pub build: BuildSection,

    /// Writer toggles
    #[serde(default)]
    pub writers: WritersSection,
}

/// `[site]` section: where the site lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Absolute site URL (e.g. `https://example.com`), used when links
    /// must carry the full host. Empty means root-relative links only.
    pub url: String,

    /// Path prefix for subdirectory deployments (e.g. `blog`).
    pub prefix: String,

    /// Timezone suffix for feed timestamps, consumed by downstream writers.
    pub timezone: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: String::new(),
            prefix: String::new(),
            timezone: "+00:00".to_string(),
        }
    }
}

/// `[build]` section: how URLs are shaped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Permalink pattern; only its suffix decides the URL style
    /// (`.html`, `/`, or neither).
    pub permalink: String,

    /// Emit internal links relative to each page's own location instead
    /// of rooted at `/`.
    pub use_relative_url: bool,

    /// URL prefix for static assets.
    pub static_prefix: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            permalink: "/:year/:month/:day/:title/".to_string(),
            use_relative_url: false,
            static_prefix: "/static".to_string(),
        }
    }
}

/// `[writers]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WritersSection {
    /// A tag-cloud page replaces per-tag pages; tag links become anchors
    /// on the shared tag index.
    pub tagcloud: bool,
}

impl Settings {
    /// Load settings from a file path with unknown field detection.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut settings, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            crate::log!("warning"; "unknown fields in {}, ignoring:", path.display());
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        settings.config_path = path.to_path_buf();
        settings.validate()?;

        crate::debug!("config"; "loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let settings = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((settings, ignored))
    }

    /// Permalink style derived from the configured pattern.
    pub fn permalink_style(&self) -> PermalinkStyle {
        PermalinkStyle::from_pattern(&self.build.permalink)
    }

    /// Validate settings, collecting all errors at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.build.permalink.is_empty() {
            errors.push("build.permalink must not be empty");
        }
        if self.build.static_prefix.is_empty() {
            errors.push("build.static_prefix must not be empty");
        }
        if !self.site.url.is_empty()
            && !self.site.url.starts_with("http://")
            && !self.site.url.starts_with("https://")
        {
            errors.push("site.url must be an absolute http(s) URL");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_settings`)
// ============================================================================

/// Parse settings from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_settings(content: &str) -> Settings {
    let (parsed, ignored) = Settings::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test settings have unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
