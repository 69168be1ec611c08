use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::{Category, CategoryFilter};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub cart: CartSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Open an audio output at all. With `false`, previews report as unavailable.
    pub enabled: bool,
    /// Preview volume, 1.0 is unchanged.
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// Timeout for downloading a remote preview (seconds).
    pub fetch_timeout_secs: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 1.0,
            quit_fade_out_ms: 300,
            fetch_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Artist name rendered in the header box.
    pub header_text: String,
    /// Line rendered under the artist name.
    pub tagline: String,
    /// How long a notice stays on screen (milliseconds).
    pub notice_ttl_ms: u64,
    /// Maximum number of notices shown at once.
    pub max_notices: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "Роман Самолетов".to_string(),
            tagline: "Сайт музыканта, композитора".to_string(),
            notice_ttl_ms: 3000,
            max_notices: 4,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Tab selected at startup.
    pub default_category: CategorySetting,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategorySetting {
    #[default]
    All,
    #[serde(alias = "kids")]
    Children,
    Adult,
    #[serde(alias = "choir")]
    Choral,
    #[serde(alias = "orchestra")]
    Orchestral,
}

impl From<CategorySetting> for CategoryFilter {
    fn from(setting: CategorySetting) -> Self {
        match setting {
            CategorySetting::All => CategoryFilter::All,
            CategorySetting::Children => CategoryFilter::Only(Category::Children),
            CategorySetting::Adult => CategoryFilter::Only(Category::Adult),
            CategorySetting::Choral => CategoryFilter::Only(Category::Choral),
            CategorySetting::Orchestral => CategoryFilter::Only(Category::Orchestral),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CartSettings {
    /// Skip the notice when removing an absent item or clearing an empty cart.
    pub quiet_noops: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file. Defaults to `$XDG_STATE_HOME/encore/encore.log`.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive, overridden by `ENCORE_LOG`.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}
