use crate::config::Settings;

/// Settings to run with, plus the reason the defaults were used instead of the
/// user's config, if they were.
pub struct StartupSettings {
    pub settings: Settings,
    pub fallback: Option<String>,
}

/// Load and validate the config. Never fails: a missing, unreadable or invalid
/// config falls back to the defaults.
pub fn load_settings() -> StartupSettings {
    let loaded = Settings::load()
        .map_err(|e| format!("failed to load config: {e}"))
        .and_then(|s| match s.validate() {
            Ok(()) => Ok(s),
            Err(msg) => Err(format!("invalid config: {msg}")),
        });

    match loaded {
        Ok(settings) => StartupSettings {
            settings,
            fallback: None,
        },
        Err(reason) => {
            eprintln!("encore: {reason}, using defaults");
            StartupSettings {
                settings: Settings::default(),
                fallback: Some(reason),
            }
        }
    }
}
