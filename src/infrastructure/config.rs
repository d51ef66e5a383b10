use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Debounce window applied to draft autosaves unless configured otherwise
pub const DEFAULT_AUTOSAVE_DEBOUNCE_MS: u64 = 500;

#[derive(Clone, Debug)]
pub struct Config {
    pub profile: String,
    pub autosave_debounce: Duration,
    pub seed_demo: bool,
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            autosave_debounce: Duration::from_millis(DEFAULT_AUTOSAVE_DEBOUNCE_MS),
            seed_demo: true,
            seed_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup("PROFILE").unwrap_or_else(|| "default".to_string());

        let debounce_ms = lookup("AUTOSAVE_DEBOUNCE_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_AUTOSAVE_DEBOUNCE_MS);

        let seed_demo = lookup("SEED_DEMO")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true); // Seeded by default

        Self {
            profile,
            autosave_debounce: Duration::from_millis(debounce_ms),
            seed_demo,
            seed_file: lookup("SEED_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
