use crate::conversation::TypingLatency;
use crate::resolver::ResolverSettings;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_PREFIX: &str = "PORTFOLIO_CHAT";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataSettings {
    /// Directory holding one JSON file per topic. The bundled dataset is used when unset.
    pub dataset_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypingSettings {
    #[serde(default = "TypingSettings::default_min_delay_ms")]
    pub min_delay_ms: u64,
    #[serde(default = "TypingSettings::default_max_delay_ms")]
    pub max_delay_ms: u64,
    #[serde(default = "TypingSettings::default_per_char_ms")]
    pub per_char_ms: u64,
}

impl TypingSettings {
    fn default_min_delay_ms() -> u64 {
        600
    }

    fn default_max_delay_ms() -> u64 {
        1500
    }

    fn default_per_char_ms() -> u64 {
        2
    }

    pub fn latency(&self) -> TypingLatency {
        TypingLatency {
            min: Duration::from_millis(self.min_delay_ms),
            max: Duration::from_millis(self.max_delay_ms),
            per_char: Duration::from_millis(self.per_char_ms),
        }
    }
}

impl Default for TypingSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: Self::default_min_delay_ms(),
            max_delay_ms: Self::default_max_delay_ms(),
            per_char_ms: Self::default_per_char_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logic: ResolverSettings,
    #[serde(default)]
    pub typing: TypingSettings,
}

impl Settings {
    /// Reads `<name>.toml` (optional) and `PORTFOLIO_CHAT__SECTION__KEY` overrides.
    pub fn load(name: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .with_context(|| format!("Failed to read configuration '{}'", name))?
            .try_deserialize::<Settings>()
            .context("Invalid configuration")?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Reads exactly the given file, without environment overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .with_context(|| format!("Failed to read configuration {:?}", path))?
            .try_deserialize::<Settings>()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.logic.confidence_threshold, 3.0);
        assert_eq!(settings.logic.project_prefix_chars, 15);
        assert_eq!(settings.typing.latency(), TypingLatency::default());
        assert!(settings.data.dataset_dir.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logic]\nconfidence_threshold = 4.5\n\n[typing]\nmax_delay_ms = 2000").unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.logic.confidence_threshold, 4.5);
        assert_eq!(settings.logic.project_prefix_chars, 15);
        assert_eq!(settings.typing.max_delay_ms, 2000);
        assert_eq!(settings.typing.min_delay_ms, 600);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let settings = Settings::load("definitely-not-a-config-file").unwrap();
        assert_eq!(settings.logic, ResolverSettings::default());
    }
}
