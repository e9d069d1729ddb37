use std::{fs, io, path::Path};

use color_eyre::eyre::WrapErr;
use log::{debug, info};
use serde::Deserialize;

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Settings read from the TOML configuration file. Every field is optional
/// in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Number of tokens in a generated scramble.
    pub scramble_length: usize,
    /// Fixed seed for scrambles; random when absent.
    pub seed: Option<u64>,
    /// Whether to paint nets with terminal colors.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            color: true,
        }
    }
}

impl CliConfig {
    /// Load the configuration at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    target: "config",
                    "No configuration at {}, using defaults",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| {
                    format!("Failed to read configuration file {}", path.display())
                });
            }
        };

        let config = Self::parse(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;
        info!(target: "config", "Loaded {}: {config:?}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Scramble length and seed, with command line values taking precedence.
    #[must_use]
    pub fn scramble_settings(&self, length: Option<usize>, seed: Option<u64>) -> ScrambleSettings {
        ScrambleSettings {
            length: length.unwrap_or(self.scramble_length),
            seed: seed.or(self.seed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleSettings {
    pub length: usize,
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::parse("seed = 12\ncolor = false\n").unwrap();
        assert_eq!(
            config,
            CliConfig {
                scramble_length: DEFAULT_SCRAMBLE_LENGTH,
                seed: Some(12),
                color: false,
            }
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(CliConfig::parse("scramble_lenght = 5").is_err());
        assert!(CliConfig::parse("scramble_length = -5").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let config = CliConfig::parse("scramble_length = 12\nseed = 3\n").unwrap();
        assert_eq!(
            config.scramble_settings(None, None),
            ScrambleSettings {
                length: 12,
                seed: Some(3),
            }
        );
        assert_eq!(
            config.scramble_settings(Some(5), Some(9)),
            ScrambleSettings {
                length: 5,
                seed: Some(9),
            }
        );
        assert_eq!(config.scramble_settings(Some(0), None).length, 0);

        let defaults = CliConfig::default().scramble_settings(None, Some(1));
        assert_eq!(defaults.length, DEFAULT_SCRAMBLE_LENGTH);
        assert_eq!(defaults.seed, Some(1));
        assert_eq!(CliConfig::default().scramble_settings(None, None).seed, None);
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = PathBuf::from("definitely/not/a/real/rubik.toml");
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("rubik-config-{}.toml", std::process::id()));
        fs::write(&path, "scramble_length = 7\n").unwrap();
        let config = CliConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(config.unwrap().scramble_length, 7);
    }
}
