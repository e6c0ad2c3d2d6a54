use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

static CONFIG: OnceCell<NegotiationConfig> = OnceCell::new();

/// What the parser does with a segment it cannot split into
/// `type/subtype` or `name=value` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the whole parse on the first malformed segment.
    #[default]
    Strict,
    /// Drop the malformed segment, log it and keep going.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    pub malformed: MalformedPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl NegotiationConfig {
    pub fn strict() -> Self {
        Self {
            malformed: MalformedPolicy::Strict,
        }
    }

    pub fn skip_malformed() -> Self {
        Self {
            malformed: MalformedPolicy::Skip,
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<NegotiationConfig>(content)
    }

    pub fn try_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;

        let cfg = Self::from_toml(&content).map_err(|source| ConfigError::Toml {
            path: path.to_string(),
            source,
        })?;

        log::debug!("loaded negotiation config from {}: {:?}", path, cfg);
        Ok(cfg)
    }

    /// Loads the config file, falling back to defaults when it cannot be
    /// read or deserialized.
    pub fn from_file(path: &str) -> Self {
        match Self::try_from_file(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                log::warn!("{err}");
                log::warn!("Fall back to default config");
                NegotiationConfig::default()
            }
        }
    }
}

/// Installs the process-wide config. Fails with the rejected value if a
/// config was already set or read.
pub fn set_config(cfg: NegotiationConfig) -> Result<(), NegotiationConfig> {
    CONFIG.set(cfg)
}

/// Process-wide config, defaulting to [`MalformedPolicy::Strict`] when
/// [`set_config`] was never called.
pub fn config() -> &'static NegotiationConfig {
    CONFIG.get_or_init(NegotiationConfig::default)
}
