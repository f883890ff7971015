//! Engine configuration from environment variables.
//!
//! | Variable                  | Default | Meaning                              |
//! |---------------------------|---------|--------------------------------------|
//! | `SURFACE_CACHE_CAPACITY`  | 16      | Max tensors held by the LRU cache    |
//! | `SURFACE_THREADS`         | unset   | Dedicated pool size; unset = global  |
//! | `SURFACE_GRID_RESOLUTION` | 10      | Default steps per grid axis          |

use std::env;
use thiserror::Error;

/// Default LRU capacity in tensors.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Default steps per grid axis.
pub const DEFAULT_GRID_RESOLUTION: usize = 10;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidVar {
        /// The variable name.
        name: &'static str,
        /// The raw value found.
        value: String,
    },

    /// A parsed value lies outside its legal range.
    #[error("{name} out of range: {reason}")]
    OutOfRange {
        /// The setting name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The dedicated rayon pool could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Engine runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Max number of tensors retained by the cache.
    pub cache_capacity: usize,
    /// Dedicated pool size; `None` uses the process-global rayon pool.
    pub threads: Option<usize>,
    /// Default steps per axis when a caller does not specify one.
    pub grid_resolution: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            threads: None,
            grid_resolution: DEFAULT_GRID_RESOLUTION,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    /// [`ConfigError`] for unparseable or out-of-range values; a typo in a
    /// variable should fail startup, not silently fall back.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            cache_capacity: parse_var("SURFACE_CACHE_CAPACITY")?.unwrap_or(DEFAULT_CACHE_CAPACITY),
            threads: parse_var("SURFACE_THREADS")?,
            grid_resolution: parse_var("SURFACE_GRID_RESOLUTION")?
                .unwrap_or(DEFAULT_GRID_RESOLUTION),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants on an assembled configuration.
    ///
    /// # Errors
    /// [`ConfigError::OutOfRange`] naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_capacity == 0 {
            return Err(ConfigError::OutOfRange {
                name: "cache_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.grid_resolution < 2 {
            return Err(ConfigError::OutOfRange {
                name: "grid_resolution",
                reason: format!("{} steps cannot define an axis", self.grid_resolution),
            });
        }
        if self.threads == Some(0) {
            return Err(ConfigError::OutOfRange {
                name: "threads",
                reason: "a dedicated pool needs at least 1 thread".to_string(),
            });
        }
        Ok(())
    }

    /// The parallelism this configuration will actually run with.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}

fn parse_var(name: &'static str) -> Result<Option<usize>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value: raw }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.cache_capacity, 16);
        assert_eq!(config.threads, None);
        assert_eq!(config.grid_resolution, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let config = EngineConfig {
            cache_capacity: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "cache_capacity",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_degenerate_resolution() {
        let config = EngineConfig {
            grid_resolution: 1,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_threads() {
        let config = EngineConfig {
            threads: Some(0),
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { name: "threads", .. })
        ));
    }

    #[test]
    fn test_effective_threads_prefers_explicit() {
        let config = EngineConfig {
            threads: Some(3),
            ..EngineConfig::default()
        };
        assert_eq!(config.effective_threads(), 3);

        let config = EngineConfig::default();
        assert!(config.effective_threads() >= 1);
    }

    // Environment-variable parsing is deliberately tested without touching
    // the process environment (tests in this crate run concurrently).
    #[test]
    fn test_parse_var_unset_is_none() {
        assert!(matches!(parse_var("SURFACE_TEST_UNSET_VAR"), Ok(None)));
    }
}
