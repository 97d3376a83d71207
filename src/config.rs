// config.rs
use std::env;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Key baked in at build time, used when the environment does not override it.
const BUILD_GEOAPIFY_KEY: Option<&str> = option_env!("GEOAPIFY_KEY");

const DATA_DIR_VAR: &str = "REAL_ESTATE_DATA_DIR";
const GEOAPIFY_KEY_VAR: &str = "GEOAPIFY_KEY";
const GOOGLE_MAPS_KEY_VAR: &str = "GOOGLE_MAPS_KEY";

/// Where the application keeps its files. Handed to the store initializer the
/// way a platform context would be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    data_dir: PathBuf,
}

impl AppContext {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a database file living in the data directory.
    pub fn database_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub geoapify_key: String,
    pub google_maps_key: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(DATA_DIR_VAR) {
            Some(dir) if dir.trim().is_empty() => {
                return Err(ConfigError::InvalidVar {
                    name: DATA_DIR_VAR,
                    reason: "must not be empty".into(),
                })
            }
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from("."),
        };

        let geoapify_key = lookup(GEOAPIFY_KEY_VAR)
            .filter(|k| !k.is_empty())
            .or_else(|| BUILD_GEOAPIFY_KEY.map(str::to_string))
            .unwrap_or_default();

        let google_maps_key = lookup(GOOGLE_MAPS_KEY_VAR).filter(|k| !k.is_empty());

        Ok(Self {
            data_dir,
            geoapify_key,
            google_maps_key,
        })
    }

    pub fn context(&self) -> AppContext {
        AppContext::new(self.data_dir.clone())
    }
}
