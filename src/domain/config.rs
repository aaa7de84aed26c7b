use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for reading course catalogs.
///
/// This struct holds settings that control how lines of a catalog file are
/// split into courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The single character separating fields on a line.
    ///
    /// Defaults to a comma. Quoting and escaping are not supported.
    delimiter: char,

    /// Whether to trim whitespace around identifier and prerequisite fields.
    ///
    /// Titles are never trimmed.
    pub trim_fields: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            trim_fields: default_trim_fields(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the field delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Sets the field delimiter.
    pub const fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }
}

const fn default_delimiter() -> char {
    ','
}

const fn default_trim_fields() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_delimiter")]
        delimiter: char,

        #[serde(default = "default_trim_fields")]
        trim_fields: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                delimiter,
                trim_fields,
            } => Self {
                delimiter,
                trim_fields,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            delimiter: config.delimiter,
            trim_fields: config.trim_fields,
        }
    }
}
