//! Configuration types for assort.
//!
//! [`Config::load`] reads `~/.config/assort/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::numeric::AmountPolicy;
use crate::schema::FieldSchema;
use crate::types::ContentType;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalize]
amount_policy     = "strict"
decimal_precision = 2

[json]
on_malformed = "empty"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/assort/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub json: JsonConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
}

/// `[normalize]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub amount_policy: AmountPolicy,
    #[serde(default = "default_decimal_precision")]
    pub decimal_precision: u32,
}

fn default_decimal_precision() -> u32 { 2 }

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            amount_policy: AmountPolicy::default(),
            decimal_precision: default_decimal_precision(),
        }
    }
}

/// What the JSON parser does with a payload it cannot decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedJson {
    /// Yield zero records, as the legacy endpoint did.
    #[default]
    Empty,
    /// Surface a [`ParseError`](crate::ParseError).
    Error,
}

/// `[json]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonConfig {
    #[serde(default)]
    pub on_malformed: MalformedJson,
    /// When set, the payload is an object and the records array lives under
    /// this key (e.g. `{"data": [...]}`).
    #[serde(default)]
    pub envelope_key: Option<String>,
}

/// Optional `[schema.csv]` / `[schema.json]` overrides. Each table must name
/// every field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaConfig {
    #[serde(default)]
    pub csv: Option<FieldSchema>,
    #[serde(default)]
    pub json: Option<FieldSchema>,
}

impl SchemaConfig {
    /// The configured schema for `content_type`, or the built-in one.
    pub fn resolve(&self, content_type: ContentType) -> &FieldSchema {
        let configured = match content_type {
            ContentType::Csv => self.csv.as_ref(),
            ContentType::Json => self.json.as_ref(),
        };
        configured.unwrap_or_else(|| FieldSchema::builtin(content_type))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/assort/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit file layered on top of the built-in defaults. The file
    /// must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("assort")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
