use std::collections::BTreeMap;

use anyhow::Result;
use config::Config;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::constants::DEFAULT_PHOTO_PATH;
use crate::error::{CoreError, CoreResult};
use crate::types::{Permissions, Profile, VocabularyType};

/// JSON-encoded data attributes of the embedding page's root element.
///
/// The host application serializes the initial state into data attributes;
/// this is the explicit hand-off point between the outer page and this layer.
#[derive(Debug, Clone, Default)]
pub struct Dataset(BTreeMap<String, String>);

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute to a raw JSON string.
    pub fn insert(&mut self, attribute: &str, raw_json: impl Into<String>) {
        self.0.insert(attribute.to_string(), raw_json.into());
    }

    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Dataset {
    fn from(entries: [(&str, &str); N]) -> Self {
        let mut dataset = Self::new();
        for (attribute, raw) in entries {
            dataset.insert(attribute, raw);
        }
        dataset
    }
}

/// Parses an optional JSON attribute; an absent attribute yields the default,
/// a present but malformed one is an error.
fn optional_json<T: DeserializeOwned + Default>(
    dataset: &Dataset,
    attribute: &'static str,
) -> CoreResult<T> {
    match dataset.get(attribute) {
        Some(raw) => {
            serde_json::from_str(raw).map_err(|source| CoreError::MalformedAttribute {
                attribute,
                source,
            })
        }
        None => Ok(T::default()),
    }
}

/// Configuration read once at page load from the embedding page.
///
/// ## Defaults
/// - `profile`: empty record
/// - `has_photo` / `has_cv`: false
/// - `photo_max_size`: 0
/// - `permissions`: everything denied
/// - `types`: empty vocabulary
/// - `default_photo`: the square placeholder image
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    pub profile: Profile,
    pub has_photo: bool,
    pub has_cv: bool,
    pub photo_max_size: u64,
    pub permissions: Permissions,
    pub types: Vec<VocabularyType>,
    pub default_photo: String,
}

impl PageConfig {
    /// Builds the page configuration from the root element's data attributes.
    ///
    /// ## Errors
    /// Returns an error if any present attribute holds malformed JSON.
    pub fn from_dataset(dataset: &Dataset) -> CoreResult<Self> {
        Ok(Self {
            profile: optional_json(dataset, "faculty-profile")?,
            has_photo: optional_json(dataset, "has-photo")?,
            has_cv: optional_json(dataset, "has-cv")?,
            photo_max_size: optional_json(dataset, "photo-max-size")?,
            permissions: optional_json(dataset, "permissions")?,
            types: optional_json(dataset, "types")?,
            default_photo: DEFAULT_PHOTO_PATH.to_string(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("api.origin", "http://127.0.0.1:5000")?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
