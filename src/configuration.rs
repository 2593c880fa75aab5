use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::fishbowl_client::{SubscriptionClient, FISHBOWL_API_BASE_URL};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub fishbowl: FishbowlSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FishbowlSettings {
    pub base_url: String,
}

impl Default for FishbowlSettings {
    fn default() -> Self {
        Self {
            base_url: FISHBOWL_API_BASE_URL.to_string(),
        }
    }
}

impl FishbowlSettings {
    pub fn client(&self) -> Result<SubscriptionClient, anyhow::Error> {
        SubscriptionClient::new(&self.base_url)
    }
}

/// Reads `configuration.yaml`, then `APP_`-prefixed environment variables,
/// e.g. `APP_APPLICATION__PORT=8080` or `APP_FISHBOWL__BASE_URL=...`.
pub fn get_config() -> Result<Settings, config::ConfigError> {
    Config::builder()
        .add_source(File::new("configuration.yaml", FileFormat::Yaml))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
