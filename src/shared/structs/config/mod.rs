use serde::{Deserialize, Serialize};

use crate::shared::DISCORD_ROOT_ENDPOINT;
use crate::shared::error::ConfigurationError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub server_bind_point: String,
    pub log_level: String,
    pub application_public_key: String,
    pub application_id: String,
    pub discord_root_endpoint: String,
    pub command_endpoint: String,
    pub invocation_secret: String,
    pub roll_endpoint: String,
    pub emojify_endpoint: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            server_bind_point: "0.0.0.0:80".into(),
            log_level: "DEBUG".into(),
            application_public_key: String::new(),
            application_id: String::new(),
            discord_root_endpoint: DISCORD_ROOT_ENDPOINT.into(),
            command_endpoint: "http://localhost:80/api/discord/command".into(),
            invocation_secret: String::new(),
            roll_endpoint: String::new(),
            emojify_endpoint: String::new(),
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration file, writing a default template first if none exists,
    /// then applies environment overrides and validates the result.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_from_config_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_config_file() -> anyhow::Result<Self> {
        let config_directory_path = std::env::var("CONFIG_DIRECTORY")?;
        let config_directory = std::path::Path::new(&config_directory_path);
        if !config_directory.exists() {
            std::fs::create_dir_all(&config_directory_path)?;
        }

        let config_file_name = std::env::var("CONFIG_FILE_NAME")?;
        let configuration_path = config_directory.join(&config_file_name);
        if !configuration_path.exists() {
            let new_config = Configuration::new();
            let serialized = toml::to_string_pretty(&new_config)?;
            std::fs::write(configuration_path, serialized)?;
            Ok(new_config)
        } else {
            let raw_config = std::fs::read_to_string(configuration_path)?;
            Self::from_toml(&raw_config)
        }
    }

    pub fn from_toml(raw_config: &str) -> anyhow::Result<Self> {
        let deserialized: Configuration = toml::from_str(raw_config)?;
        Ok(deserialized)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides: [(&str, &mut String); 6] = [
            ("APPLICATION_PUBLIC_KEY", &mut self.application_public_key),
            ("DISCORD_APPLICATION_ID", &mut self.application_id),
            ("COMMAND_ENDPOINT", &mut self.command_endpoint),
            ("INVOCATION_SECRET", &mut self.invocation_secret),
            ("ROLL_ENDPOINT", &mut self.roll_endpoint),
            ("EMOJIFY_ENDPOINT", &mut self.emojify_endpoint),
        ];

        for (key, field) in overrides {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *field = value;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let required = [
            ("server_bind_point", &self.server_bind_point),
            ("application_public_key", &self.application_public_key),
            ("application_id", &self.application_id),
            ("discord_root_endpoint", &self.discord_root_endpoint),
            ("command_endpoint", &self.command_endpoint),
            ("invocation_secret", &self.invocation_secret),
            ("roll_endpoint", &self.roll_endpoint),
            ("emojify_endpoint", &self.emojify_endpoint),
        ];

        match required
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            Some((name, _)) => Err(ConfigurationError::Missing(name)),
            None => Ok(()),
        }
    }
}
