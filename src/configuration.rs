use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::GreetingVariant;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub greeting: GreetingSettings,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct GreetingSettings {
    #[serde(default)]
    pub variant: GreetingVariant,
}

#[derive(Debug)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Could not determine the current directory.")]
    CurrentDirectory(#[source] std::io::Error),
    #[error("Failed to parse APP_ENVIRONMENT: {0}")]
    UnknownEnvironment(String),
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

pub fn get_configuration() -> Result<Settings, ConfigurationError> {
    let base_path = std::env::current_dir()
        .map_err(ConfigurationError::CurrentDirectory)?;
    let configuration_directory = base_path.join("configuration");
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigurationError::UnknownEnvironment)?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename.as_str()),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    Ok(settings.try_deserialize::<Settings>()?)
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "local" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "release" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                    Use 'development' or 'production'.",
                other
            )),
        }
    }
}
