use crate::domain::stream::StreamConfig;
use crate::presentation::form_session::DEFAULT_SETTLE_MS;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CATALOG_PATH: &str = "data/boards.json";
const ENV_PREFIX: &str = "SIZING";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub scenario: StreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_CATALOG_PATH.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
}

impl OutputSettings {
    pub fn settle_interval(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

fn default_settle_ms() -> u64 {
    DEFAULT_SETTLE_MS
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// `config/sizing.*` (optional) overlaid by `SIZING__SECTION__KEY` variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/sizing").required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn parse_app_config(toml: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stream::{Codec, Quality};

    #[test]
    fn test_defaults_when_empty() {
        let config = parse_app_config("").unwrap();
        assert_eq!(config.catalog.path, "data/boards.json");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.settle_interval(), Duration::from_millis(300));
        assert_eq!(config.scenario, StreamConfig::default());
    }

    #[test]
    fn test_parse_scenario() {
        let config = parse_app_config(
            r#"
            [catalog]
            path = "data/boards.toml"

            [output]
            format = "json"

            [scenario]
            board_id = "rock-5b"
            resolution = "3840x2160"
            codec = "H264"
            quality = "high"
            camera_count = 6
            record_hours = 12
            storage_days_retained = 14
            additional_storage_gb = 512
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.path, "data/boards.toml");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.settle_ms, 300);

        let scenario = config.scenario;
        assert_eq!(scenario.board_id, "rock-5b");
        assert_eq!(scenario.resolution, "3840x2160");
        assert_eq!(scenario.codec, Codec::H264);
        assert_eq!(scenario.quality, Quality::High);
        assert_eq!(scenario.camera_count, 6);
        assert_eq!(scenario.record_hours, 12.0);
        assert_eq!(scenario.storage_days_retained, 14);
        assert_eq!(scenario.additional_storage_gb, 512.0);
        // unspecified fields keep the form defaults
        assert_eq!(scenario.fps, 30.0);
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = r#"
            [output]
            format = "text"

            [scenario]
            board_id = "rock-5b"
            camera_count = 2
        "#;
        let vars = [
            ("SIZING__SCENARIO__CAMERA_COUNT", "6"),
            ("SIZING__OUTPUT__FORMAT", "json"),
            ("OTHER__SCENARIO__FPS", "5"),
        ];

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(file, config::FileFormat::Toml))
            .add_source(environment().source(Some(
                vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            )))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.scenario.camera_count, 6);
        assert_eq!(config.scenario.board_id, "rock-5b");
        // unprefixed variables are ignored
        assert_eq!(config.scenario.fps, 30.0);
    }

    #[test]
    fn test_unknown_codec_rejected() {
        let result = parse_app_config(
            r#"
            [scenario]
            codec = "AV1"
            "#,
        );
        assert!(result.is_err());
    }
}
