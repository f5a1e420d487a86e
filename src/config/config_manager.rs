use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::default_config_path;
use crate::enums::config_source::ConfigSource;
use crate::enums::screen_kind::ScreenKind;
use crate::errors::{DashboardError, DashboardResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads the config from `path`, or from the default location when no
    /// path is given. A missing default file is not an error; defaults are
    /// used. Nothing is logged here: callers set up logging from the result.
    pub fn load(path: Option<&Path>) -> DashboardResult<Config> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    pub fn load_with_source(path: Option<&Path>) -> DashboardResult<(Config, ConfigSource)> {
        let config_path = path.map_or_else(default_config_path, Path::to_path_buf);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .map_err(|e| DashboardError::file_error(&config_path.display().to_string(), &e.to_string()))?;
            let config: Config = toml::from_str(&content)?;
            return Ok((config, ConfigSource::File(config_path)));
        }

        if path.is_some() {
            return Err(DashboardError::file_error(
                &config_path.display().to_string(),
                "file does not exist",
            ));
        }

        Ok((Config::default(), ConfigSource::Defaults(config_path)))
    }

    pub fn save(config: &Config, path: &Path) -> DashboardResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(config)?)?;
        Ok(())
    }

    /// Every endpoint must be an absolute http(s) URL.
    pub fn validate_config(config: &Config) -> DashboardResult<()> {
        for screen in ScreenKind::ALL {
            let raw = config.endpoints.url_for(screen);
            let field = format!("endpoints.{}", screen.tab_label().to_lowercase());

            let url = Url::parse(raw).map_err(|e| {
                DashboardError::config_error(
                    &format!("'{}' is not an absolute URL: {}", raw, e),
                    Some(&field),
                    Some("use a full URL such as https://host/path.json"),
                )
            })?;

            if !matches!(url.scheme(), "http" | "https") {
                return Err(DashboardError::config_error(
                    &format!("unsupported scheme '{}'", url.scheme()),
                    Some(&field),
                    Some("only http and https endpoints can be fetched"),
                ));
            }
        }

        if config.display.chart_height == 0 {
            return Err(DashboardError::config_error(
                "chart height must be positive",
                Some("display.chart_height"),
                None,
            ));
        }

        Ok(())
    }

    pub fn create_sample_config(path: Option<&Path>) -> DashboardResult<PathBuf> {
        let config_path = path.map_or_else(default_config_path, Path::to_path_buf);
        if config_path.exists() {
            return Err(DashboardError::file_error(
                &config_path.display().to_string(),
                "a configuration file already exists",
            ));
        }

        let defaults = Config::default();
        let sample_config = format!(
            r#"# Usage Dashboard configuration

# Each tab fetches one JSON payload, once, when it is first shown.
[endpoints]
daily = "{daily}"
weekly = "{weekly}"
category = "{category}"
features = "{features}"

[display]
# Nominal chart height, scaled down to terminal rows
chart_height = {height}
# Charts use the terminal width minus this margin
width_margin = {margin}
# Width used when stdout is not a terminal
fallback_width = {fallback}

[logging]
# Overridden by RUST_LOG when set
level = "{level}"
"#,
            daily = defaults.endpoints.daily,
            weekly = defaults.endpoints.weekly,
            category = defaults.endpoints.category,
            features = defaults.endpoints.features,
            height = defaults.display.chart_height,
            margin = defaults.display.width_margin,
            fallback = defaults.display.fallback_width,
            level = defaults.logging.level,
        );

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, sample_config)?;
        log::info!("📝 Sample configuration written to {}", config_path.display());

        Ok(config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = ConfigManager::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(DashboardError::ConfigurationFileError { .. })));
    }

    #[test]
    fn sample_config_round_trips_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = ConfigManager::create_sample_config(Some(&path)).unwrap();
        let loaded = ConfigManager::load(Some(&written)).unwrap();

        assert_eq!(loaded, Config::default());
        ConfigManager::validate_config(&loaded).unwrap();
    }

    #[test]
    fn load_reports_the_file_it_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let (config, source) = ConfigManager::load_with_source(Some(&path)).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(source, ConfigSource::File(path));
    }

    #[test]
    fn sample_config_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert!(ConfigManager::create_sample_config(Some(&path)).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[endpoints]\ndaily = \"http://localhost:9000/daily.json\"\n").unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();

        assert_eq!(config.endpoints.daily, "http://localhost:9000/daily.json");
        assert_eq!(config.endpoints.weekly, Config::default().endpoints.weekly);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.display.width_margin = 4;

        ConfigManager::save(&config, &path).unwrap();

        assert_eq!(ConfigManager::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let mut config = Config::default();
        config.endpoints.category = "socialmedia.json".to_string();

        let error = ConfigManager::validate_config(&config).unwrap_err();
        assert!(error.user_message().contains("endpoints.category"));
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let mut config = Config::default();
        config.endpoints.features = "ftp://example.com/progress".to_string();

        assert!(ConfigManager::validate_config(&config).is_err());
    }
}
