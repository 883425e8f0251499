/// ユーザー設定モジュール
///
/// 実行時にユーザーディレクトリから読み込まれる動的設定を管理します。
/// Windows: C:\Users\<User>\AppData\Roaming\upform\config.toml
/// macOS:   /Users/<User>/Library/Application Support/upform/config.toml
/// Linux:   /home/<user>/.config/upform/config.toml
///
/// 初回起動時にテンプレートから自動的にconfig.tomlを作成します。
use crate::config::app::{APP_CONFIG, LOG_LEVELS};
use crate::config::error::ConfigError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// ユーザー設定
///
/// どちらの項目も省略可能で、省略時は APP_CONFIG の値を使う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// 送信先のベースURL（例: "https://files.example.com"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// ログレベル（trace, debug, info, warn, error）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl UserConfig {
    /// ユーザー設定ファイルのパスを取得
    ///
    /// # Errors
    /// 設定ディレクトリが取得できない場合に ConfigError::DirectoryNotFound を返します。
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .ok_or_else(|| ConfigError::directory_not_found("Failed to get user config directory"))
            .map(|config_dir| config_dir.join("upform").join("config.toml"))
    }

    /// 既定の場所からユーザー設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定したパスからユーザー設定を読み込む
    ///
    /// ファイルが存在しない場合はテンプレートを書き出してから読み込みます。
    /// 読み込み後に検証を行います（Fail Fast）。
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to read config file: {}", config_path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_error(
                format!("Failed to parse config file ({})", config_path.display()),
                e,
            )
        })?;

        config.validate()?;

        Ok(config)
    }

    fn create_default_config(config_path: &Path) -> Result<(), ConfigError> {
        Self::ensure_parent_dir(config_path)?;

        fs::write(config_path, Self::default_toml_content()).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to create default config file: {}", config_path.display()),
                e,
            )
        })
    }

    fn ensure_parent_dir(config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::file_system(
                    format!("Failed to create config directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// テンプレート。既定値はコメントとして残し、値はすべて APP_CONFIG に任せる
    fn default_toml_content() -> String {
        format!(
            r#"# upform - User Configuration

# Base URL of the upload server (files are POSTed to <endpoint>{})
# endpoint = "{}"

# Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
# log_level = "{}"
"#,
            APP_CONFIG.api.upload_path, APP_CONFIG.api.endpoint, APP_CONFIG.logging.level
        )
    }

    /// ユーザー設定を検証
    ///
    /// # 検証内容
    /// - endpoint: http/https の絶対URL
    /// - log_level: LOG_LEVELS のいずれか
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.endpoint {
            validate_endpoint(endpoint)?;
        }

        if let Some(level) = &self.log_level
            && !LOG_LEVELS.contains(&level.as_str())
        {
            return Err(ConfigError::validation_error(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// 送信先のベースURL
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(APP_CONFIG.api.endpoint)
    }

    /// ログレベル
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(APP_CONFIG.logging.level)
    }
}

/// 送信先URLを検証する（--endpoint でも使う）
pub fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let url = Url::parse(endpoint).map_err(|e| {
        ConfigError::validation_error(format!("Invalid endpoint '{}': {}", endpoint, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::validation_error(format!(
            "Invalid endpoint '{}': unsupported scheme '{}'",
            endpoint, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let path = UserConfig::config_path().expect("Failed to get config path");
        assert!(path.to_string_lossy().contains("upform"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_load_creates_default_if_not_exists() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = dir.path().join("upform").join("config.toml");

        let config = UserConfig::load_from(&config_path).expect("default config should load");

        assert!(config_path.exists(), "Config file should be created");
        assert_eq!(config, UserConfig::default());
        assert_eq!(config.endpoint(), APP_CONFIG.api.endpoint);
        assert_eq!(config.log_level(), "info");

        let content = fs::read_to_string(&config_path).expect("Failed to read config");
        assert!(content.contains("endpoint"));
        assert!(content.contains("log_level"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = dir.path().join("config.toml");

        let config = UserConfig {
            endpoint: Some("https://files.example.com".to_string()),
            log_level: Some("debug".to_string()),
        };
        let content = toml::to_string_pretty(&config).expect("Failed to serialize config");
        fs::write(&config_path, content).expect("Failed to write config");

        let loaded = UserConfig::load_from(&config_path).expect("Failed to load config");
        assert_eq!(loaded, config);
        assert_eq!(loaded.endpoint(), "https://files.example.com");
    }

    #[test]
    fn test_load_rejects_broken_toml() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "endpoint = ").unwrap();

        let result = UserConfig::load_from(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = UserConfig {
            endpoint: Some("not a url".to_string()),
            log_level: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));

        assert!(validate_endpoint("ftp://files.example.com").is_err());
        assert!(validate_endpoint("http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = UserConfig {
            endpoint: None,
            log_level: Some("verbose".to_string()),
        };

        match config.validate() {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("verbose"))
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
