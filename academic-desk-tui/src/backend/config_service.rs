//! 配置服务
//!
//! 配置文件位于 `~/.config/academic-desk/config.json`，所有字段都可省略：
//!
//! ```json
//! {
//!   "language": "pt-BR",
//!   "theme": "light",
//!   "operationTimeoutSecs": 5,
//!   "dataDir": "/home/prof/academic-desk",
//!   "logLevel": "debug"
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::command::DEFAULT_TIMEOUT;
use crate::i18n::Language;
use crate::view::theme::Theme;

/// 应用目录名
const APP_DIR: &str = "academic-desk";
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub language: String,
    pub theme: String,
    /// 每个后台操作的超时（秒）
    pub operation_timeout_secs: u64,
    /// 数据目录，未设置时使用系统数据目录
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            theme: "dark".to_string(),
            operation_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            data_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 界面语言；无法识别的代码回退到英语
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme)
    }

    /// 操作超时，至少 1 秒
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs.max(1))
    }

    /// 数据目录
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// JSON 文件配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用系统配置目录
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::at(dir.join(CONFIG_FILE))
    }

    /// 使用指定的配置文件
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn parse_error(&self, source: serde_json::Error) -> ConfigError {
        ConfigError::Parse {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::debug!("no config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|e| self.parse_error(e))
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(config).map_err(|e| self.parse_error(e))?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}
