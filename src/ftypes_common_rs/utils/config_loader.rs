use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::log_config::LogLevel;
use crate::ftypes_common_rs::ftypes::core::kind::FieldDisplay;

/// 整数の表示基数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerBase {
    #[default]
    Dec,
    Hex,
    DecHex,
    HexDec,
}

impl IntegerBase {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "dec" => Ok(IntegerBase::Dec),
            "hex" => Ok(IntegerBase::Hex),
            "dec_hex" => Ok(IntegerBase::DecHex),
            "hex_dec" => Ok(IntegerBase::HexDec),
            _ => Err(format!(
                "Invalid integer base: {}. Must be one of: dec, hex, dec_hex, hex_dec",
                s
            )),
        }
    }
}

/// 絶対時刻の表示モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsoluteTimeDisplay {
    #[default]
    Local,
    Utc,
    DoyUtc,
}

impl AbsoluteTimeDisplay {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AbsoluteTimeDisplay::Local),
            "utc" => Ok(AbsoluteTimeDisplay::Utc),
            "doy_utc" => Ok(AbsoluteTimeDisplay::DoyUtc),
            _ => Err(format!(
                "Invalid absolute time display: {}. Must be one of: local, utc, doy_utc",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub integer_base: IntegerBase,
    pub absolute_time: AbsoluteTimeDisplay,
}

impl DisplayConfig {
    pub fn integer_display(&self) -> FieldDisplay {
        match self.integer_base {
            IntegerBase::Dec => FieldDisplay::Dec,
            IntegerBase::Hex => FieldDisplay::Hex,
            IntegerBase::DecHex => FieldDisplay::DecHex,
            IntegerBase::HexDec => FieldDisplay::HexDec,
        }
    }

    pub fn time_display(&self) -> FieldDisplay {
        match self.absolute_time {
            AbsoluteTimeDisplay::Local => FieldDisplay::AbsoluteLocal,
            AbsoluteTimeDisplay::Utc => FieldDisplay::AbsoluteUtc,
            AbsoluteTimeDisplay::DoyUtc => FieldDisplay::AbsoluteDoyUtc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub colors: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            colors: true,
        }
    }
}

impl LoggingConfig {
    /// 検証済みの設定なら失敗しない
    pub fn log_level(&self) -> Result<LogLevel, String> {
        LogLevel::from_str(&self.level)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FtypesConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_paths: vec![
                PathBuf::from("ftypes.config.toml"),
                PathBuf::from("ftypes.config.json"),
                PathBuf::from("config.toml"),
                PathBuf::from("config.json"),
            ],
            env_prefix: "FTYPES_".into(),
        }
    }

    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            env_prefix: "FTYPES_".into(),
        }
    }

    pub fn with_env_prefix(mut self, prefix: String) -> Self {
        self.env_prefix = prefix;
        self
    }

    /// 最初に見つかった設定ファイルを読み、環境変数で上書きして検証する
    pub fn load(&self) -> Result<FtypesConfig, String> {
        let mut config = FtypesConfig::default();
        for path in &self.config_paths {
            if !path.exists() {
                continue;
            }
            match self.load_from_file(path) {
                Ok(file_config) => {
                    debug!("loaded config from {:?}", path);
                    config = file_config;
                    break;
                }
                Err(e) => warn!("Failed to load config from {:?}: {}", path, e),
            }
        }
        config = self.apply_env_overrides(config)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    pub fn load_from_file(&self, path: &Path) -> Result<FtypesConfig, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| format!("Failed to parse JSON config: {}", e)),
            Some("toml") => {
                toml::from_str(&content).map_err(|e| format!("Failed to parse TOML config: {}", e))
            }
            _ => Err("Unsupported config file format".into()),
        }
    }

    fn apply_env_overrides(&self, mut config: FtypesConfig) -> Result<FtypesConfig, String> {
        if let Ok(base) = env::var(format!("{}INTEGER_BASE", self.env_prefix)) {
            config.display.integer_base = IntegerBase::from_str(&base)?;
        }
        if let Ok(mode) = env::var(format!("{}ABSOLUTE_TIME", self.env_prefix)) {
            config.display.absolute_time = AbsoluteTimeDisplay::from_str(&mode)?;
        }
        if let Ok(level) = env::var(format!("{}LOG_LEVEL", self.env_prefix)) {
            config.logging.level = level;
        }
        if let Ok(colors) = env::var(format!("{}LOG_COLORS", self.env_prefix)) {
            config.logging.colors = colors
                .parse()
                .map_err(|_| "Invalid log colors flag in environment variable")?;
        }
        Ok(config)
    }

    pub fn validate_config(&self, config: &FtypesConfig) -> Result<(), String> {
        match config.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err("Invalid log level. Must be one of: trace, debug, info, warn, error".into()),
        }
    }

    pub fn save_config(&self, config: &FtypesConfig, path: &Path) -> Result<(), String> {
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(config)
                .map_err(|e| format!("Failed to serialize config to JSON: {}", e))?,
            Some("toml") => toml::to_string_pretty(config)
                .map_err(|e| format!("Failed to serialize config to TOML: {}", e))?,
            _ => return Err("Unsupported config file format for saving".into()),
        };
        fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
