use std::io::Write;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Info,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Error => LogLevel::Error,
        }
    }
}

/// `[時刻] [レベル] [ターゲット] メッセージ` 形式の整形
#[derive(Debug, Clone, Copy)]
pub struct UnifiedLogFormatter {
    include_timestamps: bool,
    color_enabled: bool,
}

impl UnifiedLogFormatter {
    pub fn new() -> Self {
        Self {
            include_timestamps: true,
            color_enabled: true,
        }
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.include_timestamps = enabled;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    pub fn format(
        &self,
        timestamp: DateTime<Local>,
        level: LogLevel,
        target: &str,
        message: &str,
    ) -> String {
        let mut parts = Vec::new();
        if self.include_timestamps {
            parts.push(format!("[{}]", timestamp.format("%Y-%m-%d %H:%M:%S%.3f")));
        }
        let level_str = if self.color_enabled {
            let color = match level {
                LogLevel::Trace => "37",
                LogLevel::Debug => "36",
                LogLevel::Info => "32",
                LogLevel::Warn => "33",
                LogLevel::Error => "31",
            };
            format!("\x1b[{}m{}\x1b[0m", color, level.as_str())
        } else {
            level.as_str().to_string()
        };
        parts.push(format!("[{}]", level_str));
        parts.push(format!("[{}]", target));
        parts.push(message.to_string());
        parts.join(" ")
    }
}

impl Default for UnifiedLogFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// env_logger をこの整形で初期化する
///
/// `RUST_LOG` が設定されていればそちらが優先される。二度目以降の呼び出しは何もしない。
pub fn init_logging(level: LogLevel, colors: bool) {
    let formatter = UnifiedLogFormatter::new().with_colors(colors);
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.to_level_filter());
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format(move |buf, record| {
        let line = formatter.format(
            Local::now(),
            LogLevel::from(record.level()),
            record.target(),
            &record.args().to_string(),
        );
        writeln!(buf, "{}", line)
    });
    // 既にロガーが設定済みなら Err になるだけ
    let _ = builder.try_init();
}
