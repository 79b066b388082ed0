pub mod config_loader;
pub mod log_config;

pub use config_loader::{
    AbsoluteTimeDisplay, ConfigLoader, DisplayConfig, FtypesConfig, IntegerBase, LoggingConfig,
};
pub use log_config::{init_logging, LogLevel, UnifiedLogFormatter};
