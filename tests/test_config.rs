use std::fs;

use ftypes_rust::ftypes_common_rs::utils::{
    AbsoluteTimeDisplay, ConfigLoader, FtypesConfig, IntegerBase, LogLevel,
};
use ftypes_rust::prelude::*;
use tempfile::TempDir;

#[test]
fn test_toml_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ftypes.config.toml");
    fs::write(
        &path,
        r#"
[display]
integer_base = "hex"
absolute_time = "doy_utc"

[logging]
level = "debug"
colors = false
"#,
    )
    .unwrap();

    let config = ConfigLoader::with_paths(vec![path])
        .with_env_prefix("FTYPES_IT_TOML_".into())
        .load()
        .unwrap();
    assert_eq!(config.display.integer_base, IntegerBase::Hex);
    assert_eq!(config.display.absolute_time, AbsoluteTimeDisplay::DoyUtc);
    assert_eq!(config.logging.log_level().unwrap(), LogLevel::Debug);
    assert!(!config.logging.colors);
}

#[test]
fn test_first_existing_file_wins() {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("config.json");
    fs::write(&json, r#"{"display": {"integer_base": "dec_hex"}}"#).unwrap();
    let missing = dir.path().join("ftypes.config.toml");

    let config = ConfigLoader::with_paths(vec![missing, json])
        .with_env_prefix("FTYPES_IT_ORDER_".into())
        .load()
        .unwrap();
    assert_eq!(config.display.integer_base, IntegerBase::DecHex);
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display]\ninteger_base = \"dec\"\n").unwrap();

    std::env::set_var("FTYPES_IT_ENV_INTEGER_BASE", "hex_dec");
    std::env::set_var("FTYPES_IT_ENV_ABSOLUTE_TIME", "utc");
    std::env::set_var("FTYPES_IT_ENV_LOG_LEVEL", "WARN");
    std::env::set_var("FTYPES_IT_ENV_LOG_COLORS", "false");
    let config = ConfigLoader::with_paths(vec![path])
        .with_env_prefix("FTYPES_IT_ENV_".into())
        .load()
        .unwrap();

    assert_eq!(config.display.integer_display(), FieldDisplay::HexDec);
    assert_eq!(config.display.time_display(), FieldDisplay::AbsoluteUtc);
    assert_eq!(config.logging.log_level().unwrap(), LogLevel::Warn);
    assert!(!config.logging.colors);
}

#[test]
fn test_bad_environment_value_is_error() {
    std::env::set_var("FTYPES_IT_BAD_INTEGER_BASE", "base64");
    let result = ConfigLoader::with_paths(vec![])
        .with_env_prefix("FTYPES_IT_BAD_".into())
        .load();
    assert!(result.is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let mut config = FtypesConfig::default();
    config.display.integer_base = IntegerBase::Hex;
    config.display.absolute_time = AbsoluteTimeDisplay::Utc;
    config.logging.level = "trace".into();

    let loader = ConfigLoader::new().with_env_prefix("FTYPES_IT_SAVE_".into());
    for name in ["saved.toml", "saved.json"] {
        let path = dir.path().join(name);
        loader.save_config(&config, &path).unwrap();
        assert_eq!(loader.load_from_file(&path).unwrap(), config);
    }
    assert!(loader.save_config(&config, &dir.path().join("saved.yaml")).is_err());
}

#[test]
fn test_display_config_drives_formatting() {
    let mut config = FtypesConfig::default();
    config.display.integer_base = IntegerBase::Hex;
    config.display.absolute_time = AbsoluteTimeDisplay::DoyUtc;

    let port = FieldValue::from_literal(FieldKind::UInt16, "443").unwrap();
    assert_eq!(
        port.to_string_repr(ReprKind::Display, config.display.integer_display()).unwrap(),
        "0x01bb"
    );

    let when =
        FieldValue::from_storage(FieldKind::AbsoluteTime, Storage::Time(NsTime::new(86_400, 0)));
    assert_eq!(
        when.to_string_repr(ReprKind::Display, config.display.time_display()).unwrap(),
        "1970/002 00:00:00.000000000 UTC"
    );
}
