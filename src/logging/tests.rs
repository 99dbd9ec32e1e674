// red-session: Process Session Environment
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_conversion() {
    let conversions: Vec<_> = [0u8, 3, 5, 6, 100]
        .into_iter()
        .map(|raw| (raw, LogLevel::from_u8(raw).map(LogLevel::to_filter_string)))
        .collect();

    insta::assert_debug_snapshot!(conversions, @r#"
    [
        (
            0,
            Some(
                "off",
            ),
        ),
        (
            3,
            Some(
                "info",
            ),
        ),
        (
            5,
            Some(
                "trace",
            ),
        ),
        (
            6,
            None,
        ),
        (
            100,
            None,
        ),
    ]
    "#);
}

#[test]
fn test_log_level_new_rejects_out_of_range() {
    let err = LogLevel::new(9).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 9"
    );
}

#[test]
fn test_log_level_tracing_mapping() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(
        LogLevel::ERROR.to_tracing_level(),
        Some(tracing::Level::ERROR)
    );
    assert_eq!(
        LogLevel::TRACE.to_tracing_level(),
        Some(tracing::Level::TRACE)
    );
    assert!(LogLevel::DEBUG > LogLevel::INFO);
    assert_eq!(u8::from(LogLevel::default()), 2);
}

#[test]
fn test_log_level_deserialize() {
    let level: LogLevel = serde_json::from_str("4").unwrap();
    assert_eq!(level, LogLevel::DEBUG);

    let err = serde_json::from_str::<LogLevel>("7").unwrap_err();
    assert!(err.to_string().contains("0-5"), "unexpected error: {err}");
}

#[test]
fn test_log_config_builder_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.log_file(), None);
    assert!(!config.json_file());
    assert!(!config.show_target());

    let config = LogConfig::builder()
        .with_console_level(LogLevel::TRACE)
        .with_log_file("logs/session.log".to_string())
        .with_json_file(true)
        .build();
    assert_eq!(config.console_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), Some("logs/session.log"));
    assert!(config.json_file());
}
