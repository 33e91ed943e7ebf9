use super::data::{Config, ResponderOverrides};
use super::io::ConfigError;
use crate::core::responder::ResponderKind;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        endpoint: Some("https://hooks.example.com/insights".to_string()),
        responder: Some(ResponderKind::Webhook),
        simulated_delay_ms: Some(250),
        log_level: None,
    };
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let mut config = loaded;
    config.endpoint = None;
    config
        .save_to_path(&config_path)
        .expect("Failed to save modified config");
    let loaded = Config::load_from_path(&config_path).expect("Failed to load modified config");
    assert_eq!(loaded.endpoint, None);
    assert_eq!(loaded.responder, Some(ResponderKind::Webhook));
}

#[test]
fn test_responder_kind_is_lowercase_in_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "responder = \"simulated\"\n").unwrap();

    let config = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(config.responder, Some(ResponderKind::Simulated));
}

#[test]
fn test_invalid_toml_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "responder = [unterminated").unwrap();

    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config at"));
}

#[test]
fn test_resolve_defaults_to_simulated_without_endpoint() {
    let settings = Config::default().resolve_responder(ResponderOverrides::default());
    assert_eq!(settings.kind, ResponderKind::Simulated);
    assert_eq!(settings.endpoint, None);
    assert_eq!(settings.simulated_delay, Duration::from_millis(1500));
}

#[test]
fn test_resolve_endpoint_precedence() {
    let config = Config {
        endpoint: Some("https://file.example.com".to_string()),
        simulated_delay_ms: Some(750),
        ..Default::default()
    };

    let from_file = config.resolve_responder(ResponderOverrides::default());
    assert_eq!(from_file.kind, ResponderKind::Webhook);
    assert_eq!(from_file.endpoint.as_deref(), Some("https://file.example.com"));
    assert_eq!(from_file.simulated_delay, Duration::from_millis(750));

    let from_env = config.resolve_responder(ResponderOverrides {
        env_endpoint: Some("https://env.example.com".to_string()),
        ..Default::default()
    });
    assert_eq!(from_env.endpoint.as_deref(), Some("https://env.example.com"));

    let from_cli = config.resolve_responder(ResponderOverrides {
        cli_endpoint: Some("https://cli.example.com".to_string()),
        env_endpoint: Some("https://env.example.com".to_string()),
        ..Default::default()
    });
    assert_eq!(from_cli.endpoint.as_deref(), Some("https://cli.example.com"));
}

#[test]
fn test_explicit_kind_wins_over_endpoint_presence() {
    let config = Config {
        endpoint: Some("https://file.example.com".to_string()),
        responder: Some(ResponderKind::Simulated),
        ..Default::default()
    };
    assert_eq!(
        config
            .resolve_responder(ResponderOverrides::default())
            .kind,
        ResponderKind::Simulated
    );

    let settings = Config::default().resolve_responder(ResponderOverrides {
        cli_kind: Some(ResponderKind::Webhook),
        ..Default::default()
    });
    assert_eq!(settings.kind, ResponderKind::Webhook);
    assert_eq!(settings.endpoint, None);
}

#[test]
fn test_blank_endpoint_counts_as_unset() {
    let config = Config {
        endpoint: Some("   ".to_string()),
        ..Default::default()
    };
    let settings = config.resolve_responder(ResponderOverrides::default());
    assert_eq!(settings.endpoint, None);
    assert_eq!(settings.kind, ResponderKind::Simulated);
}

#[test]
fn test_simulated_delay_has_a_floor() {
    let cases = [
        (Some(0), 500),
        (Some(499), 500),
        (Some(500), 500),
        (None, 1500),
    ];
    for (configured, expected) in cases {
        let config = Config {
            simulated_delay_ms: configured,
            ..Default::default()
        };
        let settings = config.resolve_responder(ResponderOverrides::default());
        assert_eq!(
            settings.simulated_delay,
            Duration::from_millis(expected),
            "configured={configured:?}"
        );
    }
}
