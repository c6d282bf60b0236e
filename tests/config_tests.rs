//! Integration tests for configuration management

use seatplan::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.out_dir.is_empty(),
        "Default out_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
out_dir = "./exports"
rules_file = "./rules.toml"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.out_dir, "./exports");
    assert_eq!(config.paths.rules_file, "./rules.toml");
}

#[test]
fn test_config_from_toml_partial() {
    // Test that missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.paths.rules_file, ""); // Default empty
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$SEATPLAN/test.log"

[paths]
out_dir = "$SEATPLAN/exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("seatplan"));
    assert!(!config.logging.file.contains("$SEATPLAN"));
    assert!(config.paths.out_dir.contains("seatplan"));
    assert!(!config.paths.out_dir.contains("$SEATPLAN"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("rules_file", "/tmp/rules.toml")
        .expect("Failed to set rules_file");
    assert_eq!(config.get("rules_file").unwrap(), "/tmp/rules.toml");
}

#[test]
fn test_config_set_invalid_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset_restores_default() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    assert_eq!(config.get("level"), defaults.get("level"));

    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_merge_defaults_fills_empty_fields() {
    let mut config = Config::from_toml(
        r#"
[logging]
level = "error"

[paths]
"#,
    )
    .expect("Failed to parse TOML");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);
    assert!(changed);
    // User-set value preserved, empty value filled in
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);

    // Second merge changes nothing further
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_config_apply_overrides() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(true),
        out_dir: Some("/override/out".to_string()),
        rules_file: Some("/override/rules.toml".to_string()),
        ..Default::default()
    };
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.out_dir, "/override/out");
    assert_eq!(config.paths.rules_file, "/override/rules.toml");
}

#[test]
fn test_config_display_contains_sections() {
    let config = Config::from_defaults();
    let rendered = config.to_string();

    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[paths]"));
    assert!(rendered.contains("out_dir"));
}
