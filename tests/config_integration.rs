//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use wire4d::config::AppConfig;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("W4D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("W4D_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_overrides_nested_numeric_key() {
    std::env::set_var("W4D_INPUT__ROTATE_STEP", "2.5");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.input.rotate_step, 2.5);
    std::env::remove_var("W4D_INPUT__ROTATE_STEP");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("W4D_WINDOW__TITLE");

    // config/default.toml at the workspace root must agree with the
    // compiled-in defaults for the load-bearing values.
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.height, 600);
    assert_eq!(config.window.width, 1066);
    assert_eq!(config.view.projection_distance, 500.0);
    assert_eq!(config.input.rotate_step, 5.0);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join("wire4d_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[window]\ntitle = \"from default\"\nwidth = 640\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[window]\ntitle = \"from user\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "from user");
    // Keys absent from user.toml fall through to default.toml.
    assert_eq!(config.window.width, 640);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_default_config_survives_toml_round_trip() {
    let config = wire4d::config::AppConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: wire4d::config::AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.window.title, config.window.title);
    assert_eq!(parsed.view.mesh_color, config.view.mesh_color);
    assert_eq!(parsed.text.font_paths, config.text.font_paths);
}

#[test]
#[serial]
fn test_malformed_toml_is_an_error() {
    let dir = std::env::temp_dir().join("wire4d_config_bad");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("default.toml"), "[window\nnot toml").unwrap();

    assert!(AppConfig::load_from(&dir).is_err());

    std::fs::remove_dir_all(&dir).ok();
}
