//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_folio_config_toml() {
    let Some(path) = default_config_path() else {
        return; // No config dir on this platform
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("folio") && path_str.ends_with("config.toml"),
        "Path should contain 'folio' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("folio_test_config.toml");

    let toml_content = r#"
theme = "dark"
content_path = "/srv/portfolio.toml"
music_command = ["mpv", "--no-video"]
music_volume = 70
music_loop = false
transition_ms = 250
tick_ms = 100
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.theme, Some("dark".to_string()));
    assert_eq!(
        config.content_path,
        Some(PathBuf::from("/srv/portfolio.toml"))
    );
    assert_eq!(
        config.music_command,
        Some(vec!["mpv".to_string(), "--no-video".to_string()])
    );
    assert_eq!(config.music_volume, Some(70));
    assert_eq!(config.music_loop, Some(false));
    assert_eq!(config.transition_ms, Some(250));
    assert_eq!(config.tick_ms, Some(100));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("folio_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{")
        .expect("Failed to write invalid test config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let toml_with_unknown = r#"
theme = "dark"
unknown_field = "should fail"
"#;

    let result: Result<ConfigFile, _> = toml::from_str(toml_with_unknown);
    assert!(
        result.is_err(),
        "Should reject TOML with unknown fields due to deny_unknown_fields"
    );
}

#[test]
fn config_file_rejects_keybindings_table() {
    let toml_with_bindings = r#"
[keybindings]
quit = "x"
"#;

    let result: Result<ConfigFile, _> = toml::from_str(toml_with_bindings);
    assert!(
        result.is_err(),
        "Key bindings are not configurable, so the table must be reported"
    );
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.theme, None);
    assert_eq!(config.content_path, None);
    assert!(config.music_command.is_empty());
    assert_eq!(config.music_volume, 40);
    assert!(config.music_loop);
    assert!(config.music_enabled);
    assert_eq!(config.transition, Duration::from_millis(400));
    assert_eq!(config.tick, Duration::from_millis(250));
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        theme: Some("dark".to_string()),
        music_volume: Some(90),
        music_loop: Some(false),
        transition_ms: Some(120),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.theme, Some(ThemeMode::Dark));
    assert_eq!(resolved.music_volume, 90);
    assert!(!resolved.music_loop);
    assert_eq!(resolved.transition, Duration::from_millis(120));
}

#[test]
fn merge_config_ignores_invalid_theme() {
    let config_file = ConfigFile {
        theme: Some("solarized".to_string()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.theme, None);
}

#[test]
fn merge_config_caps_volume_at_100() {
    let config_file = ConfigFile {
        music_volume: Some(250),
        ..ConfigFile::default()
    };

    assert_eq!(merge_config(Some(config_file)).music_volume, 100);
}

#[test]
fn merge_config_never_uses_zero_tick() {
    let config_file = ConfigFile {
        tick_ms: Some(0),
        ..ConfigFile::default()
    };

    assert_eq!(merge_config(Some(config_file)).tick, Duration::from_millis(1));
}

// ===== Environment overrides =====

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_respects_folio_theme() {
    let _guard = EnvGuard::new("FOLIO_THEME");

    env::set_var("FOLIO_THEME", "dark");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.theme, Some(ThemeMode::Dark));
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_ignores_invalid_theme() {
    let _guard = EnvGuard::new("FOLIO_THEME");

    env::set_var("FOLIO_THEME", "sepia");

    let base = ResolvedConfig {
        theme: Some(ThemeMode::Light),
        ..ResolvedConfig::default()
    };
    let result = apply_env_overrides(base);

    assert_eq!(result.theme, Some(ThemeMode::Light));
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_respects_folio_content() {
    let _guard = EnvGuard::new("FOLIO_CONTENT");

    env::set_var("FOLIO_CONTENT", "/tmp/me.toml");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.content_path, Some(PathBuf::from("/tmp/me.toml")));
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_no_change_when_env_vars_not_set() {
    let _theme = EnvGuard::new("FOLIO_THEME");
    let _content = EnvGuard::new("FOLIO_CONTENT");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base, "Config should be unchanged when env vars not set");
}

// ===== CLI overrides =====

#[test]
fn apply_cli_overrides_takes_precedence() {
    let base = ResolvedConfig {
        theme: Some(ThemeMode::Light),
        content_path: Some(PathBuf::from("/from/config.toml")),
        ..ResolvedConfig::default()
    };

    let result = apply_cli_overrides(
        base,
        Some(ThemeMode::Dark),
        Some(PathBuf::from("/from/cli.toml")),
        true,
    );

    assert_eq!(result.theme, Some(ThemeMode::Dark));
    assert_eq!(result.content_path, Some(PathBuf::from("/from/cli.toml")));
    assert!(!result.music_enabled);
}

#[test]
fn apply_cli_overrides_keeps_values_when_flags_absent() {
    let base = ResolvedConfig {
        theme: Some(ThemeMode::Dark),
        ..ResolvedConfig::default()
    };

    let result = apply_cli_overrides(base.clone(), None, None, false);

    assert_eq!(result, base);
}

// ===== Precedence =====

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("FOLIO_CONFIG");

    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("folio_explicit.toml");
    fs::write(&explicit_path, r#"theme = "dark""#).expect("Failed to write explicit config");

    let env_path = temp_dir.join("folio_env.toml");
    fs::write(&env_path, r#"theme = "light""#).expect("Failed to write env config");
    env::set_var("FOLIO_CONFIG", &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("should load")
        .expect("file exists");
    assert_eq!(
        config.theme,
        Some("dark".to_string()),
        "Should use explicit path, not FOLIO_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("FOLIO_CONFIG");

    let env_path = env::temp_dir().join("folio_env_only.toml");
    fs::write(&env_path, r#"tick_ms = 500"#).expect("Failed to write env config");
    env::set_var("FOLIO_CONFIG", &env_path);

    let config = load_config_with_precedence(None)
        .expect("should load")
        .expect("file exists");
    assert_eq!(config.tick_ms, Some(500));

    fs::remove_file(env_path).ok();
}
