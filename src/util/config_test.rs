use super::*;

#[test]
fn normalize_value_trims_and_rejects_empty() {
    assert_eq!(normalize_value(""), None);
    assert_eq!(normalize_value("   "), None);
    assert_eq!(normalize_value("  https://api.example.test "), Some("https://api.example.test".to_owned()));
}

#[test]
fn parse_flag_accepts_common_spellings() {
    for value in ["1", "true", "TRUE", " yes ", "on"] {
        assert_eq!(parse_flag(value), Some(true), "{value}");
    }
    for value in ["0", "false", "No", "off"] {
        assert_eq!(parse_flag(value), Some(false), "{value}");
    }
    assert_eq!(parse_flag("maybe"), None);
    assert_eq!(parse_flag(""), None);
}

#[test]
fn default_config_is_same_origin_without_return() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, "");
    assert_eq!(config.router.login_path, "/login");
    assert_eq!(config.router.home_path, "/");
    assert!(!config.router.return_to_origin);
}

#[test]
fn build_env_values_apply() {
    let config = AppConfig::from_build_env(BuildEnv {
        api_base_url: Some("https://api.example.test/"),
        login_path: Some("/login"),
        home_path: Some("/about"),
        return_to_origin: Some("true"),
    });
    assert_eq!(config.api_base_url, "https://api.example.test");
    assert_eq!(config.router.home_path, "/about");
    assert!(config.router.return_to_origin);
}

#[test]
fn blank_or_invalid_build_env_values_are_ignored() {
    let config = AppConfig::from_build_env(BuildEnv {
        api_base_url: Some("   "),
        login_path: Some(""),
        home_path: None,
        return_to_origin: Some("sometimes"),
    });
    assert_eq!(config, AppConfig::default());
}

#[test]
fn overrides_replace_only_present_values() {
    let mut config = AppConfig::default();
    apply_overrides(&mut config, Overrides { return_to_origin: Some(true), ..Overrides::default() });
    assert!(config.router.return_to_origin);
    assert_eq!(config.router.login_path, "/login");
    assert_eq!(config.router_config(), config.router);
}
