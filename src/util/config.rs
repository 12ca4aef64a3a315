//! Build-time configuration with an optional runtime override.
//!
//! Defaults come from `QUILL_*` environment variables captured at compile
//! time. A static deployment can override them without rebuilding by defining
//! `window.QUILL_CONFIG` before the WASM bundle loads. Values are public; do
//! not store secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::routing::RouterConfig;

/// Frontend configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for API calls; empty means same origin.
    pub api_base_url: String,
    pub router: RouterConfig,
}

impl AppConfig {
    /// Load build-time values, then apply `window.QUILL_CONFIG` overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(BuildEnv {
            api_base_url: option_env!("QUILL_API_BASE_URL"),
            login_path: option_env!("QUILL_LOGIN_PATH"),
            home_path: option_env!("QUILL_HOME_PATH"),
            return_to_origin: option_env!("QUILL_RETURN_TO_ORIGIN"),
        });

        if let Some(runtime) = runtime_config() {
            apply_overrides(&mut config, runtime);
        }

        log::debug!("config: {config:?}");
        config
    }

    fn from_build_env(env: BuildEnv) -> Self {
        let mut config = Self::default();
        apply_overrides(
            &mut config,
            Overrides {
                api_base_url: env.api_base_url.and_then(normalize_value),
                login_path: env.login_path.and_then(normalize_value),
                home_path: env.home_path.and_then(normalize_value),
                return_to_origin: env.return_to_origin.and_then(parse_flag),
            },
        );
        config
    }

    pub fn router_config(&self) -> RouterConfig {
        self.router.clone()
    }
}

struct BuildEnv {
    api_base_url: Option<&'static str>,
    login_path: Option<&'static str>,
    home_path: Option<&'static str>,
    return_to_origin: Option<&'static str>,
}

#[derive(Default)]
struct Overrides {
    api_base_url: Option<String>,
    login_path: Option<String>,
    home_path: Option<String>,
    return_to_origin: Option<bool>,
}

fn apply_overrides(config: &mut AppConfig, overrides: Overrides) {
    if let Some(value) = overrides.api_base_url {
        config.api_base_url = value.trim_end_matches('/').to_owned();
    }
    if let Some(value) = overrides.login_path {
        config.router.login_path = value;
    }
    if let Some(value) = overrides.home_path {
        config.router.home_path = value;
    }
    if let Some(value) = overrides.return_to_origin {
        config.router.return_to_origin = value;
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<Overrides> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let raw = Reflect::get(&window, &JsValue::from_str("QUILL_CONFIG")).ok()?;
    if raw.is_null() || raw.is_undefined() {
        return None;
    }
    let object = Object::from(raw);
    let read = |key: &str| {
        Reflect::get(&object, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_bool().map(|b| b.to_string()).or_else(|| value.as_string()))
    };

    Some(Overrides {
        api_base_url: read("api_base_url").as_deref().and_then(normalize_value),
        login_path: read("login_path").as_deref().and_then(normalize_value),
        home_path: read("home_path").as_deref().and_then(normalize_value),
        return_to_origin: read("return_to_origin").as_deref().and_then(parse_flag),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<Overrides> {
    None
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
