use web_sys::UrlSearchParams;

use folio_core::SiteConfig;

const CONFIG_QUERY_KEYS: &[&str] = &["settle_ms", "splash_ms", "skip_splash"];

/// Defaults, then the JSON baked in at build time, then URL query overrides.
pub(crate) fn load_site_config() -> SiteConfig {
    let mut config = compiled_config().unwrap_or_default();
    if let Some(search) = location_search() {
        apply_query(&mut config, &search);
    }
    config
}

fn compiled_config() -> Option<SiteConfig> {
    let raw = option_env!("FOLIO_SITE_CONFIG")
        .or(option_env!("TRUNK_PUBLIC_FOLIO_SITE_CONFIG"))?
        .trim();
    if raw.is_empty() {
        return None;
    }
    match SiteConfig::from_json(raw) {
        Ok(config) => Some(config),
        Err(err) => {
            gloo::console::warn!("ignoring compiled site config:", err.to_string());
            None
        }
    }
}

fn location_search() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let search = search.trim();
    if search.is_empty() {
        return None;
    }
    Some(search.to_string())
}

fn apply_query(config: &mut SiteConfig, search: &str) {
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return;
    };
    let before = config.clone();
    for key in CONFIG_QUERY_KEYS {
        let Some(value) = params.get(key) else {
            continue;
        };
        if let Err(err) = config.apply_param(key, &value) {
            gloo::console::warn!("ignoring query override:", err.to_string());
        }
    }
    if let Err(err) = config.validate() {
        gloo::console::warn!("query overrides rejected:", err.to_string());
        *config = before;
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn query_overrides_apply() {
        let mut config = SiteConfig::default();
        apply_query(&mut config, "?settle_ms=800&skip_splash=1&ref=home");
        assert_eq!(config.settle_delay_ms, 800);
        assert!(config.skip_splash);
    }

    #[wasm_bindgen_test]
    fn bad_values_leave_defaults() {
        let mut config = SiteConfig::default();
        apply_query(&mut config, "?splash_ms=later");
        assert_eq!(config, SiteConfig::default());
    }
}
