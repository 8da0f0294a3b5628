//! Registry endpoint configuration.
//!
//! The design registry base URL is resolved once per run: an environment
//! override wins, otherwise the public registry is used. Everything built
//! from it (site lookups, the materials endpoint) joins paths onto this
//! base.

/// Public design registry.
pub const DEFAULT_REGISTRY_URL: &str = "https://atelier.design";

/// Environment variable overriding the registry base URL.
pub const REGISTRY_URL_ENV: &str = "ATELIER_REGISTRY_URL";

/// Resolve the registry base URL.
///
/// `ATELIER_REGISTRY_URL` takes precedence when set and non-empty.
pub fn registry_base_url() -> String {
    std::env::var(REGISTRY_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string())
}

/// Resolve the registry URL for a run from an optional override.
///
/// Blank overrides fall through to [`registry_base_url`], so an empty
/// `--registry` flag or an empty `ATELIER_REGISTRY_URL` passed along by
/// the CLI layer never reaches the HTTP client.
pub fn resolve_registry_url(flag: Option<String>) -> String {
    flag.filter(|value| !value.trim().is_empty())
        .unwrap_or_else(registry_base_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ENV_LOCK;

    #[test]
    fn test_env_override_wins() {
        let _lock = ENV_LOCK.lock().unwrap();
        let saved = std::env::var(REGISTRY_URL_ENV).ok();

        std::env::set_var(REGISTRY_URL_ENV, "https://registry.example.com");
        assert_eq!(registry_base_url(), "https://registry.example.com");

        std::env::set_var(REGISTRY_URL_ENV, "");
        assert_eq!(registry_base_url(), DEFAULT_REGISTRY_URL);

        match saved {
            Some(value) => std::env::set_var(REGISTRY_URL_ENV, value),
            None => std::env::remove_var(REGISTRY_URL_ENV),
        }
    }

    #[test]
    fn test_resolve_registry_url_filters_blank_overrides() {
        let _lock = ENV_LOCK.lock().unwrap();
        let saved = std::env::var(REGISTRY_URL_ENV).ok();
        std::env::remove_var(REGISTRY_URL_ENV);

        assert_eq!(
            resolve_registry_url(Some("https://registry.example.com".to_string())),
            "https://registry.example.com"
        );
        assert_eq!(resolve_registry_url(Some(String::new())), DEFAULT_REGISTRY_URL);
        assert_eq!(resolve_registry_url(Some("  ".to_string())), DEFAULT_REGISTRY_URL);
        assert_eq!(resolve_registry_url(None), DEFAULT_REGISTRY_URL);

        match saved {
            Some(value) => std::env::set_var(REGISTRY_URL_ENV, value),
            None => std::env::remove_var(REGISTRY_URL_ENV),
        }
    }
}
