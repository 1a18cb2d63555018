use crate::catalog::Catalog;
use leptos::logging::{log, warn};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_COOKIE_NAME: &str = "token";
pub const DEFAULT_COOKIE_TTL_DAYS: i64 = 1;
pub const DEFAULT_STORAGE_KEY: &str = "access_token";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown session store `{0}` (expected cookie, local or memory)")]
    UnknownSessionStore(String),
    #[error("invalid catalog JSON: {0}")]
    InvalidCatalog(String),
}

/// Where the session token lives on the client.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStrategy {
    Cookie { name: String, ttl_days: i64 },
    LocalStorage { key: String },
    Memory,
}

impl Default for SessionStrategy {
    fn default() -> Self {
        SessionStrategy::Cookie {
            name: DEFAULT_COOKIE_NAME.into(),
            ttl_days: DEFAULT_COOKIE_TTL_DAYS,
        }
    }
}

impl FromStr for SessionStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cookie" => Ok(SessionStrategy::default()),
            "local" | "local_storage" | "localstorage" => Ok(SessionStrategy::LocalStorage {
                key: DEFAULT_STORAGE_KEY.into(),
            }),
            "memory" => Ok(SessionStrategy::Memory),
            other => Err(ConfigError::UnknownSessionStore(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for API calls; empty means same origin.
    pub api_base: String,
    pub session: SessionStrategy,
    /// Values offered by the price filter, besides "all".
    pub price_options: Vec<u32>,
    pub catalog: Catalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            session: SessionStrategy::default(),
            price_options: vec![10, 50, 100, 150, 200],
            catalog: Catalog::demo(),
        }
    }
}

impl AppConfig {
    /// Defaults plus build-time overrides. The client bundle has no process
    /// environment, so overrides are baked in when the crate is compiled.
    pub fn load() -> Self {
        Self::with_overrides(
            option_env!("HBNB_API_BASE"),
            option_env!("HBNB_SESSION_STORE"),
            option_env!("HBNB_CATALOG_JSON"),
        )
    }

    /// `catalog_json` replaces the demo listings when it parses; see `Catalog::from_json`.
    pub fn with_overrides(
        api_base: Option<&str>,
        session_store: Option<&str>,
        catalog_json: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(store) = session_store {
            match store.parse::<SessionStrategy>() {
                Ok(strategy) => config.session = strategy,
                Err(err) => warn!("[CONFIG] {}; keeping {:?}", err, config.session),
            }
        }
        if let Some(json) = catalog_json {
            match Catalog::from_json(json).map_err(|e| ConfigError::InvalidCatalog(e.to_string())) {
                Ok(catalog) => config.catalog = catalog,
                Err(err) => warn!("[CONFIG] {}; keeping the demo listings", err),
            }
        }
        log!("[CONFIG] api_base={:?} session={:?}", config.api_base, config.session);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_strategy_from_str() {
        assert_eq!("cookie".parse::<SessionStrategy>(), Ok(SessionStrategy::default()));
        assert_eq!(
            "Local".parse::<SessionStrategy>(),
            Ok(SessionStrategy::LocalStorage { key: "access_token".into() })
        );
        assert_eq!("memory".parse::<SessionStrategy>(), Ok(SessionStrategy::Memory));
        assert_eq!(
            "redis".parse::<SessionStrategy>(),
            Err(ConfigError::UnknownSessionStore("redis".into()))
        );
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::with_overrides(Some("http://localhost:5000/"), Some("local"), None);
        assert_eq!(config.api_base, "http://localhost:5000");
        assert!(matches!(config.session, SessionStrategy::LocalStorage { .. }));

        let config = AppConfig::with_overrides(None, Some("bogus"), None);
        assert_eq!(config.session, SessionStrategy::default());
        assert_eq!(config.api_base, "");
    }

    #[test]
    fn test_catalog_override() {
        let json = r#"{
            "listings": [{"id": 7, "name": "Loft", "price": 80, "host": "Dan",
                          "description": "Bright.", "amenities": ["WiFi"]}],
            "reviews": {"7": [{"user": "Eve", "comment": "Nice", "rating": 4}]}
        }"#;
        let config = AppConfig::with_overrides(None, None, Some(json));
        assert_eq!(config.catalog.listings.len(), 1);
        assert_eq!(config.catalog.place_details("7").unwrap().reviews[0].user, "Eve");
    }

    #[test]
    fn test_broken_catalog_keeps_demo_data() {
        let config = AppConfig::with_overrides(None, None, Some("{not json"));
        assert_eq!(config.catalog, Catalog::demo());
    }
}
