//! Client-held authentication token.
//!
//! The token lives in one of several stores, picked once when the app is composed:
//! a cookie with an expiry, a `localStorage` key without one, or plain memory for
//! server rendering and tests.
use crate::config::SessionStrategy;
use chrono::{DateTime, Duration, Utc};
use leptos::logging::{log, warn};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("storage rejected the operation: {0}")]
    Storage(String),
}

/// Backend that persists the raw token string.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>, SessionError>;
    fn save(&self, token: &str) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self { store: Rc::new(store) }
    }

    pub fn for_strategy(strategy: &SessionStrategy) -> Self {
        match strategy {
            SessionStrategy::Cookie { name, ttl_days } => {
                Self::new(CookieStore::new(name.clone(), Duration::days(*ttl_days)))
            }
            SessionStrategy::LocalStorage { key } => Self::new(LocalStore::new(key.clone())),
            SessionStrategy::Memory => Self::new(MemoryStore::default()),
        }
    }

    /// Current token, if a non-empty one is stored. Storage failures read as "none".
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                warn!("[SESSION] Could not read token: {}", err);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token)?;
        log!("[SESSION] Token stored");
        Ok(())
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()?;
        log!("[SESSION] Token cleared");
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    token: Rc<RefCell<Option<String>>>,
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.token.borrow_mut().take();
        Ok(())
    }
}

pub struct CookieStore {
    name: String,
    ttl: Duration,
}

impl CookieStore {
    pub fn new(name: impl Into<String>, ttl: Duration) -> Self {
        Self { name: name.into(), ttl }
    }

    fn document() -> Result<HtmlDocument, SessionError> {
        if cfg!(not(target_arch = "wasm32")) {
            return Err(SessionError::Unavailable("document.cookie"));
        }
        gloo_utils::document()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| SessionError::Unavailable("document.cookie"))
    }
}

impl TokenStore for CookieStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        let jar = Self::document()?
            .cookie()
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?;
        Ok(find_cookie(&jar, &self.name))
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        let cookie = format_cookie(&self.name, token, Utc::now() + self.ttl);
        Self::document()?
            .set_cookie(&cookie)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), SessionError> {
        Self::document()?
            .set_cookie(&expired_cookie(&self.name))
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

pub struct LocalStore {
    key: String,
}

impl LocalStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, SessionError> {
        if cfg!(not(target_arch = "wasm32")) {
            return Err(SessionError::Unavailable("localStorage"));
        }
        gloo_utils::window()
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))?
            .ok_or(SessionError::Unavailable("localStorage"))
    }
}

impl TokenStore for LocalStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

/// Looks `name` up in a `document.cookie` style string ("a=1; b=2").
pub fn find_cookie(jar: &str, name: &str) -> Option<String> {
    jar.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|value| value.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

pub fn format_cookie(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{}={}; expires={}; path=/",
        name,
        urlencoding::encode(value),
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

pub fn expired_cookie(name: &str) -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_memory_session_lifecycle() {
        let session = Session::new(MemoryStore::default());
        assert!(!session.is_authenticated());

        session.set_token("abc.def").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc.def"));

        session.logout().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let session = Session::new(MemoryStore::default());
        session.set_token("").unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_the_store() {
        let store = MemoryStore::default();
        let session = Session::new(store.clone());
        store.save("T").unwrap();
        assert!(session.clone().is_authenticated());
    }

    #[test]
    fn test_browser_stores_fail_closed_off_wasm() {
        let session = Session::for_strategy(&SessionStrategy::default());
        assert!(!session.is_authenticated());
        assert_eq!(
            session.set_token("T"),
            Err(SessionError::Unavailable("document.cookie"))
        );

        let session = Session::for_strategy(&SessionStrategy::LocalStorage { key: "k".into() });
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_find_cookie() {
        let jar = "theme=dark; token=eyJ.a%2Bb.c; tokenizer=x";
        assert_eq!(find_cookie(jar, "token").as_deref(), Some("eyJ.a+b.c"));
        assert_eq!(find_cookie(jar, "tokenizer").as_deref(), Some("x"));
        assert_eq!(find_cookie(jar, "session"), None);
        assert_eq!(find_cookie("", "token"), None);
    }

    #[test]
    fn test_format_cookie() {
        let expires = Utc.with_ymd_and_hms(2026, 10, 20, 8, 30, 0).unwrap();
        assert_eq!(
            format_cookie("token", "a b", expires),
            "token=a%20b; expires=Tue, 20 Oct 2026 08:30:00 GMT; path=/"
        );
        assert_eq!(
            expired_cookie("token"),
            "token=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
        );
    }
}
