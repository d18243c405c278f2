//! Read-only cookie access.
//!
//! The bootstrap only consults cookies (the `logged_state` indicator set by
//! the OAuth flow); it never writes them.

use crate::error::StorageResult;
use std::collections::HashMap;
use std::path::Path;

/// Read access to the cookie jar.
pub trait CookieJar: Send + Sync {
    /// Value of a cookie, if present.
    fn get(&self, name: &str) -> Option<String>;
}

/// Fixed in-memory jar for tests and defaults.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: HashMap<String, String>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_string(), value.to_string());
        self
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }
}

/// Jar loaded once from a JSON name/value document.
#[derive(Debug, Default)]
pub struct FileCookieJar {
    cookies: HashMap<String, String>,
}

impl FileCookieJar {
    /// Load cookies from a JSON file. A missing file yields an empty jar.
    pub fn load(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let cookies = serde_json::from_str(&content)?;
        Ok(Self { cookies })
    }
}

impl CookieJar for FileCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }
}
