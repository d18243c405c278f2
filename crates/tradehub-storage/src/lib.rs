//! Session storage for tradehub.
//!
//! The bootstrap logic never touches storage directly; it goes through the
//! narrow [`KeyValueStore`] trait so it can run against an in-memory map in
//! tests and a JSON document on disk in the binary. Cookies are read through
//! the equally narrow [`CookieJar`] trait.

pub mod cookies;
pub mod error;
pub mod keys;
pub mod store;

pub use cookies::{CookieJar, FileCookieJar, MemoryCookieJar};
pub use error::{StorageError, StorageResult};
pub use store::{clear_auth_data, JsonFileStore, KeyValueStore, MemoryStore};
