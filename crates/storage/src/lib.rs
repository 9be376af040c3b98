//! Storage layer for Native Shell
//!
//! This crate provides the durable client key-value store and the
//! cookie mirror used to persist shell preferences.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cookie;
pub mod kv;

pub use cookie::{Cookie, CookieError, CookieJar, MemoryCookieJar, SameSite};
pub use kv::{KvConfig, KvError, KvStore, PreferenceStore};
