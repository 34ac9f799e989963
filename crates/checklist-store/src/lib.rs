//! # checklist-store
//!
//! Durable local key-value store (SQLite-backed) with `localStorage`
//! semantics: string keys, string values, `clear` wipes everything.

mod store;

pub use store::SqliteStore;
