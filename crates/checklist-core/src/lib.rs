//! # checklist-core
//!
//! Core types, traits, configuration, form model, and error handling for the
//! checklist controller.

pub mod config;
pub mod error;
pub mod form;
pub mod traits;

pub use config::shellexpand;
