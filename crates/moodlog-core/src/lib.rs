//! Core types and trait definitions for the moodlog store.
//!
//! This crate is deliberately free of runtime and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod entry;
pub mod error;
pub mod identity;
pub mod mood;
pub mod store;

pub use error::{Error, Result};
