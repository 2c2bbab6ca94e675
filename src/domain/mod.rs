//! # Domain Layer
//!
//! Core models and the reply-ingestion pipeline (fence stripping, JSON
//! parsing, per-domain validation). This layer has no I/O.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
