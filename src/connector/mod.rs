//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Transport to the ask-ai backend (HTTP), plus offline and scripted stand-ins
//! - The CLI-facing API: container, router, and one controller per call site

pub mod adapter;
pub mod api;

pub use adapter::*;
