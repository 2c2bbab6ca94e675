//! # Application Layer
//!
//! Use cases coordinating the domain pipeline with the transport connector.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
