//! Domain services: the strip → parse → validate pipeline for model replies.

mod error;
mod fence;
mod normalizer;
mod validator;

pub use error::*;
pub use fence::*;
pub use normalizer::*;
pub use validator::*;
