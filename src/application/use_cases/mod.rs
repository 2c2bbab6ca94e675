mod prompt_builder;
mod provider_selector;
mod session;

pub use prompt_builder::*;
pub use provider_selector::*;
pub use session::*;
