mod cricket_match;
mod data_domain;
mod franchise;
mod payload;
mod player_entry;
mod prompt_request;
mod provider;
mod raw_response;
mod season;
mod session;
mod stats_snapshot;
mod transcript;

pub use cricket_match::*;
pub use data_domain::*;
pub use franchise::*;
pub use payload::*;
pub use player_entry::*;
pub use prompt_request::*;
pub use provider::*;
pub use raw_response::*;
pub use season::*;
pub use session::*;
pub use stats_snapshot::*;
pub use transcript::*;
