mod ask_ai_transport;
mod sample_transport;
#[cfg(any(test, feature = "test-util"))]
mod scripted_transport;

pub use ask_ai_transport::*;
pub use sample_transport::*;
#[cfg(any(test, feature = "test-util"))]
pub use scripted_transport::*;
