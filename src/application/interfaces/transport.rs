use async_trait::async_trait;

use crate::domain::{PromptRequest, RawResponse};

/// Carries one prompt to the ask-ai backend and returns its raw reply.
///
/// Implementors never retry and never interpret the reply text; transport
/// failures are reported inside the [`RawResponse`] rather than as an `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &PromptRequest) -> RawResponse;

    /// Where requests go, for logging.
    fn endpoint(&self) -> &str;
}
