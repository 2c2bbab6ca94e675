use uuid::Uuid;

use super::{DataDomain, Provider};

/// One prompt bound for the ask-ai backend. Immutable once built; each
/// request yields exactly one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    id: String,
    domain: DataDomain,
    instruction: String,
    provider: Provider,
}

impl PromptRequest {
    pub fn new(domain: DataDomain, instruction: impl Into<String>, provider: Provider) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            domain,
            instruction: instruction.into(),
            provider,
        }
    }

    /// Correlation id for logs. Not sent upstream.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn domain(&self) -> DataDomain {
        self.domain
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Same domain and instruction aimed at another provider, under a new id.
    pub fn with_provider(&self, provider: Provider) -> Self {
        Self::new(self.domain, self.instruction.clone(), provider)
    }
}
