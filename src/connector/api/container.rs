use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::{ProviderSelector, SessionUseCase, Transport};
use crate::domain::{DataDomain, DomainError, Provider};
use crate::{AskAiTransport, SampleTransport};

pub struct ContainerConfig {
    /// Base URL of the ask-ai backend.
    pub backend_url: String,
    /// Initial provider wire value (`gemini` or `openai`).
    pub provider: String,
    pub timeout_secs: u64,
    /// Answer from built-in sample data instead of calling the backend.
    pub offline: bool,
}

/// Wires the transport, the shared provider selection, and one session per
/// call site.
pub struct Container {
    providers: ProviderSelector,
    chat: SessionUseCase,
    matches: SessionUseCase,
    stats: SessionUseCase,
    squad: SessionUseCase,
    transport: Arc<dyn Transport>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let transport: Arc<dyn Transport> = if config.offline {
            debug!("Using offline sample transport");
            Arc::new(SampleTransport::new())
        } else {
            let transport = AskAiTransport::new(
                &config.backend_url,
                Duration::from_secs(config.timeout_secs),
            );
            debug!(
                "Using ask-ai backend at {} (timeout {:?})",
                transport.url(),
                transport.timeout()
            );
            Arc::new(transport)
        };
        Self::with_transport(&config.provider, transport)
    }

    /// Builds a container around an already constructed transport.
    pub fn with_transport(provider: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        let provider: Provider = provider.parse()?;
        Ok(Self {
            providers: ProviderSelector::new(provider),
            chat: SessionUseCase::new(DataDomain::Chat, transport.clone()),
            matches: SessionUseCase::new(DataDomain::Matches, transport.clone()),
            stats: SessionUseCase::new(DataDomain::Stats, transport.clone()),
            squad: SessionUseCase::new(DataDomain::Squad, transport.clone()),
            transport,
        })
    }

    pub fn select_provider(&self, value: &str) -> Result<Provider, DomainError> {
        self.providers.set_provider(value)
    }

    pub fn provider(&self) -> Provider {
        self.providers.provider()
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    pub fn chat_session(&self) -> &SessionUseCase {
        &self.chat
    }

    pub fn matches_session(&self) -> &SessionUseCase {
        &self.matches
    }

    pub fn stats_session(&self) -> &SessionUseCase {
        &self.stats
    }

    pub fn squad_session(&self) -> &SessionUseCase {
        &self.squad
    }
}
