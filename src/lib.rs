pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    DispatchOutcome, PromptBuilder, ProviderSelector, SessionUseCase, Transport,
};

pub use cli::{Commands, OutputFormat};

pub use connector::api::{Container, ContainerConfig, Router};
pub use connector::{AskAiTransport, SampleTransport, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS};
#[cfg(any(test, feature = "test-util"))]
pub use connector::{ReplyGate, ScriptedTransport};

pub use domain::{
    normalize, strip_fences, validate, Affiliation, DataDomain, DomainError, ErrorKind,
    Franchise, Match, MatchStatus, NormalizationError, Payload, PlayerEntry, PlayerRole,
    PromptRequest, Provider, RawResponse, ReplyError, Role, Season, Session, SessionError,
    SessionSnapshot, SessionStatus, StatsSnapshot, Transcript, TransportError, Turn, FRANCHISES,
};
