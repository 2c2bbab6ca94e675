use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{DomainError, NormalizationError, ReplyError, TransportError};

use super::{DataDomain, Payload, PromptRequest, Provider, Transcript};

/// Assistant turn appended when the backend cannot be reached.
pub const CONNECTION_APOLOGY: &str = "Sorry, there was an error connecting to the server.";
/// Assistant turn appended when a reply arrives but cannot be used.
pub const PROCESSING_APOLOGY: &str = "Sorry, I couldn't process that request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Which stage of the pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    MalformedUpstream,
    UnparsableJson,
    SchemaMismatch,
}

impl ErrorKind {
    pub fn of(err: &ReplyError) -> Self {
        match err {
            ReplyError::Transport(TransportError::Network(_)) => ErrorKind::Network,
            ReplyError::Transport(TransportError::MalformedUpstream(_)) => {
                ErrorKind::MalformedUpstream
            }
            ReplyError::Normalization(NormalizationError::UnparsableJson { .. }) => {
                ErrorKind::UnparsableJson
            }
            ReplyError::Normalization(NormalizationError::SchemaMismatch { .. }) => {
                ErrorKind::SchemaMismatch
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionError {
    pub kind: ErrorKind,
    /// Message shown to the user.
    pub message: String,
    /// Diagnostic text: the raw reply for unparsable JSON, otherwise the
    /// underlying error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SessionError {
    pub fn from_failure(domain: DataDomain, err: &ReplyError) -> Self {
        let kind = ErrorKind::of(err);
        let message = if domain == DataDomain::Chat {
            match kind {
                ErrorKind::Network => CONNECTION_APOLOGY.to_string(),
                _ => PROCESSING_APOLOGY.to_string(),
            }
        } else {
            let noun = domain.noun();
            match kind {
                ErrorKind::Network => "Error connecting to AI service.".to_string(),
                ErrorKind::MalformedUpstream => format!("Failed to fetch {noun}."),
                ErrorKind::UnparsableJson => {
                    format!("Failed to parse {noun}. AI returned invalid format.")
                }
                ErrorKind::SchemaMismatch => format!("The AI service returned unexpected {noun}."),
            }
        };
        let detail = match err {
            ReplyError::Normalization(NormalizationError::UnparsableJson { raw, .. }) => {
                Some(raw.clone())
            }
            other => Some(other.to_string()),
        };
        Self {
            kind,
            message,
            detail,
        }
    }
}

/// Proof of a dispatch. Only the most recent ticket may complete a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    provider: Provider,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Provider the dispatch was sent through.
    pub fn provider(&self) -> Provider {
        self.provider
    }
}

/// A point-in-time copy of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub domain: DataDomain,
    pub status: SessionStatus,
    pub payload: Option<Payload>,
    pub error: Option<SessionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Transcript>,
}

/// Lifecycle state for one call site.
///
/// `begin` moves the session to `Loading` and hands out a ticket carrying a
/// monotonically increasing sequence number; `complete` applies an outcome
/// only if its ticket is still the latest one, so a slow reply can never
/// overwrite the result of a newer dispatch.
///
/// Chat sessions additionally keep a transcript: the user turn is recorded at
/// `begin`, and exactly one assistant turn (reply or apology) at `complete`.
#[derive(Debug, Clone)]
pub struct Session {
    domain: DataDomain,
    status: SessionStatus,
    payload: Option<Payload>,
    error: Option<SessionError>,
    transcript: Option<Transcript>,
    latest: u64,
    last_request: Option<PromptRequest>,
}

impl Session {
    pub fn new(domain: DataDomain) -> Self {
        Self {
            domain,
            status: SessionStatus::Idle,
            payload: None,
            error: None,
            transcript: (domain == DataDomain::Chat).then(Transcript::with_greeting),
            latest: 0,
            last_request: None,
        }
    }

    pub fn begin(&mut self, request: &PromptRequest) -> Result<Ticket, DomainError> {
        if request.domain() != self.domain {
            return Err(DomainError::invalid_input(format!(
                "{} request dispatched to {} session",
                request.domain(),
                self.domain
            )));
        }

        if let Some(transcript) = self.transcript.as_mut() {
            // A chat turn waits for its answer before the next one is taken.
            if self.status == SessionStatus::Loading {
                return Err(DomainError::SessionBusy(format!(
                    "{} session is awaiting a reply",
                    self.domain
                )));
            }
            transcript.push_user(request.instruction());
        } else {
            self.payload = None;
        }

        self.latest += 1;
        self.status = SessionStatus::Loading;
        self.error = None;
        self.last_request = Some(request.clone());

        debug!(
            "{} session: dispatch #{} ({}) via {}",
            self.domain,
            self.latest,
            request.id(),
            request.provider()
        );

        Ok(Ticket {
            seq: self.latest,
            provider: request.provider(),
        })
    }

    /// Applies an outcome. Returns `false` when the ticket was superseded and
    /// the outcome was dropped.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<Payload, ReplyError>) -> bool {
        if !self.is_current(ticket) {
            warn!(
                "{} session: discarding stale reply #{} (latest is #{})",
                self.domain, ticket.seq, self.latest
            );
            return false;
        }

        let outcome = outcome.and_then(|payload| {
            if payload.domain() == self.domain {
                Ok(payload)
            } else {
                Err(NormalizationError::schema(format!(
                    "{} payload delivered to {} session",
                    payload.domain(),
                    self.domain
                ))
                .into())
            }
        });

        match outcome {
            Ok(payload) => {
                if let (Some(transcript), Payload::ChatReply(text)) =
                    (self.transcript.as_mut(), &payload)
                {
                    transcript.push_assistant(text.clone(), ticket.provider);
                }
                self.payload = Some(payload);
                self.error = None;
                self.status = SessionStatus::Success;
            }
            Err(err) => {
                let error = SessionError::from_failure(self.domain, &err);
                if let Some(transcript) = self.transcript.as_mut() {
                    transcript.push_assistant(error.message.clone(), ticket.provider);
                }
                self.payload = None;
                self.error = Some(error);
                self.status = SessionStatus::Error;
            }
        }

        debug!(
            "{} session: dispatch #{} settled as {:?}",
            self.domain, ticket.seq, self.status
        );
        true
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.seq == self.latest
    }

    pub fn domain(&self) -> DataDomain {
        self.domain
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    /// The request behind the latest dispatch, for manual retries.
    pub fn last_request(&self) -> Option<&PromptRequest> {
        self.last_request.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            domain: self.domain,
            status: self.status,
            payload: self.payload.clone(),
            error: self.error.clone(),
            transcript: self.transcript.clone(),
        }
    }
}
