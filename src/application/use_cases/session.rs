use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;
use tracing::info;

use crate::application::Transport;
use crate::domain::{
    normalize, DataDomain, DomainError, PromptRequest, Provider, ReplyError, Session,
    SessionSnapshot, SessionStatus,
};

/// What happened to a dispatch once it settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The reply (or failure) was applied; the session is now in this state.
    Applied(SessionStatus),
    /// A newer dispatch started while this one was in flight; its result was dropped.
    Superseded,
    /// Nothing was sent (busy chat session, or nothing to refresh).
    Ignored,
}

/// Drives one call site's [`Session`]: request → transport → normalizer →
/// session.
///
/// The session lock is released while the transport call is in flight, so
/// several dispatches may overlap; the session's ticket check makes sure
/// only the newest one lands.
pub struct SessionUseCase {
    transport: Arc<dyn Transport>,
    session: Mutex<Session>,
}

impl SessionUseCase {
    pub fn new(domain: DataDomain, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            session: Mutex::new(Session::new(domain)),
        }
    }

    pub async fn dispatch(&self, request: PromptRequest) -> Result<DispatchOutcome, DomainError> {
        let ticket = {
            let mut session = self.session.lock().await;
            match session.begin(&request) {
                Ok(ticket) => ticket,
                Err(DomainError::SessionBusy(reason)) => {
                    info!("Ignoring dispatch {}: {}", request.id(), reason);
                    return Ok(DispatchOutcome::Ignored);
                }
                Err(e) => return Err(e),
            }
        };

        info!(
            "Sending {} prompt {} to {} via {}",
            request.domain(),
            request.id(),
            self.transport.endpoint(),
            request.provider()
        );
        let start_time = Instant::now();

        let response = self.transport.send(&request).await;
        let outcome = response
            .into_result()
            .map_err(ReplyError::from)
            .and_then(|text| normalize(&text, request.domain()).map_err(ReplyError::from));

        let mut session = self.session.lock().await;
        if !session.complete(ticket, outcome) {
            return Ok(DispatchOutcome::Superseded);
        }

        info!(
            "{} prompt {} settled as {:?} in {:.2}s",
            request.domain(),
            request.id(),
            session.status(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(DispatchOutcome::Applied(session.status()))
    }

    /// Re-sends the latest request through `provider`. This is the manual
    /// retry; nothing is ever retried automatically.
    pub async fn refresh(&self, provider: Provider) -> Result<DispatchOutcome, DomainError> {
        let request = {
            let session = self.session.lock().await;
            session.last_request().map(|r| r.with_provider(provider))
        };

        match request {
            Some(request) => self.dispatch(request).await,
            None => Ok(DispatchOutcome::Ignored),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn status(&self) -> SessionStatus {
        self.session.lock().await.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::ScriptedTransport;
    use crate::domain::{ErrorKind, Payload, RawResponse, Role, TransportError};
    use crate::PromptBuilder;

    const SQUAD_A: &str = r#"[{"name": "Player A", "role": "Bowler", "current_team": "MI"}]"#;
    const SQUAD_B: &str = r#"[{"name": "Player B", "role": "Batsman", "current_team": "CSK"}]"#;

    fn squad_request(year: u16) -> PromptRequest {
        let team = crate::domain::Franchise::lookup("MI").unwrap();
        let season = crate::domain::Season::new(year).unwrap();
        PromptBuilder::squad(team, season, Provider::Gemini)
    }

    async fn wait_for_sent(transport: &ScriptedTransport, n: usize) {
        while transport.sent().await.len() < n {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_structured_dispatch_reaches_success() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push(RawResponse::ok(format!("```json\n{SQUAD_A}\n```"))).await;
        let use_case = SessionUseCase::new(DataDomain::Squad, transport.clone());

        let outcome = use_case.dispatch(squad_request(2024)).await.unwrap();

        assert_eq!(outcome, DispatchOutcome::Applied(SessionStatus::Success));
        let snapshot = use_case.snapshot().await;
        let players = snapshot.payload.as_ref().and_then(Payload::as_squad).unwrap();
        assert_eq!(players[0].name, "Player A");
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_lands_as_error_state() {
        let transport = Arc::new(ScriptedTransport::new());
        transport
            .push(RawResponse::failed(TransportError::Network("refused".into())))
            .await;
        let use_case = SessionUseCase::new(DataDomain::Squad, transport);

        let outcome = use_case.dispatch(squad_request(2024)).await.unwrap();

        assert_eq!(outcome, DispatchOutcome::Applied(SessionStatus::Error));
        let error = use_case.snapshot().await.error.unwrap();
        assert_eq!(error.kind, ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_unparsable_and_mismatched_replies_are_distinguished() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push(RawResponse::ok(r#"[{"name": "#)).await;
        transport.push(RawResponse::ok(r#"{"squad": []}"#)).await;
        let use_case = SessionUseCase::new(DataDomain::Squad, transport);

        use_case.dispatch(squad_request(2024)).await.unwrap();
        let first = use_case.snapshot().await.error.unwrap();
        use_case.dispatch(squad_request(2024)).await.unwrap();
        let second = use_case.snapshot().await.error.unwrap();

        assert_eq!(first.kind, ErrorKind::UnparsableJson);
        assert_eq!(second.kind, ErrorKind::SchemaMismatch);
        assert_ne!(first.message, second.message);
    }

    #[tokio::test]
    async fn test_last_dispatch_wins_when_replies_arrive_out_of_order() {
        let transport = Arc::new(ScriptedTransport::new());
        let gate_a = transport.push_gated(RawResponse::ok(SQUAD_A)).await;
        transport.push(RawResponse::ok(SQUAD_B)).await;
        let use_case = Arc::new(SessionUseCase::new(DataDomain::Squad, transport.clone()));

        let slow = tokio::spawn({
            let use_case = use_case.clone();
            async move { use_case.dispatch(squad_request(2023)).await }
        });
        wait_for_sent(&transport, 1).await;

        let fast = use_case.dispatch(squad_request(2024)).await.unwrap();
        assert_eq!(fast, DispatchOutcome::Applied(SessionStatus::Success));

        gate_a.open();
        let slow = slow.await.unwrap().unwrap();
        assert_eq!(slow, DispatchOutcome::Superseded);

        let snapshot = use_case.snapshot().await;
        let players = snapshot.payload.as_ref().and_then(Payload::as_squad).unwrap();
        assert_eq!(players[0].name, "Player B");
        assert_eq!(snapshot.status, SessionStatus::Success);
    }

    #[tokio::test]
    async fn test_chat_dispatch_while_loading_is_ignored() {
        let transport = Arc::new(ScriptedTransport::new());
        let gate = transport.push_gated(RawResponse::ok("first answer")).await;
        let use_case = Arc::new(SessionUseCase::new(DataDomain::Chat, transport.clone()));

        let first = tokio::spawn({
            let use_case = use_case.clone();
            async move {
                let request = PromptBuilder::chat("first", Provider::Gemini).unwrap();
                use_case.dispatch(request).await
            }
        });
        wait_for_sent(&transport, 1).await;

        let second = PromptBuilder::chat("second", Provider::Gemini).unwrap();
        assert_eq!(use_case.dispatch(second).await.unwrap(), DispatchOutcome::Ignored);

        gate.open();
        first.await.unwrap().unwrap();

        let transcript = use_case.snapshot().await.transcript.unwrap();
        let roles: Vec<Role> = transcript.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(transcript.last().unwrap().content, "first answer");
    }

    #[tokio::test]
    async fn test_refresh_resends_last_request_with_new_provider() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push(RawResponse::ok("nope")).await;
        transport.push(RawResponse::ok(SQUAD_B)).await;
        let use_case = SessionUseCase::new(DataDomain::Squad, transport.clone());

        assert_eq!(
            use_case.refresh(Provider::OpenAi).await.unwrap(),
            DispatchOutcome::Ignored
        );

        let original = squad_request(2022);
        use_case.dispatch(original.clone()).await.unwrap();
        assert_eq!(use_case.status().await, SessionStatus::Error);

        let outcome = use_case.refresh(Provider::OpenAi).await.unwrap();
        assert_eq!(outcome, DispatchOutcome::Applied(SessionStatus::Success));

        let sent = transport.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].instruction(), original.instruction());
        assert_eq!(sent[1].provider(), Provider::OpenAi);
    }
}
