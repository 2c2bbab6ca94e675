//! Test transport. Compiled for unit tests and behind the `test-util`
//! feature for integration tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::{oneshot, Mutex};
use tracing::debug;

use crate::application::Transport;
use crate::domain::{PromptRequest, RawResponse, TransportError};

/// Holds back a scripted reply until opened.
pub struct ReplyGate {
    release: oneshot::Sender<()>,
}

impl ReplyGate {
    pub fn open(self) {
        let _ = self.release.send(());
    }
}

struct ScriptedReply {
    response: RawResponse,
    gate: Option<oneshot::Receiver<()>>,
}

/// A [`Transport`] that answers from a queue of prepared replies, in order,
/// and records every request it receives. Replies can be gated to control
/// the order in which overlapping dispatches resolve.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<ScriptedReply>>,
    sent: Mutex<Vec<PromptRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub async fn push(&self, response: RawResponse) {
        self.replies.lock().await.push_back(ScriptedReply {
            response,
            gate: None,
        });
    }

    /// Queues a reply that is only delivered after the returned gate opens
    /// (or is dropped).
    pub async fn push_gated(&self, response: RawResponse) -> ReplyGate {
        let (release, gate) = oneshot::channel();
        self.replies.lock().await.push_back(ScriptedReply {
            response,
            gate: Some(gate),
        });
        ReplyGate { release }
    }

    pub async fn sent(&self) -> Vec<PromptRequest> {
        self.sent.lock().await.clone()
    }
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &PromptRequest) -> RawResponse {
        let next = self.replies.lock().await.pop_front();
        self.sent.lock().await.push(request.clone());

        let Some(reply) = next else {
            return RawResponse::failed(TransportError::Network(
                "no scripted reply left".to_string(),
            ));
        };

        if let Some(gate) = reply.gate {
            debug!("Holding scripted reply for {}", request.id());
            // A dropped gate releases the reply as well.
            let _ = gate.await;
        }

        reply.response
    }

    fn endpoint(&self) -> &str {
        "scripted"
    }
}
