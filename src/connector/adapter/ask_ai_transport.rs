use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::Transport;
use crate::domain::{PromptRequest, Provider, RawResponse, TransportError};

/// Default target: the backend running locally on its standard port.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
const ASK_AI_PATH: &str = "/ask-ai";

#[derive(Serialize)]
struct AskAiBody<'a> {
    prompt: &'a str,
    provider: Provider,
}

/// HTTP client for the backend's `POST /ask-ai` endpoint.
///
/// The backend forwards `{prompt, provider}` to the chosen LLM and answers
/// `{"response": "..."}`. Classification:
///
/// - connection failure, timeout, or non-2xx status → [`TransportError::Network`]
/// - 2xx whose body is not JSON, or has no non-blank string `response`
///   → [`TransportError::MalformedUpstream`]
///
/// No retries happen here.
///
/// ```text
/// PITCHSIDE_BACKEND_URL=http://localhost:8000
/// PITCHSIDE_TIMEOUT_SECS=60
/// ```
pub struct AskAiTransport {
    client: reqwest::Client,
    /// Full endpoint URL (base + ASK_AI_PATH).
    url: String,
    timeout: Duration,
}

impl AskAiTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), ASK_AI_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            url,
            timeout,
        }
    }

    /// Construct from environment variables, falling back to the local
    /// defaults.
    pub fn from_env() -> Self {
        let base = std::env::var("PITCHSIDE_BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let timeout = std::env::var("PITCHSIDE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base, Duration::from_secs(timeout))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn exchange(&self, request: &PromptRequest) -> Result<String, TransportError> {
        let body = AskAiBody {
            prompt: request.instruction(),
            provider: request.provider(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("AskAiTransport: backend returned {status}: {body}");
            return Err(TransportError::Network(format!("backend returned {status}")));
        }

        let reply: Value = response.json().await.map_err(|e| {
            TransportError::MalformedUpstream(format!("body is not JSON: {e}"))
        })?;

        extract_text(reply)
    }
}

/// Pulls the `response` text out of a decoded reply body. An empty or
/// whitespace-only text counts as malformed.
fn extract_text(reply: Value) -> Result<String, TransportError> {
    match reply.get("response") {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        Some(Value::String(_)) => Err(TransportError::MalformedUpstream(
            "`response` is empty".to_string(),
        )),
        Some(_) => Err(TransportError::MalformedUpstream(
            "`response` is not a string".to_string(),
        )),
        None => Err(TransportError::MalformedUpstream(
            "missing `response` field".to_string(),
        )),
    }
}

#[async_trait]
impl Transport for AskAiTransport {
    async fn send(&self, request: &PromptRequest) -> RawResponse {
        let result = self.exchange(request).await;
        match &result {
            Ok(text) => debug!("AskAiTransport raw response for {}: {}", request.id(), text),
            Err(e) => warn!("AskAiTransport: {} failed: {}", request.id(), e),
        }
        RawResponse::from(result)
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = AskAiTransport::new("http://example.test/", Duration::from_secs(1));
        assert_eq!(transport.url(), "http://example.test/ask-ai");
    }

    #[test]
    fn test_from_env_reads_backend_and_timeout() {
        std::env::set_var("PITCHSIDE_BACKEND_URL", "http://backend.test:9000/");
        std::env::set_var("PITCHSIDE_TIMEOUT_SECS", "15");
        let transport = AskAiTransport::from_env();
        assert_eq!(transport.url(), "http://backend.test:9000/ask-ai");
        assert_eq!(transport.timeout(), Duration::from_secs(15));

        std::env::set_var("PITCHSIDE_TIMEOUT_SECS", "soon");
        let transport = AskAiTransport::from_env();
        assert_eq!(
            transport.timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );

        std::env::remove_var("PITCHSIDE_BACKEND_URL");
        std::env::remove_var("PITCHSIDE_TIMEOUT_SECS");
        let transport = AskAiTransport::from_env();
        assert_eq!(transport.url(), format!("{DEFAULT_BACKEND_URL}/ask-ai"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = AskAiBody {
            prompt: "Who won 2023?",
            provider: Provider::OpenAi,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"prompt": "Who won 2023?", "provider": "openai"})
        );
    }

    #[test]
    fn test_extract_text_accepts_response_field() {
        let text = extract_text(json!({"response": "CSK won the 2023 final."})).unwrap();
        assert_eq!(text, "CSK won the 2023 final.");
    }

    #[test]
    fn test_extract_text_rejects_missing_or_empty_response() {
        for body in [
            json!({}),
            json!({"response": ""}),
            json!({"response": "   "}),
            json!({"response": null}),
            json!({"response": 42}),
            json!(["response"]),
        ] {
            assert!(
                matches!(extract_text(body.clone()), Err(TransportError::MalformedUpstream(_))),
                "{body}"
            );
        }
    }
}
