use crate::domain::TransportError;

/// Outcome of a single transport call. Either text or a transport error,
/// never partially parsed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    success: bool,
    text: Option<String>,
    transport_error: Option<TransportError>,
}

impl RawResponse {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: Some(text.into()),
            transport_error: None,
        }
    }

    pub fn failed(error: TransportError) -> Self {
        Self {
            success: false,
            text: None,
            transport_error: Some(error),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        self.transport_error.as_ref()
    }

    pub fn into_result(self) -> Result<String, TransportError> {
        match (self.text, self.transport_error) {
            (_, Some(err)) => Err(err),
            (Some(text), None) => Ok(text),
            (None, None) => Err(TransportError::MalformedUpstream(
                "response carried no text".to_string(),
            )),
        }
    }
}

impl From<Result<String, TransportError>> for RawResponse {
    fn from(result: Result<String, TransportError>) -> Self {
        match result {
            Ok(text) => RawResponse::ok(text),
            Err(err) => RawResponse::failed(err),
        }
    }
}
