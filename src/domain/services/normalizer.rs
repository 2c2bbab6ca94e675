use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{DataDomain, NormalizationError, Payload};

use super::{strip_fences, validate};

/// Turns a model reply into a typed payload for `domain`.
///
/// Chat replies pass through untouched. Structured replies go through three
/// separate stages so a failure can be pinned to one of them:
///
/// 1. [`strip_fences`] removes code-fence wrapping the model was asked not to add,
/// 2. a strict JSON parse, failing with [`NormalizationError::UnparsableJson`]
///    (carrying the original text),
/// 3. the domain validator, failing with [`NormalizationError::SchemaMismatch`].
pub fn normalize(raw: &str, domain: DataDomain) -> Result<Payload, NormalizationError> {
    if !domain.is_structured() {
        return Ok(Payload::ChatReply(raw.to_string()));
    }

    let cleaned = strip_fences(raw);
    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        warn!("Could not parse {} reply as JSON: {}", domain, e);
        debug!("Unparsable {} reply: {}", domain, raw);
        NormalizationError::unparsable(raw, e.to_string())
    })?;

    validate(value, domain).map_err(|e| {
        warn!("{} reply failed validation: {}", domain, e);
        e
    })
}
