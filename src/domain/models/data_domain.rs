use serde::{Deserialize, Serialize};

/// The kind of data a call site asks for. Selects the prompt shape and the
/// validation rules applied to the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataDomain {
    Chat,
    Matches,
    Stats,
    Squad,
}

impl DataDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataDomain::Chat => "chat",
            DataDomain::Matches => "matches",
            DataDomain::Stats => "stats",
            DataDomain::Squad => "squad",
        }
    }

    /// Structured domains expect JSON back; chat expects free text.
    pub fn is_structured(&self) -> bool {
        !matches!(self, DataDomain::Chat)
    }

    /// Noun used in user-facing error messages.
    pub fn noun(&self) -> &'static str {
        match self {
            DataDomain::Chat => "reply",
            DataDomain::Matches => "match data",
            DataDomain::Stats => "season stats",
            DataDomain::Squad => "squad data",
        }
    }
}

impl std::fmt::Display for DataDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
