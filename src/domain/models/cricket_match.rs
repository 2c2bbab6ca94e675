use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Completed,
    Upcoming,
}

impl MatchStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "completed" => Some(MatchStatus::Completed),
            "upcoming" => Some(MatchStatus::Upcoming),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Completed => "Completed",
            MatchStatus::Upcoming => "Upcoming",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A fixture or result as reported by the model. Dates and results are kept
/// as display strings; nothing here is merged with earlier fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: String,
    pub date: String,
    pub team1: String,
    pub team2: String,
    pub venue: String,
    /// Winning margin for completed matches, start time for upcoming ones.
    pub result: String,
    pub status: MatchStatus,
    #[serde(rename = "type")]
    pub match_type: String,
}

impl Match {
    pub fn fixture(&self) -> String {
        format!("{} vs {}", self.team1, self.team2)
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }
}
