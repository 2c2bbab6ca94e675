use serde::Serialize;

/// A player leading one season category. `figure` is kept as displayed
/// (e.g. "741" runs, "132*" for a not-out top score).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLeader {
    pub player: String,
    pub team: String,
    pub figure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonWinner {
    pub team: String,
    pub runner_up: String,
}

/// Season headline numbers. Every slot is optional: a missing slot means
/// the model did not supply it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub orange_cap: Option<StatLeader>,
    pub purple_cap: Option<StatLeader>,
    pub most_sixes: Option<StatLeader>,
    pub highest_score: Option<StatLeader>,
    pub winner: Option<SeasonWinner>,
}

impl StatsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.orange_cap.is_none()
            && self.purple_cap.is_none()
            && self.most_sixes.is_none()
            && self.highest_score.is_none()
            && self.winner.is_none()
    }

    /// Filled leader slots with their display captions, in page order.
    pub fn leaders(&self) -> Vec<(&'static str, &StatLeader)> {
        [
            ("Orange Cap (Most Runs)", self.orange_cap.as_ref()),
            ("Purple Cap (Most Wickets)", self.purple_cap.as_ref()),
            ("Most Sixes", self.most_sixes.as_ref()),
            ("Highest Score", self.highest_score.as_ref()),
        ]
        .into_iter()
        .filter_map(|(caption, leader)| leader.map(|l| (caption, l)))
        .collect()
    }
}
