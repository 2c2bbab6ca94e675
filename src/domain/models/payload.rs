use serde::Serialize;

use super::{DataDomain, Match, PlayerEntry, StatsSnapshot};

/// A validated reply, tagged by the domain it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Payload {
    /// Free text, possibly Markdown.
    ChatReply(String),
    MatchList(Vec<Match>),
    StatsSnapshot(StatsSnapshot),
    SquadRoster(Vec<PlayerEntry>),
}

impl Payload {
    pub fn domain(&self) -> DataDomain {
        match self {
            Payload::ChatReply(_) => DataDomain::Chat,
            Payload::MatchList(_) => DataDomain::Matches,
            Payload::StatsSnapshot(_) => DataDomain::Stats,
            Payload::SquadRoster(_) => DataDomain::Squad,
        }
    }

    pub fn as_matches(&self) -> Option<&[Match]> {
        match self {
            Payload::MatchList(matches) => Some(matches),
            _ => None,
        }
    }

    pub fn as_stats(&self) -> Option<&StatsSnapshot> {
        match self {
            Payload::StatsSnapshot(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_squad(&self) -> Option<&[PlayerEntry]> {
        match self {
            Payload::SquadRoster(players) => Some(players),
            _ => None,
        }
    }
}
