use serde::{Serialize, Serializer};

use super::Franchise;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    AllRounder,
    WicketKeeper,
    Other(String),
}

impl PlayerRole {
    /// Maps the loose labels a model produces ("Batter", "Allrounder",
    /// "Wicket Keeper", ...) onto the known roles.
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "batsman" | "batter" => PlayerRole::Batsman,
            "bowler" => PlayerRole::Bowler,
            "allrounder" => PlayerRole::AllRounder,
            "wicketkeeper" | "keeper" | "wk" => PlayerRole::WicketKeeper,
            _ => PlayerRole::Other(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-rounder",
            PlayerRole::WicketKeeper => "Wicket-keeper",
            PlayerRole::Other(label) => label,
        }
    }
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for PlayerRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Where a player is as of the latest season.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Affiliation {
    Team(String),
    Retired,
    Unsold,
    Unknown,
}

impl Affiliation {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() {
            Affiliation::Unknown
        } else if label.eq_ignore_ascii_case("retired") {
            Affiliation::Retired
        } else if label.eq_ignore_ascii_case("unsold") {
            Affiliation::Unsold
        } else {
            Affiliation::Team(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Affiliation::Team(team) => team,
            Affiliation::Retired => "Retired",
            Affiliation::Unsold => "Unsold",
            Affiliation::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Affiliation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for Affiliation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// How a squad member relates to the franchise whose squad was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquadStanding {
    Retained,
    Retired,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerEntry {
    pub name: String,
    pub role: PlayerRole,
    #[serde(rename = "current_team")]
    pub affiliation: Affiliation,
}

impl PlayerEntry {
    pub fn standing(&self, franchise: &Franchise) -> SquadStanding {
        match &self.affiliation {
            Affiliation::Team(team) if franchise.is_named(team) => SquadStanding::Retained,
            Affiliation::Retired => SquadStanding::Retired,
            _ => SquadStanding::Elsewhere,
        }
    }
}
