use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// An IPL season year, bounded to the seasons the league has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Season(u16);

impl Season {
    pub const FIRST: u16 = 2008;
    pub const LATEST: u16 = 2025;

    pub fn new(year: u16) -> Result<Self, DomainError> {
        if (Self::FIRST..=Self::LATEST).contains(&year) {
            Ok(Self(year))
        } else {
            Err(DomainError::invalid_input(format!(
                "season {} is outside {}-{}",
                year,
                Self::FIRST,
                Self::LATEST
            )))
        }
    }

    pub fn latest() -> Self {
        Self(Self::LATEST)
    }

    pub fn year(&self) -> u16 {
        self.0
    }

    /// All seasons, newest first.
    pub fn all() -> impl Iterator<Item = Season> {
        (Self::FIRST..=Self::LATEST).rev().map(Season)
    }
}

impl Default for Season {
    /// The last fully completed season.
    fn default() -> Self {
        Self(2024)
    }
}

impl TryFrom<u16> for Season {
    type Error = DomainError;

    fn try_from(year: u16) -> Result<Self, Self::Error> {
        Season::new(year)
    }
}

impl From<Season> for u16 {
    fn from(season: Season) -> Self {
        season.0
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year: u16 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_input(format!("not a season year: {s:?}")))?;
        Season::new(year)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
