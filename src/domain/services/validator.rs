use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    Affiliation, DataDomain, Match, MatchStatus, NormalizationError, Payload, PlayerEntry,
    PlayerRole, SeasonWinner, StatLeader, StatsSnapshot,
};

/// A JSON leaf the model may emit as either a string or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s.trim().to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn text_or_empty(value: Option<Scalar>) -> String {
    value.map(Scalar::into_text).unwrap_or_default()
}

fn required_text(value: String, field: &str, context: &str) -> Result<String, NormalizationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(NormalizationError::schema(format!("{context}: `{field}` is empty")));
    }
    Ok(value.to_string())
}

fn from_element<T: DeserializeOwned>(element: Value, context: &str) -> Result<T, NormalizationError> {
    serde_json::from_value(element)
        .map_err(|e| NormalizationError::schema(format!("{context}: {e}")))
}

fn expect_array(value: Value, what: &str) -> Result<Vec<Value>, NormalizationError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(NormalizationError::schema(format!(
            "expected a JSON array of {what}, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Deserialize)]
struct MatchWire {
    id: Option<Scalar>,
    date: Option<Scalar>,
    team1: String,
    team2: String,
    venue: Option<Scalar>,
    result: Option<Scalar>,
    status: String,
    #[serde(rename = "type")]
    match_type: Option<Scalar>,
}

/// Accepts an array of matches. `team1`, `team2` and `status` are required;
/// the remaining fields fall back to empty display text, and a missing `id`
/// falls back to the 1-based position.
pub fn validate_matches(value: Value) -> Result<Vec<Match>, NormalizationError> {
    let items = expect_array(value, "matches")?;
    let mut matches = Vec::with_capacity(items.len());

    for (i, element) in items.into_iter().enumerate() {
        let context = format!("match {}", i + 1);
        let wire: MatchWire = from_element(element, &context)?;

        let status = MatchStatus::from_label(&wire.status).ok_or_else(|| {
            NormalizationError::schema(format!(
                "{context}: unknown status {:?}, expected Completed or Upcoming",
                wire.status
            ))
        })?;

        matches.push(Match {
            id: wire
                .id
                .map(Scalar::into_text)
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| (i + 1).to_string()),
            date: text_or_empty(wire.date),
            team1: required_text(wire.team1, "team1", &context)?,
            team2: required_text(wire.team2, "team2", &context)?,
            venue: text_or_empty(wire.venue),
            result: text_or_empty(wire.result),
            status,
            match_type: text_or_empty(wire.match_type),
        });
    }

    debug!("Validated {} matches", matches.len());
    Ok(matches)
}

#[derive(Deserialize)]
struct PlayerWire {
    name: String,
    role: Option<Scalar>,
    #[serde(alias = "currentTeam")]
    current_team: Option<Scalar>,
}

/// Accepts an array of squad members, each with a non-empty `name`. An empty
/// array is a valid, empty roster.
pub fn validate_squad(value: Value) -> Result<Vec<PlayerEntry>, NormalizationError> {
    let items = expect_array(value, "players")?;
    let mut players = Vec::with_capacity(items.len());

    for (i, element) in items.into_iter().enumerate() {
        let context = format!("player {}", i + 1);
        let wire: PlayerWire = from_element(element, &context)?;

        players.push(PlayerEntry {
            name: required_text(wire.name, "name", &context)?,
            role: PlayerRole::from_label(&text_or_empty(wire.role)),
            affiliation: Affiliation::from_label(&text_or_empty(wire.current_team)),
        });
    }

    debug!("Validated {} squad entries", players.len());
    Ok(players)
}

#[derive(Deserialize)]
struct LeaderWire {
    player: String,
    team: Scalar,
    runs: Option<Scalar>,
    wickets: Option<Scalar>,
    sixes: Option<Scalar>,
    score: Option<Scalar>,
    figure: Option<Scalar>,
}

impl LeaderWire {
    /// Models often send several figures for one leader (a top score with
    /// both `score` and `runs`). The slot's own key wins; otherwise the
    /// first figure present is used.
    fn into_leader(self, slot: &str, key: &str) -> Result<StatLeader, NormalizationError> {
        let mut figures = [
            ("runs", self.runs),
            ("wickets", self.wickets),
            ("sixes", self.sixes),
            ("score", self.score),
            ("figure", self.figure),
        ];
        let preferred = figures
            .iter_mut()
            .find(|(name, _)| *name == key)
            .and_then(|(_, value)| value.take());
        let figure = preferred
            .or_else(|| figures.into_iter().find_map(|(_, value)| value))
            .ok_or_else(|| NormalizationError::schema(format!("{slot}: missing `{key}`")))?;

        Ok(StatLeader {
            player: required_text(self.player, "player", slot)?,
            team: self.team.into_text(),
            figure: figure.into_text(),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WinnerWire {
    team: String,
    #[serde(alias = "runner_up")]
    runner_up: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsWire {
    #[serde(alias = "orange_cap")]
    orange_cap: Option<LeaderWire>,
    #[serde(alias = "purple_cap")]
    purple_cap: Option<LeaderWire>,
    #[serde(alias = "most_sixes")]
    most_sixes: Option<LeaderWire>,
    #[serde(alias = "highest_score")]
    highest_score: Option<LeaderWire>,
    winner: Option<WinnerWire>,
}

/// Accepts a single object. Any slot may be absent or `null`; a slot that is
/// present must be well formed.
pub fn validate_stats(value: Value) -> Result<StatsSnapshot, NormalizationError> {
    if !value.is_object() {
        return Err(NormalizationError::schema(format!(
            "expected a JSON object of season stats, got {}",
            json_kind(&value)
        )));
    }

    let wire: StatsWire = from_element(value, "season stats")?;
    let leader = |slot: Option<LeaderWire>, name: &str, key: &str| {
        slot.map(|w| w.into_leader(name, key)).transpose()
    };

    let winner = match wire.winner {
        Some(w) => Some(SeasonWinner {
            team: required_text(w.team, "team", "winner")?,
            runner_up: required_text(w.runner_up, "runnerUp", "winner")?,
        }),
        None => None,
    };

    let snapshot = StatsSnapshot {
        orange_cap: leader(wire.orange_cap, "orangeCap", "runs")?,
        purple_cap: leader(wire.purple_cap, "purpleCap", "wickets")?,
        most_sixes: leader(wire.most_sixes, "mostSixes", "sixes")?,
        highest_score: leader(wire.highest_score, "highestScore", "score")?,
        winner,
    };

    debug!("Validated season stats ({} leader slots)", snapshot.leaders().len());
    Ok(snapshot)
}

/// Applies the validator for `domain` to an already parsed JSON value.
pub fn validate(value: Value, domain: DataDomain) -> Result<Payload, NormalizationError> {
    match domain {
        DataDomain::Chat => match value {
            Value::String(text) => Ok(Payload::ChatReply(text)),
            other => Err(NormalizationError::schema(format!(
                "expected chat text, got {}",
                json_kind(&other)
            ))),
        },
        DataDomain::Matches => validate_matches(value).map(Payload::MatchList),
        DataDomain::Stats => validate_stats(value).map(Payload::StatsSnapshot),
        DataDomain::Squad => validate_squad(value).map(Payload::SquadRoster),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_schema_mismatch<T: std::fmt::Debug>(result: Result<T, NormalizationError>) {
        match result {
            Err(NormalizationError::SchemaMismatch { .. }) => {}
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_matches_accepts_full_record() {
        let value = json!([{
            "id": 1,
            "date": "May 26, 2025",
            "team1": "CSK",
            "team2": "MI",
            "venue": "Wankhede",
            "result": "CSK won by 5 runs",
            "status": "Completed",
            "type": "Final"
        }]);

        let matches = validate_matches(value).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[0].status, MatchStatus::Completed);
        assert_eq!(matches[0].match_type, "Final");
        assert_eq!(matches[0].fixture(), "CSK vs MI");
    }

    #[test]
    fn test_matches_tolerates_missing_optional_fields() {
        let value = json!([
            {"team1": "RR", "team2": "GT", "status": "upcoming"},
            {"id": "m-7", "team1": "DC", "team2": "LSG", "status": "Upcoming", "venue": null}
        ]);

        let matches = validate_matches(value).unwrap();
        assert_eq!(matches[0].id, "1");
        assert_eq!(matches[0].venue, "");
        assert_eq!(matches[0].status, MatchStatus::Upcoming);
        assert_eq!(matches[1].id, "m-7");
    }

    #[test]
    fn test_matches_requires_teams_and_status() {
        assert_schema_mismatch(validate_matches(json!([{"id": 1}])));
        assert_schema_mismatch(validate_matches(json!([
            {"team1": "CSK", "status": "Completed"}
        ])));
        assert_schema_mismatch(validate_matches(json!([
            {"team1": "CSK", "team2": "  ", "status": "Completed"}
        ])));
        assert_schema_mismatch(validate_matches(json!([
            {"team1": "CSK", "team2": "MI", "status": "Abandoned"}
        ])));
    }

    #[test]
    fn test_matches_rejects_non_array() {
        assert_schema_mismatch(validate_matches(json!({"matches": []})));
        assert_schema_mismatch(validate_matches(json!([1, 2])));
    }

    #[test]
    fn test_squad_accepts_empty_array() {
        assert!(validate_squad(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_squad_maps_roles_and_affiliation() {
        let value = json!([
            {"name": "Virat Kohli", "role": "Batsman", "current_team": "RCB"},
            {"name": "AB de Villiers", "role": "Wicket-keeper", "current_team": "Retired"},
            {"name": "Unknown Player"}
        ]);

        let players = validate_squad(value).unwrap();
        assert_eq!(players.len(), 3);
        assert_eq!(players[0].role, PlayerRole::Batsman);
        assert_eq!(players[1].affiliation, Affiliation::Retired);
        assert_eq!(players[2].affiliation, Affiliation::Unknown);
    }

    #[test]
    fn test_squad_requires_name() {
        assert_schema_mismatch(validate_squad(json!([{"role": "Bowler"}])));
        assert_schema_mismatch(validate_squad(json!([{"name": ""}])));
        assert_schema_mismatch(validate_squad(json!({"name": "x"})));
    }

    #[test]
    fn test_stats_accepts_any_subset_of_slots() {
        let stats = validate_stats(json!({})).unwrap();
        assert!(stats.is_empty());

        let stats = validate_stats(json!({
            "orangeCap": {"player": "Virat Kohli", "team": "RCB", "runs": 741},
            "purpleCap": null,
            "winner": {"team": "KKR", "runnerUp": "SRH"}
        }))
        .unwrap();

        let orange = stats.orange_cap.unwrap();
        assert_eq!(orange.player, "Virat Kohli");
        assert_eq!(orange.figure, "741");
        assert!(stats.purple_cap.is_none());
        assert_eq!(stats.winner.unwrap().runner_up, "SRH");
    }

    #[test]
    fn test_stats_accepts_string_figures() {
        let stats = validate_stats(json!({
            "highestScore": {"player": "Travis Head", "team": "SRH", "score": "102*"}
        }))
        .unwrap();
        assert_eq!(stats.highest_score.unwrap().figure, "102*");
    }

    #[test]
    fn test_stats_slot_with_several_figures_keeps_its_own() {
        let stats = validate_stats(json!({
            "highestScore": {"player": "Chris Gayle", "team": "RCB", "score": "175*", "runs": 175},
            "mostSixes": {"player": "Chris Gayle", "team": "RCB", "sixes": 51, "runs": 708},
            "purpleCap": {"player": "Dwayne Bravo", "team": "CSK", "runs": 12, "wickets": 32}
        }))
        .unwrap();

        assert_eq!(stats.highest_score.unwrap().figure, "175*");
        assert_eq!(stats.most_sixes.unwrap().figure, "51");
        assert_eq!(stats.purple_cap.unwrap().figure, "32");
    }

    #[test]
    fn test_stats_slot_falls_back_to_any_figure() {
        let stats = validate_stats(json!({
            "orangeCap": {"player": "Shubman Gill", "team": "GT", "figure": 890}
        }))
        .unwrap();
        assert_eq!(stats.orange_cap.unwrap().figure, "890");

        assert_schema_mismatch(validate_stats(json!({
            "orangeCap": {"player": "Shubman Gill", "team": "GT"}
        })));
    }

    #[test]
    fn test_stats_rejects_non_object() {
        assert_schema_mismatch(validate_stats(json!([{"orangeCap": {}}])));
        assert_schema_mismatch(validate_stats(json!("stats")));
    }

    #[test]
    fn test_stats_rejects_malformed_present_slot() {
        assert_schema_mismatch(validate_stats(json!({"orangeCap": "Virat Kohli"})));
        assert_schema_mismatch(validate_stats(json!({"winner": {"team": "KKR"}})));
    }

    #[test]
    fn test_validate_dispatches_by_domain() {
        let payload = validate(json!([]), DataDomain::Squad).unwrap();
        assert_eq!(payload, Payload::SquadRoster(vec![]));
        assert_schema_mismatch(validate(json!([]), DataDomain::Stats));
    }
}
