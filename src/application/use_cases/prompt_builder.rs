use crate::domain::{DataDomain, Franchise, MatchStatus, PromptRequest, Provider, Season};

/// Closing rule appended to every structured prompt.
const RAW_JSON_RULE: &str = "\
Do not include any markdown formatting (like ```json) and do not add any \
explanation before or after the data. Reply with the raw JSON only.";

/// Builds the prompt for each call site.
///
/// Structured prompts spell out the exact JSON shape (field names, types and
/// allowed values) so the reply can be validated field by field. Chat prompts
/// are the user's own words.
pub struct PromptBuilder;

impl PromptBuilder {
    /// The instruction is the user's text as typed, minus control
    /// characters. Returns `None` for blank input: nothing should be sent.
    pub fn chat(input: &str, provider: Provider) -> Option<PromptRequest> {
        let text = sanitize(input);
        if text.trim().is_empty() {
            return None;
        }
        Some(PromptRequest::new(DataDomain::Chat, text, provider))
    }

    pub fn matches(season: Season, provider: Provider) -> PromptRequest {
        let instruction = format!(
            "List the matches of the IPL {season} season in schedule order, including the playoffs.
Return the data STRICTLY as a JSON array of objects.
Each object must have:
- \"id\": the match number in the season (integer)
- \"date\": display date, e.g. \"May 26, 2024\"
- \"team1\": short code of the first team (e.g. \"CSK\")
- \"team2\": short code of the second team
- \"venue\": stadium and city
- \"result\": the result for completed matches (e.g. \"KKR won by 8 wickets\") or the start time for upcoming ones (e.g. \"7:30 PM IST\")
- \"status\": exactly \"{completed}\" or \"{upcoming}\"
- \"type\": the match label, e.g. \"Match 1\", \"Qualifier 1\", \"Eliminator\" or \"Final\"

{RAW_JSON_RULE}",
            completed = MatchStatus::Completed,
            upcoming = MatchStatus::Upcoming,
        );
        PromptRequest::new(DataDomain::Matches, instruction, provider)
    }

    pub fn stats(season: Season, provider: Provider) -> PromptRequest {
        let instruction = format!(
            "Give the headline statistics of the IPL {season} season.
Return the data STRICTLY as a single JSON object with these keys (leave a key out if you do not know it):
- \"orangeCap\": top run-scorer, {{ \"player\": string, \"team\": team short code, \"runs\": integer }}
- \"purpleCap\": top wicket-taker, {{ \"player\": string, \"team\": team short code, \"wickets\": integer }}
- \"mostSixes\": {{ \"player\": string, \"team\": team short code, \"sixes\": integer }}
- \"highestScore\": best individual innings, {{ \"player\": string, \"team\": team short code, \"score\": string such as \"132*\" }}
- \"winner\": {{ \"team\": champion short code, \"runnerUp\": runner-up short code }}

{RAW_JSON_RULE}"
        );
        PromptRequest::new(DataDomain::Stats, instruction, provider)
    }

    pub fn squad(franchise: &Franchise, season: Season, provider: Provider) -> PromptRequest {
        let latest = Season::latest();
        let instruction = format!(
            "List the squad for {name} ({code}) for the IPL season {season}.
Return the data STRICTLY as a JSON array of objects.
Each object must have:
- \"name\": player name
- \"role\": one of \"Batsman\", \"Bowler\", \"All-rounder\", \"Wicket-keeper\"
- \"current_team\": short code of the IPL team this player plays for in {latest}, or \"Retired\" / \"Unsold\" if applicable

{RAW_JSON_RULE}",
            name = sanitize(franchise.name),
            code = sanitize(franchise.code),
        );
        PromptRequest::new(DataDomain::Squad, instruction, provider)
    }
}

/// Drops control characters other than newlines and tabs.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_chat_input_builds_nothing() {
        assert!(PromptBuilder::chat("", Provider::Gemini).is_none());
        assert!(PromptBuilder::chat("  ", Provider::Gemini).is_none());
        assert!(PromptBuilder::chat("\n\t \u{7}", Provider::Gemini).is_none());
    }

    #[test]
    fn test_chat_instruction_is_user_text() {
        let request = PromptBuilder::chat("  Who won 2023?\n", Provider::OpenAi).unwrap();
        assert_eq!(request.domain(), DataDomain::Chat);
        assert_eq!(request.instruction(), "  Who won 2023?\n");
        assert_eq!(request.provider(), Provider::OpenAi);
    }

    #[test]
    fn test_chat_instruction_keeps_layout() {
        let input = "  ```code```\n  indented\n";
        let request = PromptBuilder::chat(input, Provider::Gemini).unwrap();
        assert_eq!(request.instruction(), input);
    }

    #[test]
    fn test_chat_input_drops_control_characters() {
        let request = PromptBuilder::chat("hi\u{1b}[31m there", Provider::Gemini).unwrap();
        assert_eq!(request.instruction(), "hi[31m there");
    }

    #[test]
    fn test_matches_prompt_describes_shape() {
        let season = Season::new(2025).unwrap();
        let request = PromptBuilder::matches(season, Provider::Gemini);
        let text = request.instruction();
        assert_eq!(request.domain(), DataDomain::Matches);
        assert!(text.contains("IPL 2025"));
        for field in ["\"team1\"", "\"team2\"", "\"status\"", "\"venue\"", "\"type\""] {
            assert!(text.contains(field), "missing {field}");
        }
        assert!(text.contains("\"Completed\" or \"Upcoming\""));
        assert!(text.contains("raw JSON only"));
    }

    #[test]
    fn test_stats_prompt_names_every_slot() {
        let request = PromptBuilder::stats(Season::default(), Provider::Gemini);
        for slot in ["orangeCap", "purpleCap", "mostSixes", "highestScore", "runnerUp"] {
            assert!(request.instruction().contains(slot), "missing {slot}");
        }
        assert!(request.instruction().contains("single JSON object"));
    }

    #[test]
    fn test_squad_prompt_names_team_and_season() {
        let csk = Franchise::lookup("CSK").unwrap();
        let season = Season::new(2010).unwrap();
        let request = PromptBuilder::squad(csk, season, Provider::Gemini);
        let text = request.instruction();
        assert!(text.contains("Chennai Super Kings (CSK)"));
        assert!(text.contains("IPL season 2010"));
        assert!(text.contains("\"current_team\""));
        assert!(text.contains("in 2025"));
        assert!(text.contains("```json"));
    }
}
