use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::{Match, Season};
use crate::PromptBuilder;

use super::super::Container;
use super::render_snapshot;

pub struct MatchesController<'a> {
    container: &'a Container,
}

impl<'a> MatchesController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn list(&self, season: Option<u16>, format: OutputFormat) -> Result<String> {
        let season = match season {
            Some(year) => Season::new(year)?,
            None => Season::latest(),
        };

        let session = self.container.matches_session();
        session
            .dispatch(PromptBuilder::matches(season, self.container.provider()))
            .await?;
        let snapshot = session.snapshot().await;

        render_snapshot(&snapshot, format, |payload| {
            self.format_matches(season, payload.as_matches().unwrap_or_default())
        })
    }

    fn format_matches(&self, season: Season, matches: &[Match]) -> String {
        if matches.is_empty() {
            return format!("No matches returned for IPL {season}.");
        }

        let mut out = format!("Match Schedule, IPL {season}\n========================\n\n");
        for m in matches {
            let label = if m.match_type.is_empty() {
                format!("#{}", m.id)
            } else {
                m.match_type.clone()
            };
            out.push_str(&format!("{}  {}\n", m.date, label));
            out.push_str(&format!("  {}\n", m.fixture()));
            out.push_str(&format!("  {} [{}]\n", m.result, m.status));
            if !m.venue.is_empty() {
                out.push_str(&format!("  @ {}\n", m.venue));
            }
            out.push('\n');
        }
        out
    }
}
