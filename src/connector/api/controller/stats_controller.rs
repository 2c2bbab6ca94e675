use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::{Season, StatsSnapshot};
use crate::PromptBuilder;

use super::super::Container;
use super::render_snapshot;

pub struct StatsController<'a> {
    container: &'a Container,
}

impl<'a> StatsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn stats(&self, season: Option<u16>, format: OutputFormat) -> Result<String> {
        let season = match season {
            Some(year) => Season::new(year)?,
            None => Season::default(),
        };

        let session = self.container.stats_session();
        session
            .dispatch(PromptBuilder::stats(season, self.container.provider()))
            .await?;
        let snapshot = session.snapshot().await;

        render_snapshot(&snapshot, format, |payload| match payload.as_stats() {
            Some(stats) => self.format_stats(season, stats),
            None => String::new(),
        })
    }

    fn format_stats(&self, season: Season, stats: &StatsSnapshot) -> String {
        if stats.is_empty() {
            return format!("No season stats returned for IPL {season}.");
        }

        let mut out = format!("Season Stats {season}\n=================\n");
        for (caption, leader) in stats.leaders() {
            out.push_str(&format!(
                "{:<26} {} ({}) {}\n",
                format!("{caption}:"),
                leader.player,
                leader.team,
                leader.figure
            ));
        }
        if let Some(winner) = &stats.winner {
            out.push_str(&format!(
                "{:<26} {} (runner-up {})\n",
                "Champion:", winner.team, winner.runner_up
            ));
        }
        out
    }
}
