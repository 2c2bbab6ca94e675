use anyhow::Result;

use crate::cli::OutputFormat;
use crate::domain::{Franchise, PlayerEntry, Season, SquadStanding};
use crate::PromptBuilder;

use super::super::Container;
use super::render_snapshot;

pub struct SquadController<'a> {
    container: &'a Container,
}

impl<'a> SquadController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn squad(
        &self,
        team: String,
        season: Option<u16>,
        format: OutputFormat,
    ) -> Result<String> {
        let franchise = Franchise::lookup(&team)?;
        let season = match season {
            Some(year) => Season::new(year)?,
            None => Season::default(),
        };

        let session = self.container.squad_session();
        session
            .dispatch(PromptBuilder::squad(
                franchise,
                season,
                self.container.provider(),
            ))
            .await?;
        let snapshot = session.snapshot().await;

        render_snapshot(&snapshot, format, |payload| {
            self.format_squad(franchise, season, payload.as_squad().unwrap_or_default())
        })
    }

    fn format_squad(&self, franchise: &Franchise, season: Season, players: &[PlayerEntry]) -> String {
        let mut out = format!("{franchise} squad, IPL {season}\n\n");
        if players.is_empty() {
            out.push_str("No squad data available. Try refreshing.");
            return out;
        }

        out.push_str(&format!(
            "{:<28} {:<15} Current Status ({})\n",
            "Player Name",
            "Role",
            Season::latest()
        ));
        for player in players {
            let marker = match player.standing(franchise) {
                SquadStanding::Retained => "",
                SquadStanding::Retired => " (retired)",
                SquadStanding::Elsewhere => " (moved)",
            };
            out.push_str(&format!(
                "{:<28} {:<15} {}{}\n",
                player.name, player.role, player.affiliation, marker
            ));
        }
        out
    }
}
