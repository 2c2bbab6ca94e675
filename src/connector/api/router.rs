use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{
    ChatController, MatchesController, SquadController, StatsController, TeamsController,
};

pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    matches_controller: MatchesController<'a>,
    stats_controller: StatsController<'a>,
    squad_controller: SquadController<'a>,
    teams_controller: TeamsController,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            matches_controller: MatchesController::new(container),
            stats_controller: StatsController::new(container),
            squad_controller: SquadController::new(container),
            teams_controller: TeamsController,
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { prompt, format } => self.chat_controller.ask(prompt, format).await,
            Commands::Chat => self.chat_controller.interactive().await,
            Commands::Matches { season, format } => {
                self.matches_controller.list(season, format).await
            }
            Commands::Stats { season, format } => {
                self.stats_controller.stats(season, format).await
            }
            Commands::Squad {
                team,
                season,
                format,
            } => self.squad_controller.squad(team, season, format).await,
            Commands::Teams => Ok(self.teams_controller.list()),
        }
    }
}
