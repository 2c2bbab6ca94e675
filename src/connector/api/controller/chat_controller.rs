use std::io::Write;

use anyhow::{bail, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::OutputFormat;
use crate::domain::{Role, Transcript, Turn};
use crate::PromptBuilder;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, prompt: String, format: OutputFormat) -> Result<String> {
        let Some(request) = PromptBuilder::chat(&prompt, self.container.provider()) else {
            bail!("Nothing to ask: the prompt is blank.");
        };

        let session = self.container.chat_session();
        session.dispatch(request).await?;
        let snapshot = session.snapshot().await;

        Ok(match format {
            OutputFormat::Json => serde_json::to_string_pretty(&snapshot)?,
            OutputFormat::Text => snapshot
                .transcript
                .as_ref()
                .and_then(Transcript::last)
                .map(|turn| self.format_turn(turn))
                .unwrap_or_default(),
        })
    }

    /// Reads prompts from stdin until EOF or `/quit`, printing each reply as
    /// it settles.
    pub async fn interactive(&self) -> Result<String> {
        let session = self.container.chat_session();
        let mut shown = 0;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            if let Some(transcript) = session.snapshot().await.transcript {
                for turn in &transcript.turns()[shown..] {
                    if turn.role == Role::Assistant {
                        println!("{}\n", self.format_turn(turn));
                    }
                }
                shown = transcript.len();
            }

            print!("you> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();

            if line == "/quit" || line == "/exit" {
                break;
            }
            if let Some(value) = line.strip_prefix("/provider") {
                match self.container.select_provider(value.trim()) {
                    Ok(provider) => println!("Now asking {}.\n", provider.label()),
                    Err(e) => println!("{e} (choose gemini or openai)\n"),
                }
                continue;
            }

            if let Some(request) = PromptBuilder::chat(line, self.container.provider()) {
                session.dispatch(request).await?;
            }
        }

        Ok(String::new())
    }

    fn format_turn(&self, turn: &Turn) -> String {
        format!("{}> {}", speaker(turn), turn.content)
    }
}

/// Assistant turns are labelled with the provider that answered them, which
/// may differ from the one currently selected.
fn speaker(turn: &Turn) -> &'static str {
    match (turn.role, turn.provider) {
        (Role::User, _) => "you",
        (Role::Assistant, Some(provider)) => provider.label(),
        (Role::Assistant, None) => "assistant",
    }
}
