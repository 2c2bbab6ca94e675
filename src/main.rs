use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use pitchside::{
    Commands, Container, ContainerConfig, Router, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS,
};

#[derive(Parser)]
#[command(name = "pitchside")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the ask-ai backend
    #[arg(long, global = true, env = "PITCHSIDE_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// LLM provider the backend should use: gemini or openai
    #[arg(short, long, global = true, env = "PITCHSIDE_PROVIDER", default_value = "gemini")]
    provider: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PITCHSIDE_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Answer from built-in sample data instead of calling the backend
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        backend_url: cli.backend_url,
        provider: cli.provider,
        timeout_secs: cli.timeout,
        offline: cli.offline,
    })?;
    debug!(
        "Provider {} via {}",
        container.provider().label(),
        container.endpoint()
    );

    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn squad_requires_a_team() {
        let res = Cli::try_parse_from(["pitchside", "squad"]);
        assert!(res.is_err(), "squad without a team should be rejected");
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pitchside", "stats", "--season", "2016", "--offline"])
            .expect("valid arguments");
        assert!(cli.offline);
        assert!(matches!(cli.command, Commands::Stats { season: Some(2016), .. }));
    }
}
