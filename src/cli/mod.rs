use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the assistant a single question
    Ask {
        prompt: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Start an interactive chat (`/provider <name>` switches provider, `/quit` exits)
    Chat,

    /// Fixtures and results for a season
    Matches {
        /// Season year (2008-2025)
        #[arg(short, long)]
        season: Option<u16>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Headline numbers for a season: caps, top score, champion
    Stats {
        #[arg(short, long)]
        season: Option<u16>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// A franchise's squad for a season, with where each player is now
    Squad {
        /// Team short code, e.g. CSK
        team: String,

        #[arg(short, long)]
        season: Option<u16>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the franchises and their codes
    Teams,
}
