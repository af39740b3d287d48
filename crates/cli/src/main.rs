mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ydc",
    version,
    about = "Compare the same day of your daily notes across years"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Show one calendar day side by side across every journaled year
    Compare(CompareArgs),

    /// Print the summary excerpt of a single note
    Excerpt(ExcerptArgs),

    /// Open the daily note of a date in $EDITOR
    Open(OpenArgs),
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Day to center on (YYYY-MM-DD or MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Days to show before and after the centered day
    #[arg(long, default_value_t = 7)]
    pub days: usize,

    /// Show the whole year instead of a window
    #[arg(long)]
    pub all: bool,

    /// Override the configured heading keyword
    #[arg(long)]
    pub heading: Option<String>,

    /// Output as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Output as an HTML table
    #[arg(long)]
    pub html: bool,
}

#[derive(Debug, Args)]
pub struct ExcerptArgs {
    /// Markdown file to read
    pub file: PathBuf,

    /// Override the configured heading keyword
    #[arg(long)]
    pub heading: Option<String>,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Date of the note (YYYY-MM-DD)
    pub date: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
            Ok(())
        }
        Commands::Compare(args) => {
            cmd::compare::run(cli.config.as_deref(), cli.profile.as_deref(), args).await
        }
        Commands::Excerpt(args) => {
            cmd::excerpt::run(cli.config.as_deref(), cli.profile.as_deref(), args).await
        }
        Commands::Open(args) => {
            cmd::open::run(cli.config.as_deref(), cli.profile.as_deref(), args)
        }
    }
}
