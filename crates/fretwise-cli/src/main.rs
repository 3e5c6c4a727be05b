use anyhow::Result;
use clap::Parser;
use fretwise_core::{Orientation, RenderMode};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "fretwise", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run an interactive note-identification session
    ///
    /// Renders a fretboard diagram with one position marked by '❓' and
    /// reads answers from stdin. Answers are free text: canonical sharp
    /// names (A#), flat spellings (Bb), and the B#/E# edge cases are all
    /// understood. Two attempts per question; after the second wrong answer
    /// the note is revealed and a new question is asked.
    ///
    /// Type 'quit' or 'exit' to end the session and print the statistics
    /// summary (questions asked, correct/wrong answers, accuracy).
    Play {
        /// Highest fret on the diagram (usual practice sizes: 3, 5, 7, 9, 12)
        #[arg(long)]
        frets: Option<u8>,

        /// Diagram layout: vertical or horizontal
        #[arg(long)]
        orientation: Option<Orientation>,

        /// Note disclosure: show or hide
        #[arg(long)]
        mode: Option<RenderMode>,
    },
    /// Print a single fretboard diagram
    Diagram {
        /// Highest fret on the diagram
        #[arg(long)]
        frets: Option<u8>,

        /// Diagram layout: vertical or horizontal
        #[arg(long)]
        orientation: Option<Orientation>,

        /// Note disclosure: show or hide
        #[arg(long)]
        mode: Option<RenderMode>,

        /// Fix the target string (1..=6) instead of picking one at random
        #[arg(long)]
        string: Option<u8>,

        /// Fix the target fret instead of picking one at random
        #[arg(long)]
        fret: Option<u8>,

        /// Also print the answer
        #[arg(long)]
        reveal: bool,
    },
    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    match cli.command {
        Commands::Play {
            frets,
            orientation,
            mode,
        } => {
            commands::run_play(config.resolve(frets, orientation, mode))?;
        }
        Commands::Diagram {
            frets,
            orientation,
            mode,
            string,
            fret,
            reveal,
        } => {
            commands::run_diagram(config.resolve(frets, orientation, mode), string, fret, reveal)?;
        }
        Commands::Config => {
            commands::show_config()?;
        }
    }

    Ok(())
}
