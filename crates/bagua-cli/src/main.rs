//! bagua CLI — study and self-test the Eight Palaces from the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "bagua", version, about = "Eight Palaces hexagram study tool")]
struct Cli {
    /// Dataset JSON file (defaults to the bundled Eight Palaces)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all palaces
    List {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show every hexagram of a palace for memorization
    Memory {
        /// Palace name, e.g. 乾宫
        palace: String,
    },

    /// Test yourself on a palace (reads commands from stdin)
    Test {
        /// Palace name, e.g. 乾宫
        palace: String,

        /// Initial line state of each answer: correct, yin, yang
        #[arg(long)]
        seed: Option<String>,

        /// Write the final test view as HTML
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Open a view by path, e.g. /memory/%E4%B9%BE%E5%AE%AB
    Open {
        /// View path: /, /memory/<palace>, /test/<palace>
        path: String,
    },

    /// Validate the dataset
    Validate,

    /// Export the catalog and memorization views as one HTML page
    Export {
        /// Output file
        #[arg(long, default_value = "bagua.html")]
        output: PathBuf,
    },

    /// Create a starter config and a copy of the bundled dataset
    Init,
}

/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "bagua_core=info,bagua_cli=info";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let source = commands::Source {
        dataset: cli.dataset,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::List { format } => commands::list::execute(&source, format),
        Commands::Memory { palace } => commands::memory::execute(&source, palace),
        Commands::Test {
            palace,
            seed,
            report,
        } => commands::test::execute(&source, palace, seed, report),
        Commands::Open { path } => commands::open::execute(&source, path),
        Commands::Validate => commands::validate::execute(&source),
        Commands::Export { output } => commands::export::execute(&source, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
