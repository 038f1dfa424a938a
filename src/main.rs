use clap::Parser;
use eyre::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use taskboard::{Board, Config, Shell, Style};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Taskboard - in-memory task list with filtering, search and reordering")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a config.yaml (default: <config dir>/taskboard/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // Setup tracing
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.level()?
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    info!(reorder_mode = ?config.reorder_mode, id_scheme = ?config.id_scheme, "Starting taskboard");

    let board = Board::new(config.id_scheme.generator()).with_reorder_mode(config.reorder_mode);
    let style = Style {
        color: config.color && !cli.no_color,
        today: chrono::Local::now().date_naive(),
    };
    let mut stdout = io::stdout().lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("Failed to open script {}", path.display()))?;
            let mut shell = Shell::new(board, style);
            shell.run(BufReader::new(file), &mut stdout)?;
        }
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(board, style).with_prompt(stdin.is_terminal());
            shell.run(stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}
