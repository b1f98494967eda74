use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use short_connect_four::config::AppConfig;
use short_connect_four::logging;
use short_connect_four::ui::{console, App, RestoreOnDrop};

/// Play Connect Four on a 5x7 board against a random computer opponent.
#[derive(Parser)]
#[command(name = "short-connect-four", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Play on a plain line-based console instead of the terminal UI
    #[arg(long)]
    console: bool,

    /// Seed the computer opponent for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Override the computer's thinking pause in milliseconds
    #[arg(long)]
    think_ms: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.opponent.seed = Some(seed);
    }
    if let Some(ms) = cli.think_ms {
        config.opponent.think_delay_ms = ms;
    }
    config.validate().context("validating configuration")?;

    logging::init(&config.logging)
        .with_context(|| format!("creating log file {}", config.logging.file.display()))?;
    if !cli.config.exists() {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    if cli.console {
        let stdout = io::stdout();
        let score = console::run(&config, io::stdin().lock(), &stdout)?;
        info!(
            score = %score.summary(),
            win_rate = score.human_win_rate(),
            "console session ended"
        );
        Ok(())
    } else {
        run_tui(&config).context("running terminal UI")
    }
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal; the guard undoes whatever part of it succeeded
    enable_raw_mode()?;
    let _restore = RestoreOnDrop::new(|| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    });
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    app.run(&mut terminal)
}
