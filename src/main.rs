mod app;
mod config;
mod genius;
mod input;
mod tui;

use anyhow::Context;
use app::state::Tab;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "songseek", version, about = "Search Genius by lyrics, title or artist")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Search songs by a lyric fragment and print to stdout (headless).
    Lyrics { text: String },
    /// Search songs by title and print to stdout (headless).
    Title { text: String },
    /// Search artists and list their songs on stdout (headless).
    Artist { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };
    let command = cli.command.unwrap_or(Command::Tui);

    init_tracing(&command, &cfg)?;

    // No token, no searches: stop before any UI is shown.
    let token = config::api_token()?;
    let genius = genius::GeniusClient::new(
        &cfg.api.base_url,
        token,
        cfg.api.timeout_secs.map(Duration::from_secs),
    )?;

    let (tab, query) = match command {
        Command::Tui => {
            let mut guard = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path, genius);
            return app.run(guard.terminal_mut()).await;
        }
        Command::Lyrics { text } => (Tab::Lyrics, text),
        Command::Title { text } => (Tab::Title, text),
        Command::Artist { name } => (Tab::Artist, name),
    };

    let mut stdout = std::io::stdout();
    run_headless(&genius, tab, &query, &mut stdout).await
}

/// Print one tab's search to `out`; any failed request makes the command fail after printing.
async fn run_headless(
    genius: &genius::GeniusClient,
    tab: Tab,
    query: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let query = query.trim();
    if query.is_empty() {
        anyhow::bail!(tab.blank_input_warning());
    }

    let mut failures = 0usize;
    let lines = app::results::search_lines(genius, tab, query, |e| {
        eprintln!("{}", app::results::error_message(e));
        failures += 1;
    })
    .await;
    for line in lines {
        writeln!(out, "{line}")?;
    }

    if failures > 0 {
        anyhow::bail!("{failures} Genius request(s) failed");
    }
    Ok(())
}

/// The TUI owns the terminal, so its logs go to a file under the data dir.
fn init_tracing(command: &Command, cfg: &config::Config) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_target(false).with_level(true);

    if matches!(command, Command::Tui) {
        let dir = &cfg.paths.data_dir;
        std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
        let path = dir.join("songseek.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("open {}", path.display()))?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}
