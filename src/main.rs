mod app;
mod render;
mod ui;

use agenda_core::AgendaConfig;
use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::ui::form::TerminalForm;
use crate::ui::list::{TerminalDeletePrompt, TerminalList};

#[derive(Parser)]
#[command(name = "agenda", version)]
#[command(about = "Manage calendar events for a terminal session")]
struct Cli {
    /// Override the configured default event duration (e.g. "45m", "2h")
    #[arg(long)]
    duration: Option<String>,
}

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so log lines never garble the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AgendaConfig::load()?;
    if let Some(duration) = cli.duration {
        config.default_duration = Some(duration);
    }

    let mut form = TerminalForm::new(&config)?;
    let mut list = TerminalList::new(&config);
    let mut prompt = TerminalDeletePrompt;

    let mut app = App::new();
    app.run(&mut form, &mut list, &mut prompt)?;

    let count = app.agenda().len();
    if count > 0 {
        println!(
            "{}",
            format!(
                "{} {} discarded; sessions are not persisted.",
                count,
                if count == 1 { "event" } else { "events" }
            )
            .dimmed()
        );
    }

    Ok(())
}
