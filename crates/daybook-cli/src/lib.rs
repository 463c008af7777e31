mod args;
mod handlers;

pub use args::{Cli, Commands};

use anyhow::Result;
use daybook_memory::{Config, ProjectMemory};

pub fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.transcript_dir {
        config.transcript_dir = Some(dir);
    }
    if let Some(path) = cli.index_path {
        config.index_path = Some(path);
    }

    let mut memory = ProjectMemory::from_config(&config)?;

    match cli.command {
        Commands::Update { no_summaries } => handlers::update::handle(&mut memory, no_summaries),
        Commands::Stats => handlers::stats::handle(&memory),
        Commands::Context { date, json } => {
            handlers::context::handle(&memory, date.as_deref(), json)
        }
        Commands::History { project } => handlers::history::handle(&memory, &project),
    }
}
