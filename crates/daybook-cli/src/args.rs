use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Maintain project memory over AI coding-session transcripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transcript root (overrides config and the conventional locations)
    #[arg(long, global = true)]
    pub transcript_dir: Option<PathBuf>,

    /// Project index file (overrides config and the data directory)
    #[arg(long, global = true)]
    pub index_path: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge newly discovered sessions into the project index
    Update {
        /// Skip daily summary generation
        #[arg(long)]
        no_summaries: bool,
    },

    /// Show index totals
    Stats,

    /// Show the blog-generation context for a day
    Context {
        /// Day to build context for (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Emit the full payload as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump one project's accumulated history
    History {
        #[arg(long)]
        project: String,
    },
}
