pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ResolveOptions;

#[derive(Parser)]
#[command(name = "iconhound")]
#[command(about = "Discover a site's icons, titles and descriptions", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/iconhound/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum concurrent icon fetches when reading metadata
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve icons, titles and descriptions for a page
    Resolve {
        #[command(flatten)]
        request: RequestArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List resolved icons, one per line
    Icons {
        #[command(flatten)]
        request: RequestArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Page URL (http or https)
    pub url: String,

    /// Fetch every icon and report its dimensions and format
    #[arg(short, long)]
    pub metadata: bool,

    /// Timeout for each request in milliseconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// User-Agent header to send instead of the default browser one
    #[arg(short = 'A', long)]
    pub user_agent: Option<String>,
}

impl RequestArgs {
    /// Layer command-line flags over the configured options.
    pub fn apply(&self, base: &ResolveOptions) -> ResolveOptions {
        let mut options = base.clone();
        if self.metadata {
            options.include_metadata = true;
        }
        if let Some(timeout) = self.timeout {
            options.timeout_ms = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            options.user_agent = Some(user_agent.clone());
        }
        options
    }
}
