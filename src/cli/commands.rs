//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "persona-lens")]
#[command(about = "Map short posts to a five-axis persona profile, compare it with archetypes and simulate new posts")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: level from config)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file (default: persona-lens.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where post lines come from. Reads stdin when neither flag is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read posts from a file, one post per line
    #[arg(short, long, conflicts_with = "preset")]
    pub file: Option<PathBuf>,

    /// Use a built-in sample post set (see `presets`)
    #[arg(short, long)]
    pub preset: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify posts and compute the persona profile
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        /// Also print batch statistics
        #[arg(long)]
        stats: bool,
    },
    /// List the built-in target archetypes
    Targets,
    /// Compare the persona profile with a target archetype
    Gap {
        #[command(flatten)]
        input: InputArgs,
        /// Target archetype id (default: analysis.default_target from config)
        #[arg(short, long)]
        target: Option<String>,
    },
    /// Show language insights for the posts
    Insights {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Predict how one more post would shift the profile
    Simulate {
        #[command(flatten)]
        input: InputArgs,
        /// Draft post to add
        #[arg(short, long)]
        draft: String,
    },
    /// List the built-in sample post sets
    Presets,
    /// Show the effective configuration
    Config,
}
