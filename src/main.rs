use clap::Parser;
use persona_lens::cli::{
    handle_analyze, handle_config, handle_gap, handle_insights, handle_presets, handle_simulate,
    handle_targets, print_error, Cli, Commands,
};
use persona_lens::config::AppConfig;
use persona_lens::Result;
use tracing::info;

fn main() {
    if let Err(e) = run() {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    let _guard = if cli.verbose {
        persona_lens::logging::init_logging_with_level("debug", config.log_directory())?
    } else {
        persona_lens::logging::init_logging_with_config(&config)?
    };
    info!("Configuration loaded successfully");

    // Execute the requested command
    match &cli.command {
        Commands::Analyze { input, stats } => handle_analyze(&config, input, *stats, cli.json),
        Commands::Targets => handle_targets(cli.json),
        Commands::Gap { input, target } => {
            handle_gap(&config, input, target.as_deref(), cli.json)
        }
        Commands::Insights { input } => handle_insights(&config, input, cli.json),
        Commands::Simulate { input, draft } => handle_simulate(&config, input, draft, cli.json),
        Commands::Presets => handle_presets(cli.json),
        Commands::Config => handle_config(&config, cli.json),
    }
}
