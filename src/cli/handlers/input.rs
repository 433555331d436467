//! Input loading for post-consuming commands

use std::io::Read;

use tracing::info;

use crate::batch::analyze_batch_with_limit;
use crate::batch::ClassifiedPost;
use crate::cli::commands::InputArgs;
use crate::presets::find_preset;
use crate::AppConfig;
use crate::Result;

/// Read raw lines from a preset, a file or stdin (in that order of preference)
pub fn read_lines(input: &InputArgs) -> Result<Vec<String>> {
    if let Some(slug) = &input.preset {
        let preset = find_preset(slug)?;
        return Ok(preset.lines.iter().map(|line| (*line).to_string()).collect());
    }

    let text = match &input.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(text.lines().map(str::to_string).collect())
}

/// Read input lines and run them through the batch analyzer
pub fn load_posts(config: &AppConfig, input: &InputArgs) -> Result<Vec<ClassifiedPost>> {
    let lines = read_lines(input)?;
    let posts = analyze_batch_with_limit(&lines, config.max_posts());

    info!(lines = lines.len(), posts = posts.len(), "Analyzed input");

    Ok(posts)
}
