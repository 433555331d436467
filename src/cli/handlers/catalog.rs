//! Catalog and configuration command handlers

use crate::cli::output::{print_config, print_json, print_preset_list, print_target_list};
use crate::presets::PRESETS;
use crate::targets::list_targets;
use crate::AppConfig;
use crate::Result;

/// Handle targets command
pub fn handle_targets(json: bool) -> Result<()> {
    let targets = list_targets();
    if json {
        return print_json(&targets);
    }
    print_target_list(&targets);
    Ok(())
}

/// Handle presets command
pub fn handle_presets(json: bool) -> Result<()> {
    if json {
        return print_json(PRESETS);
    }
    print_preset_list(PRESETS);
    Ok(())
}

/// Handle config command
pub fn handle_config(config: &AppConfig, json: bool) -> Result<()> {
    if json {
        return print_json(config);
    }
    print_config(config);
    Ok(())
}
