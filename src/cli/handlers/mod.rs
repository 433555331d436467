//! CLI command handlers module
//!
//! This module is organized by functional domains:
//! - input: Reading post lines from files, presets or stdin
//! - analysis: Post classification, profile, insights
//! - catalog: Target archetypes, presets, configuration
//! - simulate: Gap analysis and what-if simulation

pub mod analysis;
pub mod catalog;
pub mod input;
pub mod simulate;

// Re-export all public handlers
pub use analysis::*;
pub use catalog::*;
pub use input::*;
pub use simulate::*;
