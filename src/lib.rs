//! Rule-based text-to-persona inference.
//!
//! Raw lines go through [`batch::analyze_batch`] (scored one by one by
//! [`classifier::classify`]), the resulting posts are reduced to a
//! [`dimensions::PersonaProfile`] by [`dimensions::aggregate`], and the
//! profile can be compared with a [`targets`] archetype or re-run with a
//! hypothetical extra post via [`diff::simulate`].

pub mod batch;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod diff;
pub mod dimensions;
pub mod errors;
pub mod insights;
pub mod lexicon;
pub mod logging;
pub mod presets;
pub mod targets;

#[cfg(test)]
pub mod tests;

pub use batch::{analyze_batch, analyze_text, ClassifiedPost, MAX_POSTS};
pub use classifier::{classify, PostAnalysis, PostCategory};
pub use config::AppConfig;
pub use diff::{diff, predicted_shift, simulate, DimensionDelta, GapReport};
pub use dimensions::{aggregate, Axis, PersonaProfile, PostStats};
pub use errors::*;
pub use insights::{generate_insights, Insight, InsightKind};
pub use targets::{find_target, list_targets, TargetProfile};
