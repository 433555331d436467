//! Analysis command handlers

use serde::Serialize;

use crate::batch::ClassifiedPost;
use crate::cli::commands::InputArgs;
use crate::cli::handlers::input::load_posts;
use crate::cli::output::{print_insights, print_json, print_post_list, print_profile, print_stats};
use crate::dimensions::{aggregate, PersonaProfile, PostStats};
use crate::insights::{generate_insights, Insight};
use crate::AppConfig;
use crate::Result;

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub posts: Vec<ClassifiedPost>,
    pub profile: PersonaProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PostStats>,
}

#[derive(Debug, Serialize)]
pub struct InsightsReport {
    pub profile: PersonaProfile,
    pub insights: Vec<Insight>,
}

/// Handle analyze command
pub fn handle_analyze(config: &AppConfig, input: &InputArgs, stats: bool, json: bool) -> Result<()> {
    let posts = load_posts(config, input)?;
    let report = AnalysisReport {
        profile: aggregate(&posts),
        stats: stats.then(|| PostStats::from_posts(&posts)),
        posts,
    };

    if json {
        return print_json(&report);
    }

    print_post_list(&report.posts);
    println!();
    print_profile(&report.profile);
    if let Some(stats) = &report.stats {
        println!();
        print_stats(stats);
    }

    Ok(())
}

/// Handle insights command
pub fn handle_insights(config: &AppConfig, input: &InputArgs, json: bool) -> Result<()> {
    let posts = load_posts(config, input)?;
    let profile = aggregate(&posts);
    let report = InsightsReport {
        insights: generate_insights(&posts, &profile),
        profile,
    };

    if json {
        return print_json(&report);
    }

    print_profile(&report.profile);
    println!();
    print_insights(&report.insights);

    Ok(())
}
