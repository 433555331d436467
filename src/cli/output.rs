//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `persona-lens` CLI

use serde::Serialize;

use crate::batch::ClassifiedPost;
use crate::diff::AxisShift;
use crate::diff::GapReport;
use crate::dimensions::PersonaProfile;
use crate::dimensions::PostStats;
use crate::insights::Insight;
use crate::presets::Preset;
use crate::targets::TargetProfile;
use crate::AppConfig;
use crate::Result;

const BAR_WIDTH: usize = 20;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// This prevents panics when truncating strings with multi-byte UTF-8 characters (emojis, etc.)
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Render a 0-1 value as a fixed-width bar
#[must_use]
pub fn value_bar(value: f32) -> String {
    let filled = (value.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Format a signed fraction as a percentage, e.g. `+12%`
#[must_use]
pub fn signed_percent(value: f32) -> String {
    let percent = (value * 100.0).round();
    if percent > 0.0 {
        format!("+{percent:.0}%")
    } else {
        format!("{:.0}%", percent + 0.0) // normalise -0
    }
}

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print classified posts
pub fn print_post_list(posts: &[ClassifiedPost]) {
    println!("Found {} posts:", posts.len());
    for post in posts {
        println!(
            "  #{:<2} | {:<12} | sentiment {:>5.2} | intensity {} | {}",
            post.sequence_index,
            post.category,
            post.sentiment_score,
            post.intensity,
            truncate_str(&post.original_text, 60)
        );
    }
}

/// Print persona profile
pub fn print_profile(profile: &PersonaProfile) {
    println!("🧭 Persona Profile:");
    for (axis, value) in profile.iter() {
        println!("  {:<18} {} {:.2}", axis.as_str(), value_bar(value), value);
    }
}

/// Print batch statistics
pub fn print_stats(stats: &PostStats) {
    println!("📊 Batch Statistics:");
    println!("  Posts: {}", stats.post_count);
    println!("  Avg sentiment: {:.2}", stats.avg_sentiment);
    println!("  Avg intensity: {:.2}", stats.avg_intensity);
    println!("  Dominant category: {}", stats.dominant_category);
    for (category, count) in &stats.category_counts {
        println!("    - {category}: {count}");
    }
    println!(
        "  Hedging / absolute / self-deprecation hits: {} / {} / {}",
        stats.hedging_hits, stats.absolute_hits, stats.self_deprecation_hits
    );
}

/// Print target archetype catalog
pub fn print_target_list(targets: &[TargetProfile]) {
    println!("🎯 {} target archetypes:", targets.len());
    for target in targets {
        println!();
        println!("  {} ({})  {}", target.name, target.id, target.color_hint);
        println!("  {}", target.description);
        for (axis, value) in target.dimensions.iter() {
            println!("    {:<18} {:.2}", axis.as_str(), value);
        }
    }
}

/// Print gap analysis against a target
pub fn print_gap_report(report: &GapReport) {
    println!("📐 Gap Analysis vs {} ({}):", report.target_name, report.target_id);
    for gap in &report.axes {
        let marker = if gap.aligned { "=" } else if gap.delta > 0.0 { "↑" } else { "↓" };
        println!(
            "  {:<18} current {:.2} | target {:.2} | {} {}",
            gap.axis.as_str(),
            gap.current,
            gap.target,
            marker,
            signed_percent(gap.delta)
        );
    }
    if report.is_aligned() {
        print_success("Aligned with target on every axis");
    }
}

/// Print language insights
pub fn print_insights(insights: &[Insight]) {
    if insights.is_empty() {
        print_info("No data to analyze.");
        return;
    }
    println!("💡 Insights:");
    for insight in insights {
        println!("  - {insight}");
    }
}

/// Print what-if simulation result
pub fn print_simulation(draft: &str, simulated: &PersonaProfile, shifts: &[AxisShift]) {
    println!("🔮 Simulation for draft: \"{}\"", truncate_str(draft, 60));
    print_profile(simulated);
    println!();
    if shifts.is_empty() {
        print_info("No noticeable shift predicted.");
        return;
    }
    println!("Predicted shift:");
    for shift in shifts {
        let arrow = if shift.shift > 0.0 { "↑" } else { "↓" };
        println!(
            "  {:<18} {} {:.2}%",
            shift.axis.as_str(),
            arrow,
            shift.shift.abs() * 100.0
        );
    }
}

/// Print built-in presets
pub fn print_preset_list(presets: &[Preset]) {
    println!("📚 {} presets:", presets.len());
    for preset in presets {
        println!(
            "  - {:<18} {} - {} ({} posts)",
            preset.slug,
            preset.title,
            preset.description,
            preset.lines.len()
        );
    }
}

/// Print configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 persona-lens Configuration:");
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.log_level());
    println!("  Backtrace: {}", config.logging.backtrace);
    println!(
        "  Directory: {}",
        config.log_directory().unwrap_or("(stderr only)")
    );
    println!();

    println!("🧠 Analysis:");
    println!("  Max posts per batch: {}", config.max_posts());
    println!("  Default target: {}", config.default_target());
}

/// Print colored output functions
pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    eprintln!("❌ {msg}");
}
