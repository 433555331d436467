//! Gap analysis and what-if simulation over persona profiles

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::batch::ClassifiedPost;
use crate::dimensions::aggregate;
use crate::dimensions::Axis;
use crate::dimensions::PersonaProfile;
use crate::targets::TargetProfile;

/// An axis counts as aligned with its target below this absolute gap
pub const ALIGNMENT_THRESHOLD: f32 = 0.1;

/// Simulated shifts smaller than this are not reported
pub const SHIFT_EPSILON: f32 = 0.005;

/// Signed per-axis difference, target - current. Not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionDelta {
    pub extraversion: f32,
    pub emotionality: f32,
    pub warmth: f32,
    pub conscientiousness: f32,
    pub confidence: f32,
}

impl DimensionDelta {
    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Extraversion => self.extraversion,
            Axis::Emotionality => self.emotionality,
            Axis::Warmth => self.warmth,
            Axis::Conscientiousness => self.conscientiousness,
            Axis::Confidence => self.confidence,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, f32)> + '_ {
        Axis::ALL
            .into_iter()
            .map(move |axis| (axis, self.get(axis)))
    }
}

/// Elementwise `target - current`
pub fn diff(current: &PersonaProfile, target: &PersonaProfile) -> DimensionDelta {
    DimensionDelta {
        extraversion: target.extraversion - current.extraversion,
        emotionality: target.emotionality - current.emotionality,
        warmth: target.warmth - current.warmth,
        conscientiousness: target.conscientiousness - current.conscientiousness,
        confidence: target.confidence - current.confidence,
    }
}

/// Profile that would result from adding `hypothetical` as one more post.
///
/// `existing` is left untouched; the extra post is scratch state. A blank
/// draft changes nothing and `current` is returned as is.
pub fn simulate(
    existing: &[ClassifiedPost],
    hypothetical: &str,
    current: &PersonaProfile,
) -> PersonaProfile {
    let draft = hypothetical.trim();
    if draft.is_empty() {
        return *current;
    }

    let batch_millis = chrono::Utc::now().timestamp_millis();
    let mut combined = existing.to_vec();
    combined.push(ClassifiedPost::new(draft, existing.len(), batch_millis));

    let simulated = aggregate(&combined);
    debug!(
        existing = existing.len(),
        ?simulated,
        "Simulated profile with draft post"
    );

    simulated
}

/// One row of a gap report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGap {
    pub axis: Axis,
    pub current: f32,
    pub target: f32,
    pub delta: f32,
    pub aligned: bool,
}

/// Current profile compared axis by axis with a target archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub target_id: String,
    pub target_name: String,
    pub delta: DimensionDelta,
    pub axes: Vec<AxisGap>,
}

impl GapReport {
    pub fn new(current: &PersonaProfile, target: &TargetProfile) -> Self {
        let delta = diff(current, &target.dimensions);

        let axes = delta
            .iter()
            .map(|(axis, gap)| AxisGap {
                axis,
                current: current.get(axis),
                target: target.dimensions.get(axis),
                delta: gap,
                aligned: gap.abs() < ALIGNMENT_THRESHOLD,
            })
            .collect();

        Self {
            target_id: target.id.clone(),
            target_name: target.name.clone(),
            delta,
            axes,
        }
    }

    /// Axes whose gap is at least the alignment threshold
    pub fn misaligned(&self) -> impl Iterator<Item = &AxisGap> {
        self.axes.iter().filter(|gap| !gap.aligned)
    }

    pub fn is_aligned(&self) -> bool {
        self.axes.iter().all(|gap| gap.aligned)
    }
}

/// A noticeable change on one axis after a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisShift {
    pub axis: Axis,
    pub shift: f32, // simulated - current
}

/// Per-axis `simulated - current`, skipping shifts below [`SHIFT_EPSILON`]
pub fn predicted_shift(current: &PersonaProfile, simulated: &PersonaProfile) -> Vec<AxisShift> {
    diff(current, simulated)
        .iter()
        .filter(|(_, shift)| shift.abs() >= SHIFT_EPSILON)
        .map(|(axis, shift)| AxisShift { axis, shift })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::analyze_batch;
    use crate::targets::find_target;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_diff_uniform_profiles() {
        let delta = diff(&PersonaProfile::uniform(0.3), &PersonaProfile::uniform(0.9));
        for (_, value) in delta.iter() {
            assert!(approx(value, 0.6));
        }
    }

    #[test]
    fn test_diff_is_signed_and_unclamped() {
        let delta = diff(&PersonaProfile::uniform(1.0), &PersonaProfile::uniform(0.0));
        assert_eq!(delta.warmth, -1.0);
    }

    #[test]
    fn test_simulate_blank_draft_is_noop() {
        let posts = analyze_batch(&["worst day ever"]);
        let current = aggregate(&posts);

        assert_eq!(simulate(&posts, "   ", &current), current);
        assert_eq!(simulate(&posts, "", &current), current);
    }

    #[test]
    fn test_simulate_matches_extended_aggregate() {
        let posts = analyze_batch(&["worst day ever", "coffee with mom"]);
        let current = aggregate(&posts);

        let simulated = simulate(&posts, "Finally finished the marathon!", &current);
        let expected = aggregate(&analyze_batch(&[
            "worst day ever",
            "coffee with mom",
            "Finally finished the marathon!",
        ]));

        assert_eq!(simulated, expected);
    }

    #[test]
    fn test_simulate_does_not_mutate_existing() {
        let posts = analyze_batch(&["hello there"]);
        let before = posts.clone();
        let current = aggregate(&posts);

        let _ = simulate(&posts, "I won!", &current);
        assert_eq!(posts, before);
    }

    #[test]
    fn test_simulate_on_empty_collection() {
        let simulated = simulate(&[], "graduated", &PersonaProfile::neutral());
        assert!(approx(simulated.conscientiousness, 1.0));
        assert!(approx(simulated.confidence, 0.8));
    }

    #[test]
    fn test_gap_report_alignment() {
        let observer = find_target("observer").unwrap();
        let current = PersonaProfile {
            extraversion: 0.25,
            emotionality: 0.9,
            warmth: 0.5,
            conscientiousness: 0.1,
            confidence: 0.6,
        };
        let report = GapReport::new(&current, &observer);

        assert_eq!(report.target_id, "observer");
        assert_eq!(report.axes.len(), 5);
        assert!(report.axes[0].aligned); // 0.2 vs 0.25
        assert!(!report.axes[1].aligned); // 0.3 vs 0.9
        assert!(report.axes[1].delta < 0.0);
        assert!(!report.axes[3].aligned); // 0.7 vs 0.1
        assert!(report.axes[3].delta > 0.0);
        assert_eq!(report.misaligned().count(), 2);
        assert!(!report.is_aligned());
    }

    #[test]
    fn test_gap_report_identical_profile() {
        let warm = find_target("warm").unwrap();
        let report = GapReport::new(&warm.dimensions, &warm);
        assert!(report.is_aligned());
    }

    #[test]
    fn test_predicted_shift_filters_small_changes() {
        let current = PersonaProfile::uniform(0.5);
        let simulated = PersonaProfile {
            extraversion: 0.502,
            emotionality: 0.5,
            warmth: 0.6,
            conscientiousness: 0.4,
            confidence: 0.5,
        };
        let shifts = predicted_shift(&current, &simulated);

        assert_eq!(shifts.len(), 2);
        assert_eq!(shifts[0].axis, Axis::Warmth);
        assert!(approx(shifts[0].shift, 0.1));
        assert_eq!(shifts[1].axis, Axis::Conscientiousness);
        assert!(shifts[1].shift < 0.0);
    }
}
