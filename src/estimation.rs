//! Effort estimation engine.
//!
//! The one real computation in the tool: converts a story's complexity
//! rating plus two calibration inputs into an hours estimate. Everything
//! here is pure arithmetic with no I/O and no state, so recalibration is
//! just a fresh pass over the raw stories.

use crate::models::Story;

/// Working hours in a reference sprint (a 10-day sprint is 78 hours).
pub const SPRINT_HOURS: f64 = 78.0;

/// Fixed team-load deduction in percent. Negative means capacity lost to
/// non-story work.
pub const TEAM_LOAD_ADJUSTMENT_PCT: f64 = -20.0;

/// Share of sprint hours consumed by ceremonies, split across all stories.
pub const OVERHEAD_RATE: f64 = 0.15;

/// Top of the nominal complexity scale. Calibration is defined as the hours
/// a story of this complexity takes.
pub const MAX_COMPLEXITY: f64 = 5.0;

/// Derive the per-complexity-unit rate from the user's calibration value
/// (hours for a maximum-complexity story).
pub fn hours_per_complexity_unit(calibration_hours: f64) -> f64 {
    calibration_hours / MAX_COMPLEXITY
}

/// Estimate hours for a single story.
///
/// `complexity` is not validated against the nominal 1..=5 scale; any
/// positive value is accepted and the caller is responsible for rejecting
/// nonsense before it gets here. `total_stories` below 1 is clamped to 1 so
/// an empty batch cannot divide by zero.
///
/// The result is rounded to one decimal place.
pub fn estimate(complexity: f64, total_stories: usize, hours_per_unit: f64) -> f64 {
    let base = hours_per_unit * complexity;

    // Ceremony overhead, distributed across the batch
    let overhead_total = SPRINT_HOURS * OVERHEAD_RATE;
    let overhead_per_story = overhead_total / total_stories.max(1) as f64;

    // Team load adjustment (%)
    let adjusted = base * (1.0 + TEAM_LOAD_ADJUSTMENT_PCT / 100.0);

    let hours = adjusted + overhead_per_story;
    (hours * 10.0).round() / 10.0
}

/// Recompute and attach the estimate for every story in the batch.
///
/// Called on initial load, on report reload, and on every recalibration.
/// Estimates are always derived from the raw complexity values, never from
/// previously computed estimates.
pub fn apply_estimates(stories: &mut [Story], calibration_hours: f64) {
    let rate = hours_per_complexity_unit(calibration_hours);
    let total = stories.len();
    for story in stories.iter_mut() {
        story.estimated_hours = estimate(story.complexity, total, rate);
    }
}
