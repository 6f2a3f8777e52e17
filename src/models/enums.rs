//! Enums used throughout sprint-lens
//!
//! This module contains the various enum types used for state management
//! and UI rendering.

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browse, // Default mode - navigate the report
    Recalibrate, // Calibration input box is open, keys go to the buffer
}

/// Overlay shown on top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    StoryDetail, // INVEST breakdown and improvements for the selected story
}

/// Sort mode for the story card list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorySortMode {
    #[default]
    Id, // Report order (ascending story ID)
    Hours,      // Highest estimate first
    Complexity, // Most complex first
}

impl StorySortMode {
    pub fn cycle(&self) -> Self {
        match self {
            StorySortMode::Id => StorySortMode::Hours,
            StorySortMode::Hours => StorySortMode::Complexity,
            StorySortMode::Complexity => StorySortMode::Id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorySortMode::Id => "ID",
            StorySortMode::Hours => "Hours",
            StorySortMode::Complexity => "Complexity",
        }
    }
}

/// Complexity band for color coding, matching the thresholds the report
/// uses everywhere: above 4 is high, above 2.5 is medium, the rest is low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityBand {
    Low,
    Medium,
    High,
}

impl ComplexityBand {
    pub fn from_complexity(complexity: f64) -> Self {
        if complexity > 4.0 {
            ComplexityBand::High
        } else if complexity > 2.5 {
            ComplexityBand::Medium
        } else {
            ComplexityBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplexityBand::Low => "low",
            ComplexityBand::Medium => "medium",
            ComplexityBand::High => "high",
        }
    }
}
