//! Data models for sprint-lens
//!
//! This module contains the core data structures:
//! - Report, story and INVEST evaluation types for loading res.json
//! - Enums for state management

pub mod enums;
pub mod report;

// Re-exports for convenient access
pub use enums::{ComplexityBand, Mode, Overlay, StorySortMode};
pub use report::{InvestCriterion, InvestEvaluation, Metadata, Report, Story};
