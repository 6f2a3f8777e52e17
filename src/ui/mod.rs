//! UI module for sprint-lens
//!
//! This module contains the rendering functions for the report dashboard:
//! header and summary cards, charts, story cards, and popup overlays.

mod charts;
mod dashboard;
mod helpers;
mod overlay;
mod stories;
mod summary;

pub use dashboard::render_dashboard;
