//! Theme module for sprint-lens
//!
//! This module provides a centralized color palette and styling constants
//! for the report dashboard.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::ComplexityBand;

/// Border set used by every card and popup.
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color - cards (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Tertiary background color - for highlighted areas (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Complexity Colors
// ============================================================================

/// Primary accent, also the low-complexity color (#00d4aa)
pub const TEAL_PRIMARY: Color = Color::Rgb(0, 212, 170);

/// Dimmed teal for secondary elements (#0a8a6e)
pub const TEAL_DIM: Color = Color::Rgb(10, 138, 110);

/// Medium-complexity accent (#fbbf24)
pub const AMBER_ACCENT: Color = Color::Rgb(251, 191, 36);

/// High-complexity / problematic color (#f87171)
pub const RED_DANGER: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Color for a complexity band, the single place the band-to-color mapping
/// lives so cards, charts and the distribution all agree.
pub fn complexity_color(band: ComplexityBand) -> Color {
    match band {
        ComplexityBand::Low => TEAL_PRIMARY,
        ComplexityBand::Medium => AMBER_ACCENT,
        ComplexityBand::High => RED_DANGER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complexity_color_bands() {
        assert_eq!(complexity_color(ComplexityBand::Low), TEAL_PRIMARY);
        assert_eq!(complexity_color(ComplexityBand::Medium), AMBER_ACCENT);
        assert_eq!(complexity_color(ComplexityBand::High), RED_DANGER);
    }
}
