//! # barviz-core
//!
//! Core domain types for the barviz bar chart visual.
//! Implements Strategy pattern for tick label formatting.

pub mod config;
pub mod entry;
pub mod error;
pub mod tooltip;

pub use config::*;
pub use entry::*;
pub use error::*;
pub use tooltip::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for axis tick labels
pub trait TickLabelFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Shortest round-trip representation (`100`, `2.5`, `-300`)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTickFormatter;

impl TickLabelFormatter for PlainTickFormatter {
    fn format(&self, value: f64) -> String {
        // -0 renders as 0 on the axis
        if value == 0.0 {
            return "0".to_string();
        }
        format!("{}", value)
    }
}

// ============================================================================
// CORE VALUE TYPES
// ============================================================================

/// Host viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(400.0, 300.0)
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const LINE: &str = "#c8c8c8";
    pub const GRID: &str = "#eaeaea";
    pub const TEXT_PRIMARY: &str = "#252423";
    pub const TEXT_MUTED: &str = "#605e5c";
    pub const TOOLTIP_BG: &str = "#ffffff";
    pub const TOOLTIP_BORDER: &str = "#d2d0ce";

    /// Fallback palette for measures without a host-assigned colour
    pub const PALETTE: [&str; 6] = [
        "#01b8aa", "#374649", "#fd625e", "#f2c80f", "#5f6b6d", "#8ad4eb",
    ];

    pub fn palette(index: usize) -> &'static str {
        PALETTE[index % PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter() {
        let formatter = PlainTickFormatter;
        assert_eq!(formatter.format(100.0), "100");
        assert_eq!(formatter.format(-2.5), "-2.5");
        assert_eq!(formatter.format(-0.0), "0");
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(colors::palette(0), colors::palette(colors::PALETTE.len()));
    }
}
