//! # barviz-charts
//!
//! Horizontal bar chart built with Leptos.
//! Computes the value scale and layout for each render and draws it as SVG.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Scale computation (linear)
//! - Tick label formatting and text measurement
//! - Pointer tracking (injected pointer sources)
//!
//! ## Modules
//!
//! - `scale` - Domain, tick generation, tick thinning, linear scale
//! - `layout` - Per-render chart layout
//! - `bars` - Bar segment geometry
//! - `measure` - Text width estimation
//! - `tooltip` - Pointer subscriptions and the tooltip component
//! - `bar_chart` - SVG chart component

pub mod bar_chart;
pub mod bars;
pub mod layout;
pub mod measure;
pub mod scale;
pub mod tooltip;

pub use bar_chart::*;
pub use bars::*;
pub use layout::*;
pub use measure::*;
pub use scale::*;
pub use tooltip::*;

// Re-export colors from barviz-core for convenience
pub use barviz_core::colors;

use barviz_core::Viewport;

/// Viewport minus fixed chart chrome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub width: f64,
    pub height: f64,
    /// Tick strip below the body
    pub axis_height: f64,
    pub legend_height: f64,
    /// Horizontal padding around the bar area
    pub padding: f64,
}

impl LayoutMetrics {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            axis_height: 0.0,
            legend_height: 0.0,
            padding: 0.0,
        }
    }

    pub fn axis_height(mut self, px: f64) -> Self {
        self.axis_height = px;
        self
    }

    pub fn legend_height(mut self, px: f64) -> Self {
        self.legend_height = px;
        self
    }

    pub fn padding(mut self, px: f64) -> Self {
        self.padding = px;
        self
    }

    /// Width available to bars
    pub fn chart_width(&self) -> f64 {
        (self.width - self.padding).max(0.0)
    }

    /// Height left for the body once the axis strip and legend are removed (may be negative)
    pub fn available_body_height(&self) -> f64 {
        self.height - self.axis_height - self.legend_height
    }

    /// Content taller than the visible area scrolls; equal height does not
    pub fn needs_scroll(&self, content_height: f64) -> bool {
        self.available_body_height() < content_height
    }

    /// Visible body height
    pub fn body_height(&self, content_height: f64) -> f64 {
        self.available_body_height().min(content_height).max(0.0)
    }
}
