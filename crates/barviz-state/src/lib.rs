//! # barviz-state
//!
//! Reactive state for the barviz visual.
//! The host framework pushes data, viewport size and legend height on every
//! update; the chart components read them through Leptos signals.

use barviz_core::{ChartConfig, Result, TooltipData, VisualData, Viewport};
use leptos::prelude::*;

// ============================================================================
// VISUAL STATE
// ============================================================================

/// Visual state with reactive signals
#[derive(Clone, Copy)]
pub struct VisualState {
    /// Latest host payload
    pub data: RwSignal<Option<VisualData>>,
    /// Host viewport
    pub viewport: RwSignal<Viewport>,
    /// Legend height reported by the host, if any
    pub legend_height: RwSignal<Option<f64>>,
    /// Chart chrome settings
    pub settings: RwSignal<ChartConfig>,
    /// Tooltip content while a bar is hovered
    pub tooltip: RwSignal<Option<TooltipData>>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
}

impl VisualState {
    /// Create new visual state
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            viewport: RwSignal::new(Viewport::default()),
            legend_height: RwSignal::new(None),
            settings: RwSignal::new(ChartConfig::default()),
            tooltip: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    // ========================================================================
    // Host Updates
    // ========================================================================

    /// Replace data and viewport for a new render pass
    pub fn update(&self, data: VisualData, viewport: Viewport) {
        tracing::debug!(
            "Visual update: {} entries, viewport {}x{}",
            data.entries.len(),
            viewport.width,
            viewport.height
        );
        self.tooltip.set(None);
        self.viewport.set(viewport);
        self.data.set(Some(data));
        self.error.set(None);
    }

    /// Resize without new data
    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    pub fn set_legend_height(&self, height: Option<f64>) {
        self.legend_height.set(height);
    }

    /// Drop the current payload (chart shows its placeholder)
    pub fn clear(&self) {
        self.data.set(None);
        self.tooltip.set(None);
    }

    /// Check if there is anything to chart
    pub fn has_entries(&self) -> bool {
        self.data.with(|d| d.as_ref().is_some_and(|d| !d.is_empty()))
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Apply settings JSON from the host; invalid settings keep the previous ones
    pub fn apply_settings(&self, json: &str) -> Result<()> {
        match ChartConfig::from_json(json) {
            Ok(config) => {
                self.settings.set(config);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Ignoring chart settings: {}", e);
                self.error.set(Some(e.to_string()));
                Err(e)
            }
        }
    }

    // ========================================================================
    // Tooltip
    // ========================================================================

    pub fn show_tooltip(&self, content: TooltipData) {
        self.tooltip.set(Some(content));
    }

    /// Show the tooltip for a category of the current payload
    pub fn show_tooltip_for(&self, category: &str) -> bool {
        let content = self.data.with(|data| {
            data.as_ref().and_then(|data| {
                data.entries
                    .iter()
                    .find(|e| e.category == category)
                    .map(|entry| TooltipData::from_entry(data, entry))
            })
        });

        match content {
            Some(content) => {
                self.tooltip.set(Some(content));
                true
            }
            None => false,
        }
    }

    pub fn hide_tooltip(&self) {
        self.tooltip.set(None);
    }

    pub fn is_tooltip_shown(&self) -> bool {
        self.tooltip.with(|t| t.is_some())
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Clear error
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Check if has error
    pub fn has_error(&self) -> bool {
        self.error.with(|e| e.is_some())
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide visual state context to component tree
pub fn provide_visual_state() -> VisualState {
    let state = VisualState::new();
    provide_context(state);
    state
}

/// Use visual state from context
pub fn use_visual_state() -> VisualState {
    expect_context::<VisualState>()
}

/// Try to get visual state from context (returns None if not provided)
pub fn try_use_visual_state() -> Option<VisualState> {
    use_context::<VisualState>()
}
