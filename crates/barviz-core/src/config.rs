//! Chart chrome configuration

use crate::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// Fixed chart chrome sizes (pixels)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Height of the tick strip below the chart body
    pub ticks_height: f64,
    /// Thickness of one category row
    pub bar_height: f64,
    /// Legend height used when the host does not report one
    pub legend_height: f64,
    /// Gap between the labels column and the bars
    pub labels_padding: f64,
    /// Horizontal space reserved around the bar area
    pub chart_padding: f64,
    /// Vertical gap inside each row, split above and below the bar
    pub bar_padding: f64,
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
    /// Average glyph width used by the default text measurer
    pub char_width: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ticks_height: 30.0,
            bar_height: 30.0,
            legend_height: 40.0,
            labels_padding: 10.0,
            chart_padding: 20.0,
            bar_padding: 6.0,
            tooltip_offset_x: 10.0,
            tooltip_offset_y: 10.0,
            char_width: 7.0,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse partial settings JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn ticks_height(mut self, px: f64) -> Self {
        self.ticks_height = px;
        self
    }

    pub fn bar_height(mut self, px: f64) -> Self {
        self.bar_height = px;
        self
    }

    pub fn legend_height(mut self, px: f64) -> Self {
        self.legend_height = px;
        self
    }

    pub fn labels_padding(mut self, px: f64) -> Self {
        self.labels_padding = px;
        self
    }

    pub fn chart_padding(mut self, px: f64) -> Self {
        self.chart_padding = px;
        self
    }

    pub fn bar_padding(mut self, px: f64) -> Self {
        self.bar_padding = px;
        self
    }

    pub fn tooltip_offset(mut self, x: f64, y: f64) -> Self {
        self.tooltip_offset_x = x;
        self.tooltip_offset_y = y;
        self
    }

    pub fn char_width(mut self, px: f64) -> Self {
        self.char_width = px;
        self
    }

    /// Reject negative or non-finite sizes
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("ticksHeight", self.ticks_height),
            ("barHeight", self.bar_height),
            ("legendHeight", self.legend_height),
            ("labelsPadding", self.labels_padding),
            ("chartPadding", self.chart_padding),
            ("barPadding", self.bar_padding),
            ("charWidth", self.char_width),
        ];

        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                tracing::warn!("Rejecting chart setting {} = {}", name, value);
                return Err(ChartError::InvalidSetting { name, value });
            }
        }

        for (name, value) in [
            ("tooltipOffsetX", self.tooltip_offset_x),
            ("tooltipOffsetY", self.tooltip_offset_y),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidSetting { name, value });
            }
        }

        Ok(())
    }

    /// Host legend height when positive, configured default otherwise
    pub fn resolve_legend_height(&self, host: Option<f64>) -> f64 {
        host.filter(|h| *h > 0.0).unwrap_or(self.legend_height)
    }
}
