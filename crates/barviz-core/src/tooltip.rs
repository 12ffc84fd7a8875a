//! Tooltip content model

use crate::{Entry, VisualData};
use serde::{Deserialize, Serialize};

/// Pointer location in page coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One measure line in the tooltip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRow {
    pub measure_name: String,
    pub color: String,
    pub display_value: String,
}

/// Content shown while hovering a category bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipData {
    pub category_title: String,
    pub category_value: String,
    pub rows: Vec<TooltipRow>,
}

impl TooltipData {
    /// Build tooltip content for `entry`, resolving measure names and colours
    pub fn from_entry(data: &VisualData, entry: &Entry) -> Self {
        let rows = entry
            .data_points
            .iter()
            .map(|point| TooltipRow {
                measure_name: data
                    .measure(point.measure_index)
                    .map(|m| m.display_name.clone())
                    .unwrap_or_default(),
                color: data.measure_color(point.measure_index),
                display_value: point.display_value.clone(),
            })
            .collect();

        Self {
            category_title: data.category.display_name.clone(),
            category_value: entry.category.clone(),
            rows,
        }
    }
}
