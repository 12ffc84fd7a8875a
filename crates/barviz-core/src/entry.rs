//! Category entries and the host data payload

use crate::colors;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Single measure value within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Index into [`VisualData::measures`]
    pub measure_index: usize,
    pub value: f64,
    /// Host-formatted value shown in tooltips
    #[serde(default)]
    pub display_value: String,
}

impl DataPoint {
    pub fn new(measure_index: usize, value: f64) -> Self {
        Self {
            measure_index,
            value,
            display_value: value.to_string(),
        }
    }

    pub fn with_display(mut self, display_value: impl Into<String>) -> Self {
        self.display_value = display_value.into();
        self
    }
}

/// One category's aggregated data for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Category value shown in the labels column
    pub category: String,
    pub data_points: Vec<DataPoint>,
    /// Sum of all data point values
    pub sum: f64,
}

impl Entry {
    /// Create entry, deriving `sum` from the data points
    pub fn new(category: impl Into<String>, data_points: Vec<DataPoint>) -> Self {
        let sum = data_points.iter().map(|p| p.value).sum();
        Self {
            category: category.into(),
            data_points,
            sum,
        }
    }

    /// Value of the first data point (drives display order)
    pub fn lead_value(&self) -> Option<f64> {
        self.data_points.first().map(|p| p.value)
    }

    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }
}

/// Descending by lead value; entries without data points go last
fn display_cmp(a: &Entry, b: &Entry) -> Ordering {
    match (a.lead_value(), b.lead_value()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Entries in display order as a new vector (stable sort)
pub fn display_order(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(display_cmp);
    sorted
}

/// Measure (value column) metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureData {
    pub display_name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl MeasureData {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Category (row) metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    #[serde(default)]
    pub display_name: String,
    /// Pixel width of the widest category label
    pub max_width: f64,
}

impl CategoryData {
    pub fn new(display_name: impl Into<String>, max_width: f64) -> Self {
        Self {
            display_name: display_name.into(),
            max_width,
        }
    }
}

/// Fully prepared payload handed over by the host on every update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualData {
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub measures: Vec<MeasureData>,
    pub category: CategoryData,
}

impl VisualData {
    pub fn new(entries: Vec<Entry>, measures: Vec<MeasureData>, category: CategoryData) -> Self {
        Self {
            entries,
            measures,
            category,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn measure(&self, index: usize) -> Option<&MeasureData> {
        self.measures.get(index)
    }

    /// Host colour for a measure, palette colour otherwise
    pub fn measure_color(&self, index: usize) -> String {
        self.measure(index)
            .and_then(|m| m.color.clone())
            .unwrap_or_else(|| colors::palette(index).to_string())
    }
}
