//! Bar geometry for each category row
//!
//! Segments stack outward from the zero line: positive values grow to the
//! right, negative values to the left.

use crate::{layout::ChartLayout, scale::Scale};

/// One measure's rectangle within a row
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub measure_index: usize,
    pub value: f64,
    pub display_value: String,
    pub x: f64,
    pub width: f64,
}

/// One category row
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    /// Position in display order
    pub index: usize,
    pub category: String,
    /// Top of the bar rectangle
    pub y: f64,
    /// Bar thickness
    pub height: f64,
    /// Vertical centre of the row, used for labels
    pub center_y: f64,
    pub segments: Vec<BarSegment>,
}

/// Lay out every displayed entry as a stacked bar row
pub fn layout_bars(layout: &ChartLayout) -> Vec<BarRow> {
    let zero_x = layout.scale.scale(0.0);
    let thickness = (layout.bar_height - layout.bar_padding).max(0.0);

    layout
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let row_top = index as f64 * layout.bar_height;
            let mut positive_edge = zero_x;
            let mut negative_edge = zero_x;

            let segments = entry
                .data_points
                .iter()
                .map(|point| {
                    let width = layout.scale.extent(point.value);
                    let x = if point.value >= 0.0 {
                        let x = positive_edge;
                        positive_edge += width;
                        x
                    } else {
                        negative_edge -= width;
                        negative_edge
                    };

                    BarSegment {
                        measure_index: point.measure_index,
                        value: point.value,
                        display_value: point.display_value.clone(),
                        x,
                        width,
                    }
                })
                .collect();

            BarRow {
                index,
                category: entry.category.clone(),
                y: row_top + (layout.bar_height - thickness) / 2.0,
                height: thickness,
                center_y: row_top + layout.bar_height / 2.0,
                segments,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use barviz_core::{CategoryData, ChartConfig, DataPoint, Entry, MeasureData, VisualData, Viewport};

    fn layout(entries: Vec<Entry>) -> ChartLayout {
        let data = VisualData::new(
            entries,
            vec![MeasureData::new("A"), MeasureData::new("B")],
            CategoryData::new("Cat", 40.0),
        );
        let config = ChartConfig::new().chart_padding(20.0).bar_height(20.0).bar_padding(4.0);
        ChartLayout::compute(&data, Viewport::new(420.0, 400.0), None, &config).unwrap()
    }

    #[test]
    fn test_positive_segments_stack_right() {
        let l = layout(vec![Entry::new(
            "x",
            vec![DataPoint::new(0, 100.0), DataPoint::new(1, 100.0)],
        )]);
        // domain (0, 200) over 400px
        let rows = layout_bars(&l);
        let segs = &rows[0].segments;
        assert_eq!(segs[0].x, 0.0);
        assert_eq!(segs[0].width, 200.0);
        assert_eq!(segs[1].x, 200.0);
        assert_eq!(segs[1].width, 200.0);
        assert_eq!(rows[0].y, 2.0);
        assert_eq!(rows[0].height, 16.0);
        assert_eq!(rows[0].center_y, 10.0);
    }

    #[test]
    fn test_negative_segments_grow_left_of_zero() {
        let l = layout(vec![
            Entry::new("pos", vec![DataPoint::new(0, 300.0)]),
            Entry::new("neg", vec![DataPoint::new(0, -50.0), DataPoint::new(1, -50.0)]),
        ]);
        // domain (-100, 300) over 400px, zero at 100
        let rows = layout_bars(&l);
        let neg = &rows[1];
        assert_eq!(neg.category, "neg");
        assert_eq!(neg.segments[0].x, 50.0);
        assert_eq!(neg.segments[0].width, 50.0);
        assert_eq!(neg.segments[1].x, 0.0);
        assert_eq!(neg.y, 22.0);
    }
}
