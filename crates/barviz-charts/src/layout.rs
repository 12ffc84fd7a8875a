//! Chart layout for one render pass
//!
//! Resolves the domain, builds the tick axis and decides between a fixed and
//! a scrolling body from the host viewport.

use crate::{
    measure::{CharWidthMeasurer, TextMeasurer},
    scale::{position_ticks, Domain, LinearScale, Tick, TickValues},
    LayoutMetrics,
};
use barviz_core::{
    display_order, ChartConfig, Entry, PlainTickFormatter, Result, TickLabelFormatter, VisualData,
    Viewport,
};

/// Everything the rendering components need for one pass
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub domain: Domain,
    /// Tick values after density reduction
    pub tick_values: Vec<f64>,
    pub ticks: Vec<Tick>,
    /// Vertical grid lines, one per tick
    pub grid_lines: Vec<Tick>,
    pub scale: LinearScale,
    pub metrics: LayoutMetrics,
    /// Body overflows the visible area and scrolls
    pub scroll: bool,
    /// Full content height (all rows)
    pub chart_height: f64,
    /// Width of the bar area
    pub chart_width: f64,
    /// Visible body height
    pub body_height: f64,
    /// Width of the category labels column
    pub labels_width: f64,
    pub bar_height: f64,
    pub bar_padding: f64,
    /// Entries in display order
    pub entries: Vec<Entry>,
}

impl ChartLayout {
    /// Compute layout with plain tick labels and the configured glyph width
    pub fn compute(
        data: &VisualData,
        viewport: Viewport,
        legend_height: Option<f64>,
        config: &ChartConfig,
    ) -> Result<Self> {
        let measurer = CharWidthMeasurer::new(config.char_width);
        Self::compute_with(data, viewport, legend_height, config, &PlainTickFormatter, &measurer)
    }

    /// Compute layout with a custom label formatter and text measurer
    pub fn compute_with(
        data: &VisualData,
        viewport: Viewport,
        legend_height: Option<f64>,
        config: &ChartConfig,
        formatter: &dyn TickLabelFormatter,
        measurer: &dyn TextMeasurer,
    ) -> Result<Self> {
        let entries = display_order(&data.entries);
        let domain = Domain::resolve(&entries)?;

        let legend_height = config.resolve_legend_height(legend_height);
        tracing::debug!("Bar chart legend height {}", legend_height);

        let metrics = LayoutMetrics::new(viewport)
            .axis_height(config.ticks_height)
            .legend_height(legend_height)
            .padding(config.chart_padding);

        let chart_height = config.bar_height * entries.len() as f64;
        let chart_width = metrics.chart_width();
        let scroll = metrics.needs_scroll(chart_height);
        let body_height = metrics.body_height(chart_height);

        let tick_values = TickValues::generate(domain)
            .reduce_density(chart_width, formatter, measurer)
            .into_vec();

        let scale = LinearScale::for_domain(domain, chart_width);
        let ticks = position_ticks(&tick_values, &scale, formatter);
        let grid_lines = ticks.clone();

        tracing::debug!(
            "Bar chart layout: domain [{}, {}], {} ticks, scroll={}",
            domain.min,
            domain.max,
            ticks.len(),
            scroll
        );

        Ok(Self {
            domain,
            tick_values,
            ticks,
            grid_lines,
            scale,
            metrics,
            scroll,
            chart_height,
            chart_width,
            body_height,
            labels_width: data.category.max_width + config.labels_padding,
            bar_height: config.bar_height,
            bar_padding: config.bar_padding,
            entries,
        })
    }

    /// Total viewport width
    pub fn width(&self) -> f64 {
        self.metrics.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;
    use barviz_core::{CategoryData, ChartError, DataPoint, MeasureData};

    fn data(sums: &[f64]) -> VisualData {
        let entries = sums
            .iter()
            .enumerate()
            .map(|(i, &s)| Entry::new(format!("c{}", i), vec![DataPoint::new(0, s)]))
            .collect();
        VisualData::new(entries, vec![MeasureData::new("Sales")], CategoryData::new("Region", 50.0))
    }

    fn config() -> ChartConfig {
        ChartConfig::new()
            .ticks_height(30.0)
            .bar_height(20.0)
            .legend_height(40.0)
            .labels_padding(10.0)
            .chart_padding(20.0)
            .char_width(7.0)
    }

    #[test]
    fn test_layout_fixed_body() {
        let layout =
            ChartLayout::compute(&data(&[450.0, 120.0]), Viewport::new(420.0, 300.0), None, &config())
                .unwrap();

        assert_eq!(layout.domain, Domain::new(0.0, 450.0));
        assert_eq!(layout.chart_width, 400.0);
        assert_eq!(layout.chart_height, 40.0);
        assert!(!layout.scroll);
        assert_eq!(layout.body_height, 40.0);
        assert_eq!(layout.labels_width, 60.0);
        assert_eq!(layout.tick_values, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
        assert_eq!(layout.ticks[0].x, 0.0);
        assert_eq!(layout.ticks.len(), layout.grid_lines.len());
    }

    #[test]
    fn test_layout_scrolls_when_rows_overflow() {
        let sums: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        let layout =
            ChartLayout::compute(&data(&sums), Viewport::new(420.0, 300.0), Some(50.0), &config())
                .unwrap();

        // 300 - 30 - 50 = 220 visible, 20 rows * 20 = 400 content
        assert!(layout.scroll);
        assert_eq!(layout.body_height, 220.0);
        assert_eq!(layout.chart_height, 400.0);
    }

    #[test]
    fn test_layout_sorts_entries() {
        let layout =
            ChartLayout::compute(&data(&[1.0, 9.0, 4.0]), Viewport::new(420.0, 300.0), None, &config())
                .unwrap();
        let order: Vec<&str> = layout.entries.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(order, vec!["c1", "c2", "c0"]);
    }

    #[test]
    fn test_layout_thins_ticks_on_narrow_chart() {
        // domain (0, 3): 8 half-unit ticks over 60px leaves 7.5px per label
        let layout =
            ChartLayout::compute(&data(&[3.0]), Viewport::new(80.0, 300.0), None, &config()).unwrap();
        assert_eq!(layout.tick_values, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_layout_all_negative_has_finite_positions() {
        let layout =
            ChartLayout::compute(&data(&[-8.0, -2.0]), Viewport::new(420.0, 300.0), None, &config())
                .unwrap();
        assert!(layout.ticks.iter().all(|t| t.x.is_finite()));
        assert_eq!(layout.scale.scale(0.0), 400.0);
    }

    #[test]
    fn test_layout_rejects_empty() {
        let err = ChartLayout::compute(&data(&[]), Viewport::new(420.0, 300.0), None, &config())
            .unwrap_err();
        assert_eq!(err, ChartError::EmptyEntries);
    }

    #[test]
    fn test_custom_measurer() {
        let wide = |_: &str| 1000.0;
        let layout = ChartLayout::compute_with(
            &data(&[450.0]),
            Viewport::new(420.0, 300.0),
            None,
            &config(),
            &PlainTickFormatter,
            &wide,
        )
        .unwrap();
        assert_eq!(layout.tick_values, vec![0.0, 200.0, 400.0]);
    }
}
