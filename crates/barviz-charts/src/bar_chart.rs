//! Bar chart component
//!
//! Renders the chart body (grid, bars, category labels) and the tick footer
//! from a [`ChartLayout`] computed on every update.

use crate::{
    bars::{layout_bars, BarRow},
    colors,
    layout::ChartLayout,
};
use barviz_core::{ChartConfig, TooltipData, VisualData, Viewport};
use leptos::prelude::*;

/// Layout plus row geometry for one render
#[derive(Clone)]
struct ChartState {
    data: VisualData,
    layout: ChartLayout,
    rows: Vec<BarRow>,
}

/// Bar chart component
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Option<VisualData>>,
    #[prop(into)] viewport: Signal<Viewport>,
    #[prop(optional, into)] legend_height: MaybeProp<f64>,
    #[prop(optional)] config: Option<ChartConfig>,
    #[prop(optional)] on_show_tooltip: Option<Callback<TooltipData>>,
    #[prop(optional)] on_hide_tooltip: Option<Callback<()>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let labels_padding = config.labels_padding;
    let ticks_height = config.ticks_height;

    let chart_state = move || {
        let data = data.get()?;
        match ChartLayout::compute(&data, viewport.get(), legend_height.get(), &config) {
            Ok(layout) => {
                let rows = layout_bars(&layout);
                Some(ChartState { data, layout, rows })
            }
            Err(e) => {
                tracing::warn!("Bar chart layout failed: {}", e);
                None
            }
        }
    };

    view! {
        <div class="bar-chart">
            {move || match chart_state() {
                Some(state) => chart_view(
                    state,
                    labels_padding,
                    ticks_height,
                    on_show_tooltip,
                    on_hide_tooltip,
                ),
                None => view! { <div class="bar-chart-empty">"No Entries"</div> }.into_any(),
            }}
        </div>
    }
}

fn chart_view(
    state: ChartState,
    labels_padding: f64,
    ticks_height: f64,
    on_show_tooltip: Option<Callback<TooltipData>>,
    on_hide_tooltip: Option<Callback<()>>,
) -> AnyView {
    let ChartState { data, layout, rows } = state;

    let width = layout.width();
    let labels_width = layout.labels_width;
    let chart_height = layout.chart_height;
    let overflow = if layout.scroll { "scroll" } else { "hidden" };

    let body_style = format!(
        "height: {h}px; max-height: {h}px; width: {w}px; border-bottom: 1px solid {line}; overflow-y: {overflow};",
        h = layout.body_height,
        w = width,
        line = colors::LINE,
        overflow = overflow,
    );
    let wrapper_style = format!(
        "height: {h}px; max-height: {h}px; width: {w}px;",
        h = chart_height,
        w = layout.chart_width,
    );
    let bars_transform = format!("translate({}, 0)", labels_width);

    let grid = layout
        .grid_lines
        .iter()
        .map(|line| {
            view! {
                <line
                    x1=line.x y1="0"
                    x2=line.x y2=chart_height
                    stroke=colors::GRID
                    stroke-width="1"
                />
            }
        })
        .collect_view();

    let labels = rows
        .iter()
        .map(|row| {
            view! {
                <text
                    x={labels_width - labels_padding}
                    y=row.center_y
                    dy="0.32em"
                    text-anchor="end"
                    fill=colors::TEXT_MUTED
                    font-size="11"
                >
                    {row.category.clone()}
                </text>
            }
        })
        .collect_view();

    let bars = rows
        .into_iter()
        .map(|row| {
            let tooltip = layout
                .entries
                .get(row.index)
                .map(|entry| TooltipData::from_entry(&data, entry));
            let y = row.y;
            let height = row.height;

            row.segments
                .into_iter()
                .map(|segment| {
                    let tooltip = tooltip.clone();
                    view! {
                        <rect
                            class="bar"
                            x=segment.x
                            y=y
                            width=segment.width
                            height=height
                            fill=data.measure_color(segment.measure_index)
                            on:mouseenter=move |_| {
                                if let (Some(show), Some(content)) = (on_show_tooltip, tooltip.clone()) {
                                    show.run(content);
                                }
                            }
                            on:mouseleave=move |_| {
                                if let Some(hide) = on_hide_tooltip {
                                    hide.run(());
                                }
                            }
                        />
                    }
                })
                .collect_view()
        })
        .collect_view();

    let ticks = layout
        .ticks
        .iter()
        .map(|tick| {
            view! {
                <g transform=format!("translate({}, 0)", tick.x)>
                    <line y1="0" y2="5" stroke=colors::LINE />
                    <text
                        y="16"
                        text-anchor="middle"
                        fill=colors::TEXT_MUTED
                        font-size="10"
                    >
                        {tick.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="bar-chart-body" style=body_style>
            <div class="bar-chart-svg-wrapper" style=wrapper_style>
                <svg height=chart_height width=width>
                    <g class="bar-chart-grid" transform=bars_transform.clone()>
                        {grid}
                    </g>
                    <g class="bar-chart-bars" transform=bars_transform.clone()>
                        {bars}
                    </g>
                    <g class="bar-chart-labels">
                        {labels}
                    </g>
                </svg>
            </div>
        </div>
        <div class="bar-chart-footer" style=format!("height: {}px; width: {}px;", ticks_height, width)>
            <svg height=ticks_height width=width>
                <g class="bar-chart-ticks" transform=bars_transform>
                    {ticks}
                </g>
            </svg>
        </div>
    }
    .into_any()
}
