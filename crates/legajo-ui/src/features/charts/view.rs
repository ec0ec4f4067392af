//! SVG headcount chart component and dashboard mounting.

use crate::app::page::{element_by_id, reveal_placeholder, set_displayed};
use crate::features::charts::logic::{
    ChartKind, ChartSlice, ChartStyle, PlotArea, Ring, ValueAxis, arc_path, arc_spans,
    parse_series,
};
use gloo::console;
use yew::prelude::*;

const PIE_SIZE: f64 = 220.0;
const BAR_WIDTH: f64 = 320.0;
const BAR_HEIGHT: f64 = 220.0;

#[derive(Properties, PartialEq)]
pub(crate) struct HeadcountChartProps {
    pub(crate) kind: ChartKind,
    pub(crate) slices: Vec<ChartSlice>,
}

#[function_component(HeadcountChart)]
pub(crate) fn headcount_chart(props: &HeadcountChartProps) -> Html {
    match props.kind.style() {
        ChartStyle::Bar => bar_chart(&props.slices),
        style => round_chart(style, &props.slices),
    }
}

fn round_chart(style: ChartStyle, slices: &[ChartSlice]) -> Html {
    let ring = Ring::for_style(style, PIE_SIZE);
    let spans = arc_spans(slices);
    html! {
        <div class="d-flex align-items-center gap-3 h-100">
            <svg viewBox={format!("0 0 {PIE_SIZE} {PIE_SIZE}")} class="flex-shrink-0" style="max-height: 100%; max-width: 60%;" role="img">
                { for slices.iter().zip(spans).filter(|(slice, _)| slice.value > 0).map(|(slice, span)| html! {
                    <path d={arc_path(&ring, span)} fill={slice.color} stroke="#fff" stroke-width="2">
                        <title>{ format!("{}: {}", slice.label, slice.value) }</title>
                    </path>
                }) }
            </svg>
            <ul class="list-unstyled small mb-0">
                { for slices.iter().map(legend_item) }
            </ul>
        </div>
    }
}

fn legend_item(slice: &ChartSlice) -> Html {
    html! {
        <li class="d-flex align-items-center gap-2">
            <span style={format!("display:inline-block;width:12px;height:12px;background:{};", slice.color)}></span>
            { format!("{} ({})", slice.label, slice.value) }
        </li>
    }
}

fn bar_chart(slices: &[ChartSlice]) -> Html {
    let max = slices.iter().map(|slice| slice.value).max().unwrap_or(0);
    let axis = ValueAxis::covering(max);
    let area = PlotArea {
        left: 36.0,
        top: 12.0,
        width: BAR_WIDTH - 48.0,
        height: BAR_HEIGHT - 44.0,
    };
    let bars = area.bars(&axis, slices);
    html! {
        <svg viewBox={format!("0 0 {BAR_WIDTH} {BAR_HEIGHT}")} class="w-100 h-100" role="img">
            { for axis.ticks().into_iter().map(|tick| {
                let y = area.y_for(&axis, tick);
                html! {
                    <g>
                        <line x1={area.left.to_string()} x2={(area.left + area.width).to_string()}
                            y1={y.to_string()} y2={y.to_string()} stroke="#e5e5e5" />
                        <text x={(area.left - 6.0).to_string()} y={(y + 4.0).to_string()}
                            text-anchor="end" font-size="10">{ tick.to_string() }</text>
                    </g>
                }
            }) }
            { for slices.iter().zip(bars).map(|(slice, bar)| html! {
                <g>
                    <rect x={bar.x.to_string()} y={bar.y.to_string()}
                        width={bar.width.to_string()} height={bar.height.to_string()} fill={slice.color}>
                        <title>{ format!("Personal: {}", slice.value) }</title>
                    </rect>
                    <text x={(bar.x + bar.width / 2.0).to_string()} y={(area.baseline() + 16.0).to_string()}
                        text-anchor="middle" font-size="11">{ slice.label.clone() }</text>
                </g>
            }) }
            <line x1={area.left.to_string()} x2={(area.left + area.width).to_string()}
                y1={area.baseline().to_string()} y2={area.baseline().to_string()} stroke="#999" />
        </svg>
    }
}

/// Render every dashboard chart whose host is on the page.
pub(crate) fn mount_charts() {
    for kind in ChartKind::all() {
        let Some(host) = element_by_id(kind.host_id()) else {
            continue;
        };
        let raw = element_by_id(kind.data_id()).and_then(|element| element.text_content());
        let slices = match parse_series(kind, raw.as_deref()) {
            Ok(slices) => slices,
            Err(err) => {
                console::error!("chart data unreadable", err.to_string());
                Vec::new()
            }
        };
        if slices.iter().all(|slice| slice.value == 0) {
            set_displayed(&host, false);
            reveal_placeholder(kind.placeholder_id());
            continue;
        }
        console::log!("chart rendered", kind.host_id(), slices.len());
        yew::Renderer::<HeadcountChart>::with_root_and_props(host, HeadcountChartProps { kind, slices })
            .render();
    }
}
