//! Chart series parsing and SVG geometry.

use legajo_api_models::{SexHeadcount, StatusHeadcount, UnitHeadcount};
use serde::de::DeserializeOwned;
use std::f64::consts::PI;
use thiserror::Error;

const UNIT_PALETTE: [&str; 9] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6B9D", "#4ECDC4",
    "#45B7D1",
];
const STATUS_PALETTE: [&str; 2] = ["#4BC0C0", "#FF6384"];
const SEX_PALETTE: [&str; 3] = ["#36A2EB", "#FF6384", "#FFCE56"];

/// Embedded chart data could not be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartDataError {
    /// The data element holds invalid JSON for its chart.
    #[error("chart data in #{element} is malformed: {detail}")]
    Malformed {
        /// Data element id.
        element: &'static str,
        /// Decoder message.
        detail: String,
    },
}

/// How a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartStyle {
    /// Ring with a hole.
    Doughnut,
    /// Full pie.
    Pie,
    /// Vertical bars on a zero baseline.
    Bar,
}

/// The dashboard charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Headcount per organizational unit.
    Unit,
    /// Headcount per employment status.
    Status,
    /// Headcount per sex.
    Sex,
}

impl ChartKind {
    /// Every dashboard chart.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Unit, Self::Status, Self::Sex]
    }

    /// Id of the element embedding the JSON rows.
    #[must_use]
    pub const fn data_id(self) -> &'static str {
        match self {
            Self::Unit => "data-unidad",
            Self::Status => "data-estado",
            Self::Sex => "data-sexo",
        }
    }

    /// Id of the chart host element.
    #[must_use]
    pub const fn host_id(self) -> &'static str {
        match self {
            Self::Unit => "empleadosUnidadChart",
            Self::Status => "chartEstado",
            Self::Sex => "chartSexo",
        }
    }

    /// Id of the "no data" placeholder.
    #[must_use]
    pub const fn placeholder_id(self) -> &'static str {
        match self {
            Self::Unit => "noDataUnidad",
            Self::Status => "noDataEstado",
            Self::Sex => "noDataSexo",
        }
    }

    /// Drawing style.
    #[must_use]
    pub const fn style(self) -> ChartStyle {
        match self {
            Self::Unit => ChartStyle::Doughnut,
            Self::Status => ChartStyle::Pie,
            Self::Sex => ChartStyle::Bar,
        }
    }

    const fn palette(self) -> &'static [&'static str] {
        match self {
            Self::Unit => &UNIT_PALETTE,
            Self::Status => &STATUS_PALETTE,
            Self::Sex => &SEX_PALETTE,
        }
    }
}

/// One labelled value with its fill color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartSlice {
    /// Category label.
    pub label: String,
    /// Headcount.
    pub value: u32,
    /// Fill color.
    pub color: &'static str,
}

/// Parse the embedded rows for `kind`. A missing or blank source is an empty series.
///
/// Unit rows with a zero count are dropped. Colors cycle through the chart palette.
///
/// # Errors
/// Returns [`ChartDataError::Malformed`] when the text is not the expected JSON array.
pub fn parse_series(kind: ChartKind, raw: Option<&str>) -> Result<Vec<ChartSlice>, ChartDataError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Vec::new());
    };
    let rows: Vec<(String, u32)> = match kind {
        ChartKind::Unit => decode::<UnitHeadcount>(kind, raw)?
            .into_iter()
            .filter(|row| row.count > 0)
            .map(|row| (row.unit, row.count))
            .collect(),
        ChartKind::Status => decode::<StatusHeadcount>(kind, raw)?
            .into_iter()
            .map(|row| (row.status, row.count))
            .collect(),
        ChartKind::Sex => decode::<SexHeadcount>(kind, raw)?
            .into_iter()
            .map(|row| (row.sex, row.count))
            .collect(),
    };
    let palette = kind.palette();
    Ok(rows
        .into_iter()
        .zip(palette.iter().cycle())
        .map(|((label, value), color)| ChartSlice {
            label,
            value,
            color,
        })
        .collect())
}

fn decode<T: DeserializeOwned>(kind: ChartKind, raw: &str) -> Result<Vec<T>, ChartDataError> {
    serde_json::from_str(raw).map_err(|err| ChartDataError::Malformed {
        element: kind.data_id(),
        detail: err.to_string(),
    })
}

/// Angular extent of one slice, in degrees, clockwise from the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    /// Start angle.
    pub start: f64,
    /// End angle.
    pub end: f64,
}

/// Split the circle proportionally to the slice values, starting at -90°.
///
/// Zero-valued slices get an empty span; an all-zero series yields no spans.
#[must_use]
pub fn arc_spans(slices: &[ChartSlice]) -> Vec<ArcSpan> {
    let total: f64 = slices.iter().map(|slice| f64::from(slice.value)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = -90.0;
    slices
        .iter()
        .map(|slice| {
            let sweep = f64::from(slice.value) / total * 360.0;
            let span = ArcSpan {
                start: angle,
                end: angle + sweep,
            };
            angle += sweep;
            span
        })
        .collect()
}

/// Circle geometry shared by pie and doughnut paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Outer radius.
    pub outer: f64,
    /// Inner radius, zero for a pie.
    pub inner: f64,
}

impl Ring {
    /// Ring for a style inside a square of side `size`.
    #[must_use]
    pub fn for_style(style: ChartStyle, size: f64) -> Self {
        let outer = size / 2.0 - 4.0;
        let inner = if style == ChartStyle::Doughnut {
            outer * 0.5
        } else {
            0.0
        };
        Self {
            cx: size / 2.0,
            cy: size / 2.0,
            outer,
            inner,
        }
    }

    fn point(&self, radius: f64, degrees: f64) -> (f64, f64) {
        let radians = degrees * PI / 180.0;
        (
            radius.mul_add(radians.cos(), self.cx),
            radius.mul_add(radians.sin(), self.cy),
        )
    }
}

/// SVG path for one span. A full circle is drawn as two half arcs.
#[must_use]
pub fn arc_path(ring: &Ring, span: ArcSpan) -> String {
    let sweep = span.end - span.start;
    if sweep >= 359.999 {
        let middle = span.start + 180.0;
        let first = arc_path(
            ring,
            ArcSpan {
                start: span.start,
                end: middle,
            },
        );
        let second = arc_path(
            ring,
            ArcSpan {
                start: middle,
                end: span.start + 360.0,
            },
        );
        return format!("{first} {second}");
    }
    let large = u8::from(sweep > 180.0);
    let (ox1, oy1) = ring.point(ring.outer, span.start);
    let (ox2, oy2) = ring.point(ring.outer, span.end);
    let outer = ring.outer;
    if ring.inner <= 0.0 {
        let (cx, cy) = (ring.cx, ring.cy);
        return format!(
            "M {cx:.3} {cy:.3} L {ox1:.3} {oy1:.3} A {outer:.3} {outer:.3} 0 {large} 1 {ox2:.3} {oy2:.3} Z"
        );
    }
    let inner = ring.inner;
    let (ix1, iy1) = ring.point(inner, span.end);
    let (ix2, iy2) = ring.point(inner, span.start);
    format!(
        "M {ox1:.3} {oy1:.3} A {outer:.3} {outer:.3} 0 {large} 1 {ox2:.3} {oy2:.3} \
         L {ix1:.3} {iy1:.3} A {inner:.3} {inner:.3} 0 {large} 0 {ix2:.3} {iy2:.3} Z"
    )
}

/// Value axis of a bar chart: integer ticks from zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueAxis {
    /// Top of the axis.
    pub top: u32,
    /// Tick spacing, at least 1.
    pub step: u32,
}

impl ValueAxis {
    /// Axis covering `max` with at most about ten integer ticks.
    #[must_use]
    pub const fn covering(max: u32) -> Self {
        let step = if max <= 10 { 1 } else { max.div_ceil(10) };
        let top = if max == 0 { step } else { max.div_ceil(step) * step };
        Self { top, step }
    }

    /// Tick values from zero to `top`.
    #[must_use]
    pub fn ticks(&self) -> Vec<u32> {
        (0..=self.top).step_by(self.step as usize).collect()
    }
}

/// One placed bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height above the baseline.
    pub height: f64,
}

/// Plot area of a bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height; the baseline sits at `top + height`.
    pub height: f64,
}

impl PlotArea {
    /// Baseline y.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.top + self.height
    }

    /// Y coordinate of `value` on `axis`.
    #[must_use]
    pub fn y_for(&self, axis: &ValueAxis, value: u32) -> f64 {
        let ratio = f64::from(value) / f64::from(axis.top.max(1));
        self.baseline() - ratio * self.height
    }

    /// Bars for `slices`, evenly spaced with a gap of a fifth of each slot on either side.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bars(&self, axis: &ValueAxis, slices: &[ChartSlice]) -> Vec<BarRect> {
        if slices.is_empty() {
            return Vec::new();
        }
        let slot = self.width / slices.len() as f64;
        let width = slot * 0.6;
        slices
            .iter()
            .enumerate()
            .map(|(index, slice)| {
                let y = self.y_for(axis, slice.value);
                BarRect {
                    x: (index as f64).mul_add(slot, self.left) + slot * 0.2,
                    y,
                    width,
                    height: self.baseline() - y,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(values: &[u32]) -> Vec<ChartSlice> {
        values
            .iter()
            .map(|value| ChartSlice {
                label: value.to_string(),
                value: *value,
                color: "#000000",
            })
            .collect()
    }

    #[test]
    fn unit_rows_without_staff_are_dropped() {
        let raw = r#"[{"nombre_unidad":"RRHH","cantidad":3},{"nombre_unidad":"Archivo","cantidad":0},{"nombre_unidad":"TI","cantidad":2}]"#;
        let series = parse_series(ChartKind::Unit, Some(raw)).expect("parse");
        let labels: Vec<&str> = series.iter().map(|slice| slice.label.as_str()).collect();
        assert_eq!(labels, vec!["RRHH", "TI"]);
        assert_eq!(series[0].color, "#FF6384");
        assert_eq!(series[1].color, "#36A2EB");
    }

    #[test]
    fn missing_or_blank_data_is_an_empty_series() {
        assert!(parse_series(ChartKind::Status, None).expect("parse").is_empty());
        assert!(parse_series(ChartKind::Sex, Some("  ")).expect("parse").is_empty());
    }

    #[test]
    fn malformed_data_names_the_element() {
        let err = parse_series(ChartKind::Sex, Some("{oops")).expect_err("malformed");
        assert!(matches!(
            err,
            ChartDataError::Malformed {
                element: "data-sexo",
                ..
            }
        ));
    }

    #[test]
    fn status_colors_cycle() {
        let raw = r#"[{"estado":"Activo","cantidad":5},{"estado":"Inactivo","cantidad":1},{"estado":"Licencia","cantidad":1}]"#;
        let series = parse_series(ChartKind::Status, Some(raw)).expect("parse");
        assert_eq!(series[2].color, "#4BC0C0");
    }

    #[test]
    fn spans_start_at_the_top_and_cover_the_circle() {
        let spans = arc_spans(&slices(&[1, 1]));
        assert_eq!(spans.len(), 2);
        assert!((spans[0].start + 90.0).abs() < 1e-9);
        assert!((spans[0].end - 90.0).abs() < 1e-9);
        assert!((spans[1].end - 270.0).abs() < 1e-9);
        assert!(arc_spans(&slices(&[0, 0])).is_empty());
    }

    #[test]
    fn full_circle_splits_into_two_arcs() {
        let ring = Ring::for_style(ChartStyle::Pie, 200.0);
        let spans = arc_spans(&slices(&[4]));
        let path = arc_path(&ring, spans[0]);
        assert_eq!(path.matches(" A ").count(), 2);

        let ring = Ring::for_style(ChartStyle::Doughnut, 200.0);
        let path = arc_path(&ring, spans[0]);
        assert_eq!(path.matches(" A ").count(), 4);
    }

    #[test]
    fn half_pie_ends_at_the_bottom() {
        let ring = Ring::for_style(ChartStyle::Pie, 200.0);
        let spans = arc_spans(&slices(&[1, 1]));
        let path = arc_path(&ring, spans[0]);
        assert!(path.starts_with("M 100.000 100.000 L 100.000 4.000"));
        assert!(path.ends_with("100.000 196.000 Z"));
    }

    #[test]
    fn axis_uses_integer_steps() {
        assert_eq!(ValueAxis::covering(0), ValueAxis { top: 1, step: 1 });
        assert_eq!(ValueAxis::covering(3), ValueAxis { top: 3, step: 1 });
        assert_eq!(ValueAxis::covering(25), ValueAxis { top: 27, step: 3 });
        assert_eq!(ValueAxis::covering(3).ticks(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn bars_rest_on_the_baseline() {
        let area = PlotArea {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 50.0,
        };
        let axis = ValueAxis::covering(4);
        let bars = area.bars(&axis, &slices(&[4, 2]));
        assert!((bars[0].height - 50.0).abs() < 1e-9);
        assert!((bars[1].y - 25.0).abs() < 1e-9);
        assert!((bars[1].x - 60.0).abs() < 1e-9);
    }
}
