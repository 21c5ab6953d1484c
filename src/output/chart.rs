//! Actual vs. theoretical line charts rendered with [`plotters`].
//!
//! Every chart plots two metrics against the record count on a logarithmic
//! X axis. A missing value, or a non-positive value on a logarithmic axis,
//! breaks the line into separate segments instead of failing the chart.

use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::types::RangedCoordf64;
use plotters::coord::ranged1d::ValueFormatter;
use plotters::prelude::*;

use super::series::Series;
use crate::error::Result;
use crate::model::{Metric, MetricValue, Record};

pub const CHART_SIZE: (u32, u32) = (1000, 600);
pub const X_DESC: &str = "Record Count";

pub const PHASES_CHART_FILE: &str = "phases_comparison.png";
pub const DISK_ACCESSES_CHART_FILE: &str = "disk_accesses_comparison.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Cross,
}

#[derive(Debug, Clone)]
pub struct Line {
    pub metric: Metric,
    pub label: &'static str,
    pub marker: Marker,
    pub color: RGBColor,
}

#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub file_name: &'static str,
    pub caption: &'static str,
    pub y_desc: &'static str,
    pub y_scale: Scale,
    pub lines: [Line; 2],
}

impl ChartSpec {
    pub fn phases() -> Self {
        Self {
            file_name: PHASES_CHART_FILE,
            caption: "Actual vs. Theoretical Phases",
            y_desc: "Phases",
            y_scale: Scale::Linear,
            lines: [
                Line {
                    metric: Metric::PhasesActual,
                    label: "Actual Phases",
                    marker: Marker::Circle,
                    color: BLUE,
                },
                Line {
                    metric: Metric::PhasesTheory,
                    label: "Theoretical Phases",
                    marker: Marker::Cross,
                    color: RED,
                },
            ],
        }
    }

    pub fn disk_accesses() -> Self {
        Self {
            file_name: DISK_ACCESSES_CHART_FILE,
            caption: "Practice vs. Theory Disk Accesses",
            y_desc: "Disk Accesses",
            y_scale: Scale::Log,
            lines: [
                Line {
                    metric: Metric::DiskAccessesPractice,
                    label: "Disk Accesses in Practice",
                    marker: Marker::Circle,
                    color: BLUE,
                },
                Line {
                    metric: Metric::DiskAccessesTheory,
                    label: "Disk Accesses in Theory",
                    marker: Marker::Cross,
                    color: RED,
                },
            ],
        }
    }

    /// Continuous runs of drawable points for one line.
    pub fn segments(&self, series: &Series, line: &Line) -> Vec<Vec<(f64, f64)>> {
        split_segments(&series.points(line.metric), self.y_scale)
    }
}

/// Sorts `records` by record count and writes both comparison charts into
/// `output_dir`, replacing existing files. Returns the written paths.
pub fn render(records: &mut [Record], output_dir: &Path) -> Result<Vec<PathBuf>> {
    if records.is_empty() {
        return Err("no data to plot".into());
    }

    let series = Series::project(records);

    // One drawing area at a time; each is released before the next chart.
    let mut written = Vec::new();
    for spec in &[ChartSpec::phases(), ChartSpec::disk_accesses()] {
        written.push(render_chart(spec, &series, output_dir)?);
    }

    Ok(written)
}

pub fn render_chart(spec: &ChartSpec, series: &Series, output_dir: &Path) -> Result<PathBuf> {
    if series.is_empty() {
        return Err("no data to plot".into());
    }

    let path = output_dir.join(spec.file_name);
    let segments: Vec<_> = spec
        .lines
        .iter()
        .map(|line| spec.segments(series, line))
        .collect();

    let points = || segments.iter().flatten().flatten();
    let x_range = axis_range(points().map(|(x, _)| *x), Scale::Log);
    let y_range = axis_range(points().map(|(_, y)| *y), spec.y_scale);

    let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ("couldn't fill drawing area", e))?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .caption(spec.caption, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70);

    match spec.y_scale {
        Scale::Linear => {
            let mut chart = builder
                .build_cartesian_2d(x_range.log_scale(), RangedCoordf64::from(y_range))
                .map_err(|e| ("couldn't configure chart", e))?;
            draw_lines(&mut chart, spec, &segments)?;
        }
        Scale::Log => {
            let mut chart = builder
                .build_cartesian_2d(x_range.log_scale(), y_range.log_scale())
                .map_err(|e| ("couldn't configure chart", e))?;
            draw_lines(&mut chart, spec, &segments)?;
        }
    }

    root.present()
        .map_err(|e| (format!("couldn't save '{}'", path.display()), e))?;
    drop(root);

    Ok(path)
}

fn draw_lines<'a, X, Y>(
    chart: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<X, Y>>,
    spec: &ChartSpec,
    segments: &[Vec<Vec<(f64, f64)>>],
) -> Result<()>
where
    X: Ranged<ValueType = f64> + ValueFormatter<f64>,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let y_formatter = |y: &f64| match spec.y_scale {
        Scale::Linear => format!("{:.1}", y),
        Scale::Log => format!("{:.0}", y),
    };

    chart
        .configure_mesh()
        .x_desc(X_DESC)
        .y_desc(spec.y_desc)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&y_formatter)
        .label_style(("sans-serif", 15))
        .axis_desc_style(("sans-serif", 20))
        .draw()
        .map_err(|e| ("couldn't draw chart mesh", e))?;

    for (line, line_segments) in spec.lines.iter().zip(segments) {
        let color = line.color;

        for segment in line_segments {
            chart
                .draw_series(LineSeries::new(segment.iter().copied(), color.stroke_width(2)))
                .map_err(|e| ("couldn't draw line", e))?;
        }

        let points = line_segments.iter().flatten().copied();
        match line.marker {
            Marker::Circle => {
                chart
                    .draw_series(points.map(|p| Circle::new(p, 4, color.filled())))
                    .map_err(|e| ("couldn't draw markers", e))?
                    .label(line.label)
                    .legend(move |(x, y)| {
                        EmptyElement::at((x, y))
                            + PathElement::new(vec![(-10, 0), (10, 0)], color.stroke_width(2))
                            + Circle::new((0, 0), 4, color.filled())
                    });
            }
            Marker::Cross => {
                chart
                    .draw_series(points.map(|p| Cross::new(p, 4, color.stroke_width(2))))
                    .map_err(|e| ("couldn't draw markers", e))?
                    .label(line.label)
                    .legend(move |(x, y)| {
                        EmptyElement::at((x, y))
                            + PathElement::new(vec![(-10, 0), (10, 0)], color.stroke_width(2))
                            + Cross::new((0, 0), 4, color.stroke_width(2))
                    });
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 15))
        .draw()
        .map_err(|e| ("couldn't draw legend", e))?;

    Ok(())
}

/// Splits (x, y) pairs into runs of points that can be drawn on the given Y
/// scale. The X axis is always logarithmic.
pub fn split_segments(points: &[(f64, Option<MetricValue>)], y_scale: Scale) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (x, y) in points {
        match drawable(*x, *y, y_scale) {
            Some(point) => current.push(point),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => (),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn drawable(x: f64, y: Option<MetricValue>, y_scale: Scale) -> Option<(f64, f64)> {
    let y = y?;
    if x <= 0.0 || !y.is_finite() || (y_scale == Scale::Log && y <= 0.0) {
        return None;
    }
    Some((x, y))
}

/// Padded axis range covering `values`. Falls back to a unit range (a decade
/// on a logarithmic axis) when there is nothing to cover.
///
/// Both bounds and the span between them are always finite, and positive on
/// a logarithmic axis. Padding is dropped on the side where it would overflow.
pub fn axis_range<I: Iterator<Item = f64>>(values: I, scale: Scale) -> Range<f64> {
    let bounds = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    });

    let (lo, hi) = match (scale, bounds) {
        (Scale::Linear, None) => return 0.0..1.0,
        (Scale::Log, None) => return 1.0..10.0,
        (_, Some(bounds)) => bounds,
    };

    let (start, end) = match scale {
        Scale::Linear => {
            let pad = if hi > lo {
                (hi - lo) * 0.05
            } else {
                lo.abs().max(1.0) * 0.1
            };
            (lo - pad, hi + pad)
        }
        Scale::Log => {
            let factor = if hi > lo { (hi / lo).powf(0.05) } else { 10.0 };
            (lo / factor, hi * factor)
        }
    };

    let candidates = [(start, end), (start, hi), (lo, end), (lo, hi)];
    candidates
        .iter()
        .find(|(start, end)| is_drawable_range(*start, *end, scale))
        .map(|(start, end)| *start..*end)
        .unwrap_or(match scale {
            Scale::Linear => 0.0..1.0,
            Scale::Log => 1.0..10.0,
        })
}

fn is_drawable_range(start: f64, end: f64, scale: Scale) -> bool {
    let finite = start.is_finite() && end.is_finite() && (end - start).is_finite();
    let positive = scale == Scale::Linear || start > 0.0;
    finite && positive && start < end
}
