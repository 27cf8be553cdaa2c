//! PNG charts for the KPI evidence pack
//!
//! Charts are drawn into an in-memory RGB buffer with `plotters` and encoded
//! with `image`. No font backend is compiled in, so the bitmaps carry shapes
//! only; titles and values are printed by the Markdown and HTML around them.

use crate::error::ReportError;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::fmt::Display;
use std::io::Cursor;

/// Month labels of the uptime trend
pub const TREND_MONTHS: [&str; 6] = ["M-2", "M-1", "M0", "M+1", "M+2", "M+3"];

/// Pixel size of `uptime_trend.png`
pub const UPTIME_CHART_SIZE: (u32, u32) = (640, 240);

/// Pixel size of `provisioning_time.png`
pub const PROVISIONING_CHART_SIZE: (u32, u32) = (400, 240);

const UPTIME_AXIS: (f64, f64) = (97.0, 100.0);
const UPTIME_GRID: [f64; 7] = [97.0, 97.5, 98.0, 98.5, 99.0, 99.5, 100.0];

const BEFORE_COLOR: RGBColor = RGBColor(0xC4, 0x3C, 0x35);
const AFTER_COLOR: RGBColor = RGBColor(0x2E, 0x8B, 0x57);
const LINE_COLOR: RGBColor = RGBColor(0x1F, 0x77, 0xB4);
const GRID_COLOR: RGBColor = RGBColor(0xE6, 0xE6, 0xE6);

/// Six-month uptime series ramping from the baseline to the target
#[must_use]
pub fn uptime_series(before: f64, after: f64) -> [f64; 6] {
    [
        before - 0.25,
        before - 0.12,
        before,
        after.min(before + 0.35),
        after.min(before + 0.5),
        after,
    ]
}

fn chart_failure(chart: &'static str, reason: &dyn Display) -> ReportError {
    ReportError::Chart {
        chart,
        reason: reason.to_string(),
    }
}

fn encode_png(
    chart: &'static str,
    pixels: Vec<u8>,
    (width, height): (u32, u32),
) -> Result<Vec<u8>, ReportError> {
    let image = RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| chart_failure(chart, &"pixel buffer does not match chart size"))?;
    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| chart_failure(chart, &e))?;
    Ok(png)
}

/// Line chart of the simulated monthly uptime trend (y axis 97-100%)
///
/// # Errors
/// [`ReportError::Chart`] if drawing or PNG encoding fails.
pub fn render_uptime_trend_png(before: f64, after: f64) -> Result<Vec<u8>, ReportError> {
    const CHART: &str = "uptime_trend";
    let (width, height) = UPTIME_CHART_SIZE;
    let (lo, hi) = UPTIME_AXIS;
    let last = (TREND_MONTHS.len() - 1) as f64;
    let points: Vec<(f64, f64)> = uptime_series(before, after)
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v.clamp(lo, hi)))
        .collect();

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| chart_failure(CHART, &e))?;
        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .build_cartesian_2d(0f64..last, lo..hi)
            .map_err(|e| chart_failure(CHART, &e))?;

        chart
            .draw_series(UPTIME_GRID.iter().map(|&tick| {
                PathElement::new(vec![(0.0, tick), (last, tick)], GRID_COLOR.stroke_width(1))
            }))
            .map_err(|e| chart_failure(CHART, &e))?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                points.clone(),
                LINE_COLOR.stroke_width(2),
            )))
            .map_err(|e| chart_failure(CHART, &e))?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, 4, LINE_COLOR.filled())),
            )
            .map_err(|e| chart_failure(CHART, &e))?;
        root.present().map_err(|e| chart_failure(CHART, &e))?;
    }
    encode_png(CHART, pixels, (width, height))
}

/// Bar chart of before/after provisioning P50 minutes
///
/// # Errors
/// [`ReportError::Chart`] if drawing or PNG encoding fails.
pub fn render_provisioning_png(before: f64, after: f64) -> Result<Vec<u8>, ReportError> {
    const CHART: &str = "provisioning_time";
    let (width, height) = PROVISIONING_CHART_SIZE;
    let top = before.max(after).max(1.0) * 1.15;

    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| chart_failure(CHART, &e))?;
        let mut chart = ChartBuilder::on(&root)
            .margin(16)
            .build_cartesian_2d(0f64..2f64, 0f64..top)
            .map_err(|e| chart_failure(CHART, &e))?;

        chart
            .draw_series(
                [(0.0, before, BEFORE_COLOR), (1.0, after, AFTER_COLOR)]
                    .into_iter()
                    .map(|(slot, value, color)| {
                        Rectangle::new([(slot + 0.2, 0.0), (slot + 0.8, value)], color.filled())
                    }),
            )
            .map_err(|e| chart_failure(CHART, &e))?;
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, 0.0), (2.0, 0.0)],
                BLACK.stroke_width(1),
            )))
            .map_err(|e| chart_failure(CHART, &e))?;
        root.present().map_err(|e| chart_failure(CHART, &e))?;
    }
    encode_png(CHART, pixels, (width, height))
}
