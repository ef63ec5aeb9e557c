//! Grouped bar chart comparing the two schemes.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::schema::{EnvironmentRecord, TimingResults};
use crate::{OpLabel, Operation, Scheme};

/// 10 x 7 inches at 300 dpi.
pub const CHART_SIZE: (u32, u32) = (3000, 2100);

const ED25519_COLOR: RGBColor = RGBColor(0x4C, 0xAF, 0x50);
const SECP256K1_COLOR: RGBColor = RGBColor(0xFF, 0x70, 0x43);
const BAR_OPACITY: f64 = 0.8;
const BAR_WIDTH: f64 = 0.35;

const ENV_LINE_HEIGHT: u32 = 40;
const ENV_PADDING: u32 = 30;

/// Per-scheme timings ordered KeyGen, Signing, Verification.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartInput {
    pub ed25519: [f64; 3],
    pub secp256k1: [f64; 3],
}

impl ChartInput {
    pub fn max(&self) -> f64 {
        self.ed25519
            .iter()
            .chain(self.secp256k1.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Looks up the three operations for each scheme in order.
pub fn extract_times(results: &TimingResults) -> ReportResult<ChartInput> {
    Ok(ChartInput {
        ed25519: times_for(results, Scheme::Ed25519)?,
        secp256k1: times_for(results, Scheme::Secp256k1)?,
    })
}

fn times_for(results: &TimingResults, scheme: Scheme) -> ReportResult<[f64; 3]> {
    let mut times = [0.0; 3];
    for (slot, operation) in times.iter_mut().zip(Operation::ALL) {
        let label = OpLabel::new(scheme, operation);
        *slot = results
            .get(label)
            .ok_or_else(|| ReportError::NoData(label.to_string()))?;
    }
    Ok(times)
}

/// Renders the chart to `path`. An empty `env` leaves out the details block.
pub fn render_chart(input: &ChartInput, env: &EnvironmentRecord, path: &Path) -> ReportResult<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let env_lines = env.lines();
    if env_lines.is_empty() {
        draw_bars(&root, input)?;
    } else {
        let band = ENV_PADDING * 2 + ENV_LINE_HEIGHT * env_lines.len() as u32;
        let split = CHART_SIZE.1.saturating_sub(band).max(CHART_SIZE.1 / 2);
        let (upper, lower) = root.split_vertically(split);
        draw_bars(&upper, input)?;
        draw_env_block(&lower, &env_lines)?;
    }

    root.present()?;
    info!("Chart saved to: {}", path.display());
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    input: &ChartInput,
) -> ReportResult<()> {
    let y_max = match input.max() {
        m if m > 0.0 => m * 1.15,
        _ => 1.0,
    };

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Ed25519 vs secp256k1",
            ("sans-serif", 56).into_font().style(FontStyle::Bold),
        )
        .margin(60)
        .x_label_area_size(90)
        .y_label_area_size(160)
        .build_cartesian_2d(-0.5f64..2.5f64, 0f64..y_max)?;

    let category = |x: &f64| -> String {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || !(0.0..=2.0).contains(&idx) {
            return String::new();
        }
        Operation::ALL[idx as usize].category().to_string()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(7)
        .x_label_formatter(&category)
        .y_desc("Time (µs per operation)")
        .label_style(("sans-serif", 34))
        .axis_desc_style(("sans-serif", 38))
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()?;

    for (scheme, times, color, offset) in [
        (Scheme::Ed25519, input.ed25519, ED25519_COLOR, -BAR_WIDTH / 2.0),
        (Scheme::Secp256k1, input.secp256k1, SECP256K1_COLOR, BAR_WIDTH / 2.0),
    ] {
        chart
            .draw_series(times.iter().enumerate().map(|(i, &t)| {
                let center = i as f64 + offset;
                Rectangle::new(
                    [(center - BAR_WIDTH / 2.0, 0.0), (center + BAR_WIDTH / 2.0, t)],
                    color.mix(BAR_OPACITY).filled(),
                )
            }))?
            .label(scheme.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 10), (x + 20, y + 10)], color.mix(BAR_OPACITY).filled())
            });

        let value_style = TextStyle::from(("sans-serif", 28).into_font().style(FontStyle::Bold))
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart
            .draw_series(times.iter().enumerate().map(|(i, &t)| {
                let y_offset = (t * 0.02).max(5.0);
                Text::new(
                    format!("{t:.1}"),
                    (i as f64 + offset, t + y_offset),
                    value_style.clone(),
                )
            }))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 34))
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.3))
        .draw()?;

    Ok(())
}

fn draw_env_block<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lines: &[String],
) -> ReportResult<()> {
    for (i, line) in lines.iter().enumerate() {
        let y = (ENV_PADDING + ENV_LINE_HEIGHT * i as u32) as i32;
        area.draw(&Text::new(
            line.as_str(),
            (ENV_PADDING as i32, y),
            ("monospace", 28).into_font(),
        ))?;
    }
    Ok(())
}
