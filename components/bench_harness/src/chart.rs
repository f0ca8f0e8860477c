//! Chart output
//!
//! The harness treats plotting as a sink: it hands over a title, runtime
//! names and durations (fastest first) plus an axis label. [`SvgChartSink`]
//! writes a horizontal bar chart per benchmark; [`MemorySink`] keeps the
//! requests for inspection.

use crate::report::ReportError;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const WIDTH: f64 = 720.0;
const LABEL_WIDTH: f64 = 170.0;
const VALUE_WIDTH: f64 = 90.0;
const BAR_HEIGHT: f64 = 24.0;
const BAR_GAP: f64 = 8.0;
const TOP: f64 = 48.0;
const BOTTOM: f64 = 48.0;

/// Everything needed to draw one benchmark's chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    /// Benchmark display name, also the chart title
    pub title: String,
    /// Runtime names, fastest first
    pub runtimes: Vec<String>,
    /// Durations matching `runtimes`
    pub durations: Vec<f64>,
    /// Label for the duration axis
    pub axis_label: String,
}

/// Consumer of ranked chart data
pub trait ChartSink {
    /// Render and persist one chart
    fn render(&mut self, chart: &ChartRequest) -> Result<(), ReportError>;
}

/// Collects chart requests in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Requests in the order they were rendered
    pub charts: Vec<ChartRequest>,
}

impl ChartSink for MemorySink {
    fn render(&mut self, chart: &ChartRequest) -> Result<(), ReportError> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

/// Writes `<dir>/<benchmark>.svg` horizontal bar charts
#[derive(Debug, Clone)]
pub struct SvgChartSink {
    dir: PathBuf,
}

impl SvgChartSink {
    /// Create a sink writing into `dir`, created on first render
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path the chart for `title` is written to
    pub fn path_for(&self, title: &str) -> PathBuf {
        let file_name: String = title
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        self.dir.join(format!("{}.svg", file_name))
    }
}

impl ChartSink for SvgChartSink {
    fn render(&mut self, chart: &ChartRequest) -> Result<(), ReportError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&chart.title);
        fs::write(&path, render_svg(chart))?;
        info!(path = %path.display(), "wrote chart");
        Ok(())
    }
}

/// Render a horizontal bar chart as a standalone SVG document
pub fn render_svg(chart: &ChartRequest) -> String {
    let rows = chart.runtimes.len().max(1) as f64;
    let height = TOP + rows * (BAR_HEIGHT + BAR_GAP) + BOTTOM;
    let plot_width = WIDTH - LABEL_WIDTH - VALUE_WIDTH;
    let max = chart.durations.iter().cloned().fold(0.0_f64, f64::max);

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="13">"#,
        w = WIDTH,
        h = height
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="28" text-anchor="middle" font-size="16" font-weight="bold">{}</text>"#,
        WIDTH / 2.0,
        escape(&chart.title)
    );

    if chart.runtimes.is_empty() {
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" text-anchor="middle" fill="gray">no successful runs</text>"#,
            WIDTH / 2.0,
            TOP + BAR_HEIGHT / 2.0
        );
    }

    for (i, (runtime, duration)) in chart.runtimes.iter().zip(&chart.durations).enumerate() {
        let y = TOP + i as f64 * (BAR_HEIGHT + BAR_GAP);
        let bar = if max > 0.0 {
            duration / max * plot_width
        } else {
            0.0
        };
        let text_y = y + BAR_HEIGHT * 0.7;
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{}" text-anchor="end">{}</text>"#,
            LABEL_WIDTH - 8.0,
            text_y,
            escape(runtime)
        );
        let _ = writeln!(
            svg,
            r##"<rect x="{}" y="{}" width="{:.2}" height="{}" fill="#1f77b4"/>"##,
            LABEL_WIDTH, y, bar, BAR_HEIGHT
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.2}" y="{}">{:.2}</text>"#,
            LABEL_WIDTH + bar + 6.0,
            text_y,
            duration
        );
    }

    let axis_y = height - BOTTOM + 8.0;
    let _ = writeln!(
        svg,
        r#"<line x1="{l}" y1="{y}" x2="{r}" y2="{y}" stroke="black"/>"#,
        l = LABEL_WIDTH,
        r = LABEL_WIDTH + plot_width,
        y = axis_y
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
        LABEL_WIDTH + plot_width / 2.0,
        axis_y + 26.0,
        escape(&chart.axis_label)
    );
    svg.push_str("</svg>\n");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
