use alphapredict_brnn::AlphaPredictor;
use anyhow::{bail, Context, Result};
use bon::Builder;
use std::path::Path;
use svg::node::element::path::Data;
use svg::node::element::{Group, Line, Path as SvgPath, Rectangle, Text};
use svg::Document;
use tracing::debug;

/// Lower and upper limit of the score axis.
const SCORE_AXIS: (f64, f64) = (0.0, 100.0);

/// Figure size in inches, as rendered at `dpi`.
const FIGURE_INCHES: (f64, f64) = (8.0, 4.0);

/// Appearance of a confidence plot.
///
/// ```ignore
/// let options = GraphOptions::builder()
///     .title("Ubiquitin".to_string())
///     .shaded_regions(vec![(1, 10)])
///     .build();
/// ```
#[derive(Builder, Clone, Debug)]
pub struct GraphOptions {
    #[builder(default = String::from("Predicted Confidence Score"))]
    title: String,
    #[builder(default = 50.0)]
    confidence_threshold: f64,
    /// 1-based, inclusive residue ranges to highlight.
    #[builder(default)]
    shaded_regions: Vec<(usize, usize)>,
    #[builder(default = String::from("red"))]
    shaded_region_color: String,
    #[builder(default = String::from("blue"))]
    confidence_line_color: String,
    #[builder(default = String::from("black"))]
    threshold_line_color: String,
    #[builder(default = 150)]
    dpi: u32,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Pixel geometry of the plotting area.
struct Frame {
    width: f64,
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    residues: usize,
    scale: f64,
}

impl Frame {
    fn new(residues: usize, dpi: u32) -> Self {
        let dpi = f64::from(dpi);
        let scale = dpi / 100.0;
        let width = FIGURE_INCHES.0 * dpi;
        let height = FIGURE_INCHES.1 * dpi;
        Self {
            width,
            height,
            left: 0.12 * width,
            right: 0.97 * width,
            top: 0.12 * height,
            bottom: 0.85 * height,
            residues,
            scale,
        }
    }

    /// x coordinate of a 1-based residue position.
    fn x(&self, position: f64) -> f64 {
        let span = (self.residues.max(2) - 1) as f64;
        self.left + (position - 1.0) / span * (self.right - self.left)
    }

    fn y(&self, score: f64) -> f64 {
        let (low, high) = SCORE_AXIS;
        let score = score.clamp(low, high);
        self.bottom - (score - low) / (high - low) * (self.bottom - self.top)
    }

    fn font_size(&self, points: f64) -> f64 {
        points * self.scale
    }
}

/// Smallest step from {1, 2, 5} x 10^k giving at most `max_ticks` ticks.
fn tick_step(span: usize, max_ticks: usize) -> usize {
    let mut magnitude = 1;
    loop {
        for factor in [1, 2, 5] {
            let step = factor * magnitude;
            if span / step < max_ticks {
                return step;
            }
        }
        magnitude *= 10;
    }
}

fn label(content: String, x: f64, y: f64, size: f64, anchor: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", "sans-serif")
        .set("font-size", size)
        .set("text-anchor", anchor)
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64, width: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", "black")
        .set("stroke-width", width)
}

fn axes(frame: &Frame) -> Group {
    let stroke = frame.scale;
    let tick = 5.0 * frame.scale;
    let font = frame.font_size(10.0);
    let mut group = Group::new()
        .set("class", "axes")
        .add(axis_line(frame.left, frame.bottom, frame.right, frame.bottom, stroke))
        .add(axis_line(frame.left, frame.top, frame.left, frame.bottom, stroke));

    for score in (0..=100).step_by(20) {
        let y = frame.y(f64::from(score));
        group = group
            .add(axis_line(frame.left - tick, y, frame.left, y, stroke))
            .add(label(
                score.to_string(),
                frame.left - 2.0 * tick,
                y + font / 3.0,
                font,
                "end",
            ));
    }
    let step = tick_step(frame.residues, 10);
    let mut ticks = vec![1];
    ticks.extend((step..=frame.residues).step_by(step).filter(|&p| p > 1));
    for position in ticks {
        let x = frame.x(position as f64);
        group = group
            .add(axis_line(x, frame.bottom, x, frame.bottom + tick, stroke))
            .add(label(
                position.to_string(),
                x,
                frame.bottom + 2.0 * tick + font,
                font,
                "middle",
            ));
    }

    group
        .add(label(
            "Residue".to_string(),
            (frame.left + frame.right) / 2.0,
            frame.height - 2.0 * frame.scale,
            frame.font_size(12.0),
            "middle",
        ))
        .add(
            label(
                "Predicted Confidence Score".to_string(),
                0.0,
                0.0,
                frame.font_size(12.0),
                "middle",
            )
            .set(
                "transform",
                format!(
                    "translate({}, {}) rotate(-90)",
                    4.0 * frame.font_size(3.0),
                    (frame.top + frame.bottom) / 2.0
                ),
            ),
        )
}

/// Plot already computed scores.
///
/// Errors on an empty score list or a shaded region outside `1..=scores.len()`.
pub fn plot_scores(scores: &[f64], options: &GraphOptions) -> Result<Document> {
    if scores.is_empty() {
        bail!("nothing to plot: no scores");
    }
    let frame = Frame::new(scores.len(), options.dpi);

    let mut document = Document::new()
        .set("width", frame.width)
        .set("height", frame.height)
        .set("viewBox", (0.0, 0.0, frame.width, frame.height))
        .add(
            Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", "white"),
        );

    for &(start, end) in options.shaded_regions.iter() {
        if start == 0 || start > end || end > scores.len() {
            bail!(
                "shaded region {start}-{end} is outside residues 1-{}",
                scores.len()
            );
        }
        let x0 = frame.x(start as f64);
        let x1 = frame.x(end as f64);
        document = document.add(
            Rectangle::new()
                .set("class", "shaded-region")
                .set("x", x0)
                .set("y", frame.top)
                .set("width", (x1 - x0).max(frame.scale))
                .set("height", frame.bottom - frame.top)
                .set("fill", options.shaded_region_color.as_str())
                .set("fill-opacity", 0.3),
        );
    }

    let threshold = frame.y(options.confidence_threshold);
    document = document.add(
        axis_line(frame.left, threshold, frame.right, threshold, frame.scale)
            .set("class", "threshold")
            .set("stroke", options.threshold_line_color.as_str())
            .set("stroke-dasharray", format!("{0} {0}", 4.0 * frame.scale)),
    );

    let mut data = Data::new().move_to((frame.x(1.0), frame.y(scores[0])));
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        data = data.line_to((frame.x((idx + 1) as f64), frame.y(score)));
    }
    if scores.len() == 1 {
        // zero-length segment, drawn as a dot by the round cap
        data = data.line_to((frame.x(1.0), frame.y(scores[0])));
    }
    document = document.add(
        SvgPath::new()
            .set("class", "confidence")
            .set("fill", "none")
            .set("stroke", options.confidence_line_color.as_str())
            .set("stroke-width", 1.5 * frame.scale)
            .set("stroke-linecap", "round")
            .set("d", data),
    );

    Ok(document
        .add(axes(&frame))
        .add(label(
            options.title.clone(),
            frame.width / 2.0,
            frame.top / 2.0 + frame.font_size(7.0),
            frame.font_size(14.0),
            "middle",
        )))
}

/// Predict `sequence` and plot it, saving to `output_file` when given.
pub fn graph(
    predictor: &AlphaPredictor,
    sequence: &str,
    options: &GraphOptions,
    output_file: Option<&Path>,
) -> Result<Document> {
    let scores = predictor.predict(sequence)?;
    let document = plot_scores(&scores, options)?;
    if let Some(path) = output_file {
        svg::save(path, &document)
            .with_context(|| format!("Unable to write graph to {}", path.display()))?;
        debug!(path = %path.display(), residues = scores.len(), "saved graph");
    }
    Ok(document)
}
