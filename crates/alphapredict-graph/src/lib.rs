//! alphapredict-graph
//!
//! Renders per-residue confidence scores as an SVG line plot: residue
//! position on x, score on a fixed 0–100 y axis, a dashed threshold line and
//! optional shaded residue ranges.
//!
pub mod graph;

pub use graph::{graph, plot_scores, GraphOptions};
