use crate::config::BRNNConfig;
use alphapredict_core::EncodingError;
use std::path::PathBuf;
use thiserror::Error;

/// A network could not be brought up. None of these are retryable.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("network weights not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("unsupported weight format for {} (expected .pt, .pth or .safetensors)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("no hyperparameters for {}: add a JSON config next to it or tag the name with _hs<H>_nL<N>_", path.display())]
    MissingConfig { path: PathBuf },

    #[error("invalid network config {config:?}: {reason}")]
    InvalidConfig { config: BRNNConfig, reason: String },

    #[error("weights in {} do not match {config:?}", path.display())]
    Incompatible {
        path: PathBuf,
        config: BRNNConfig,
        #[source]
        source: candle_core::Error,
    },

    #[error("failed to parse network config {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("network produced {actual} scores for {expected} residues")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("network produced a non-finite score ({value}) at position {position}")]
    NonFiniteScore { position: usize, value: f64 },

    #[error("forward pass failed")]
    Forward(#[from] candle_core::Error),
}

/// Either half of the load-then-predict path.
#[derive(Debug, Error)]
pub enum AlphaError {
    #[error(transparent)]
    Load(#[from] ModelLoadError),

    #[error(transparent)]
    Predict(#[from] PredictError),
}
