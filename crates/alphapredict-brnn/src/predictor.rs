//! Alpha Predictor
//!
//! Drives a single sequence through encoding, the network and decoding.
//!
//! ```ignore
//! use alphapredict_brnn::{AlphaNetworks, AlphaPredictor};
//!
//! let predictor = AlphaPredictor::load(AlphaNetworks::V7)?;
//! let scores = predictor.predict("MKVLAAGIVG")?;
//! assert_eq!(scores.len(), 10);
//! ```
use crate::brnn::{ResidueNetwork, BRNN};
use crate::config::BRNNConfig;
use crate::errors::{ModelLoadError, PredictError};
use crate::networks::AlphaNetworks;
use crate::weights::{config_for_artifact, load_brnn};
use alphapredict_core::EncodingScheme;
use candle_core::{DType, Device};
use std::path::Path;
use tracing::{debug, warn};

/// Decimal digits kept in every score.
pub const DEFAULT_PRECISION: u32 = 4;

/// Everything about a prediction that is not the network itself.
#[derive(Clone, Debug)]
pub struct PredictorConfig {
    pub device: Device,
    pub encoding: EncodingScheme,
    pub precision: u32,
    /// Optional `(min, max)` bound applied before rounding.
    pub clamp: Option<(f64, f64)>,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            device: Device::Cpu,
            encoding: EncodingScheme::OneHot,
            precision: DEFAULT_PRECISION,
            clamp: None,
        }
    }
}

/// Round to `digits` decimal places, exact ties going to the even digit.
///
/// f32 network outputs are often exact binary fractions such as `50.53125`,
/// which sit exactly on a tie at four digits.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round_ties_even() / factor
}

/// Per-residue confidence predictor.
///
/// `predict` takes `&self` and only allocates per-call tensors, so one
/// predictor can serve many threads through an `Arc`.
pub struct AlphaPredictor<N: ResidueNetwork = BRNN> {
    network: N,
    config: PredictorConfig,
}

impl AlphaPredictor<BRNN> {
    /// Load one of the bundled networks on the CPU.
    pub fn load(network: AlphaNetworks) -> Result<Self, ModelLoadError> {
        Self::from_artifact(network.path(), &network.config(), PredictorConfig::default())
    }

    pub fn from_artifact(
        path: impl AsRef<Path>,
        brnn_config: &BRNNConfig,
        config: PredictorConfig,
    ) -> Result<Self, ModelLoadError> {
        let brnn = load_brnn(path, brnn_config, &config.device)?;
        Ok(Self::new(brnn, config))
    }

    /// Load an artifact whose hyperparameters come from a sidecar JSON or its file name.
    pub fn from_artifact_path(
        path: impl AsRef<Path>,
        config: PredictorConfig,
    ) -> Result<Self, ModelLoadError> {
        let brnn_config = config_for_artifact(path.as_ref())?;
        Self::from_artifact(path, &brnn_config, config)
    }
}

impl<N: ResidueNetwork> AlphaPredictor<N> {
    /// Bind a network to a predictor configuration.
    ///
    /// # Panics
    ///
    /// If the encoding width differs from the network input width. That is a
    /// wiring defect: every prediction would fail or be meaningless.
    pub fn new(network: N, config: PredictorConfig) -> Self {
        assert_eq!(
            config.encoding.width(),
            network.input_size(),
            "encoder width and network input width disagree"
        );
        Self { network, config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    pub fn network(&self) -> &N {
        &self.network
    }

    /// Predict the confidence score of every residue in `sequence`.
    ///
    /// Lower case input is accepted. The result has one entry per residue, in
    /// order, each rounded to [`PredictorConfig::precision`] digits.
    pub fn predict(&self, sequence: &str) -> Result<Vec<f64>, PredictError> {
        let sequence = sequence.to_ascii_uppercase();
        let encoded = self
            .config
            .encoding
            .encode(&sequence, &self.config.device)?;
        let residues = encoded.dim(0)?;
        debug!(residues, "running forward pass");

        // batch of one: [1, L, width]
        let batch = encoded.unsqueeze(0)?;
        let raw = self
            .network
            .forward(&batch)?
            .flatten_all()?
            .to_dtype(DType::F32)?
            .to_vec1::<f32>()?;
        if raw.len() != residues {
            return Err(PredictError::LengthMismatch {
                expected: residues,
                actual: raw.len(),
            });
        }
        raw.into_iter()
            .enumerate()
            .map(|(position, value)| self.decode(position, f64::from(value)))
            .collect()
    }

    fn decode(&self, position: usize, value: f64) -> Result<f64, PredictError> {
        if !value.is_finite() {
            return Err(PredictError::NonFiniteScore { position, value });
        }
        let value = match self.config.clamp {
            Some((min, max)) if value < min || value > max => {
                warn!(position, value, min, max, "clamping score");
                value.clamp(min, max)
            }
            _ => value,
        };
        Ok(round_to(value, self.config.precision))
    }
}
