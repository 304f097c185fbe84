//! alphapredict-brnn
//!
//! Predicts AlphaFold2 per-residue confidence scores (pLDDT) from sequence
//! alone, using a bidirectional LSTM trained on AlphaFold2 structure
//! predictions.
//!
//! ```ignore
//! let scores = alphapredict_brnn::predict("MKVLAAGIVGLLLAGCSSSK")?;
//! ```
//!
//! The free [`predict`] function lazily loads the default network
//! ([`AlphaNetworks::V7`]) once per process. Hosts that want control over the
//! artifact or device construct an [`AlphaPredictor`] themselves.
use candle_core::utils::{cuda_is_available, metal_is_available};
use candle_core::{Device, Result};
use std::sync::OnceLock;
use tracing::info;

pub use brnn::{ResidueNetwork, BRNN};
pub use config::BRNNConfig;
pub use errors::{AlphaError, ModelLoadError, PredictError};
pub use networks::{AlphaNetworks, NETWORKS_DIR};
pub use predictor::{round_to, AlphaPredictor, PredictorConfig, DEFAULT_PRECISION};
pub use weights::{config_for_artifact, load_brnn, ArtifactFormat};

pub mod brnn;
pub mod config;
pub mod errors;
pub mod networks;
pub mod predictor;
pub mod weights;

static DEFAULT_PREDICTOR: OnceLock<AlphaPredictor> = OnceLock::new();

/// The process-wide predictor for the default network, loaded on first use.
///
/// A failed load is returned to the caller and attempted again on the next call.
pub fn default_predictor() -> std::result::Result<&'static AlphaPredictor, ModelLoadError> {
    if let Some(predictor) = DEFAULT_PREDICTOR.get() {
        return Ok(predictor);
    }
    let predictor = AlphaPredictor::load(AlphaNetworks::default())?;
    Ok(DEFAULT_PREDICTOR.get_or_init(|| predictor))
}

/// Confidence score per residue of `sequence`, using the default network.
pub fn predict(sequence: &str) -> std::result::Result<Vec<f64>, AlphaError> {
    Ok(default_predictor()?.predict(sequence)?)
}

pub fn device(cpu: bool) -> Result<Device> {
    if cpu {
        Ok(Device::Cpu)
    } else if cuda_is_available() {
        Ok(Device::new_cuda(0)?)
    } else if metal_is_available() {
        Ok(Device::new_metal(0)?)
    } else {
        info!("no GPU backend compiled in, running on CPU");
        Ok(Device::Cpu)
    }
}
