pub mod fasta;
pub mod graph;
pub mod networks;
pub mod predict;

use crate::cli::NetworkArgs;
use alphapredict_brnn::{device, AlphaPredictor, BRNNConfig, PredictorConfig};
use anyhow::Result;
use tracing::debug;

/// Build the predictor selected on the command line.
pub fn load_predictor(args: &NetworkArgs) -> Result<AlphaPredictor> {
    let config = PredictorConfig {
        device: device(args.cpu)?,
        ..Default::default()
    };
    let predictor = match (&args.weights, &args.config) {
        (Some(weights), Some(brnn_config)) => {
            let brnn_config = BRNNConfig::from_json_file(brnn_config)?;
            AlphaPredictor::from_artifact(weights, &brnn_config, config)?
        }
        (Some(weights), None) => AlphaPredictor::from_artifact_path(weights, config)?,
        (None, _) => {
            debug!(network = %args.network, "using bundled network");
            AlphaPredictor::from_artifact(args.network.path(), &args.network.config(), config)?
        }
    };
    Ok(predictor)
}
