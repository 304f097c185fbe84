//! BRNN hyperparameters.
//!
//! A weight artifact only loads into a network built with the exact
//! hyperparameters it was trained with.
use crate::errors::ModelLoadError;
use alphapredict_core::EncodingScheme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BRNNConfig {
    #[serde(default = "default_input_size")]
    pub input_size: usize,
    pub hidden_size: usize,
    pub num_layers: usize,
    #[serde(default = "default_num_classes")]
    pub num_classes: usize,
}

fn default_input_size() -> usize {
    EncodingScheme::OneHot.width()
}

fn default_num_classes() -> usize {
    1
}

impl BRNNConfig {
    /// Regression network over one-hot residues.
    pub fn new(hidden_size: usize, num_layers: usize) -> Self {
        Self {
            input_size: default_input_size(),
            hidden_size,
            num_layers,
            num_classes: default_num_classes(),
        }
    }

    /// Width of the concatenated forward/reverse hidden state.
    pub fn bidirectional_size(&self) -> usize {
        2 * self.hidden_size
    }

    /// Recover hyperparameters from the `_hs{H}_nL{N}` tags in an artifact name,
    /// e.g. `alpha_fold_networkV7_hs100_nL2_200e_all_prot.pt`.
    pub fn from_artifact_name(name: &str) -> Option<Self> {
        let stem = name.split('.').next().unwrap_or(name);
        let tag = |prefix: &str| {
            stem.split('_')
                .filter_map(|part| part.strip_prefix(prefix))
                .find_map(|digits| digits.parse::<usize>().ok())
        };
        Some(Self::new(tag("hs")?, tag("nL")?))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BRNNConfig =
            serde_json::from_str(&contents).map_err(|source| ModelLoadError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config)
    }

    /// Reject configurations no artifact of this predictor can satisfy.
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        let width = EncodingScheme::OneHot.width();
        let reason = if self.input_size != width {
            format!("input_size must be {width}, got {}", self.input_size)
        } else if self.num_classes != 1 {
            format!("num_classes must be 1, got {}", self.num_classes)
        } else if self.hidden_size == 0 || self.num_layers == 0 {
            "hidden_size and num_layers must be non-zero".to_string()
        } else {
            return Ok(());
        };
        Err(ModelLoadError::InvalidConfig {
            config: *self,
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_artifact_name() {
        let cfg =
            BRNNConfig::from_artifact_name("alpha_fold_networkV7_hs100_nL2_200e_all_prot.pt")
                .unwrap();
        assert_eq!(cfg, BRNNConfig::new(100, 2));
        assert_eq!(cfg.bidirectional_size(), 200);
        assert_eq!(BRNNConfig::from_artifact_name("alpha_fold_networkV1.pt"), None);
    }

    #[test]
    fn test_json_defaults() {
        let cfg: BRNNConfig =
            serde_json::from_str(r#"{"hidden_size": 40, "num_layers": 5}"#).unwrap();
        assert_eq!(cfg, BRNNConfig::new(40, 5));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let mut cfg = BRNNConfig::new(20, 2);
        cfg.input_size = 21;
        assert!(matches!(
            cfg.validate(),
            Err(ModelLoadError::InvalidConfig { .. })
        ));
        assert!(BRNNConfig::new(0, 2).validate().is_err());
    }
}
