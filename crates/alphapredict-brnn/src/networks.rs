//! Trained networks shipped with alphaPredict.
//!
//! Each version was trained with its own hyperparameters, so a version
//! names both the artifact and the [`BRNNConfig`] needed to rebuild it.
use crate::config::BRNNConfig;
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter};

/// Directory holding the bundled weight artifacts.
pub const NETWORKS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/networks");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, ValueEnum)]
pub enum AlphaNetworks {
    #[value(name = "v1")]
    V1,
    #[value(name = "v2")]
    V2,
    #[value(name = "v3")]
    V3,
    #[value(name = "v4")]
    V4,
    #[value(name = "v5")]
    V5,
    #[value(name = "v6")]
    V6,
    #[default]
    #[value(name = "v7")]
    V7,
}

impl AlphaNetworks {
    pub fn filename(&self) -> &'static str {
        match self {
            AlphaNetworks::V1 => "alpha_fold_networkV1.pt",
            AlphaNetworks::V2 => "alpha_fold_networkV2_hs20_nL2_200e.pt",
            AlphaNetworks::V3 => "alpha_fold_networkV3_hs20_nL2_1000e.pt",
            AlphaNetworks::V4 => "alpha_fold_networkV4_hs20_nL2_200e_all_prot.pt",
            AlphaNetworks::V5 => "alpha_fold_networkV5_hs40_nL5_200e_all_prot.pt",
            AlphaNetworks::V6 => "alpha_fold_networkV6_hs40_nL2_200e_all_prot.pt",
            AlphaNetworks::V7 => "alpha_fold_networkV7_hs100_nL2_200e_all_prot.pt",
        }
    }

    pub fn config(&self) -> BRNNConfig {
        let (hidden_size, num_layers) = match self {
            AlphaNetworks::V1 => (10, 1),
            AlphaNetworks::V2 | AlphaNetworks::V3 | AlphaNetworks::V4 => (20, 2),
            AlphaNetworks::V5 => (40, 5),
            AlphaNetworks::V6 => (40, 2),
            AlphaNetworks::V7 => (100, 2),
        };
        BRNNConfig::new(hidden_size, num_layers)
    }

    pub fn path(&self) -> PathBuf {
        Path::new(NETWORKS_DIR).join(self.filename())
    }
}
