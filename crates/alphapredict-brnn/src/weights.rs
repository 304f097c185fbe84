//! Weight store.
//!
//! Reads a trained artifact from disk and binds it to the hyperparameters it
//! was trained with. Loading happens once; the returned [`BRNN`] is immutable
//! and can be shared by every subsequent prediction.
use crate::brnn::BRNN;
use crate::config::BRNNConfig;
use crate::errors::ModelLoadError;
use candle_core::{DType, Device};
use candle_nn::VarBuilder;
use std::path::Path;
use tracing::info;

/// On-disk serialisations we can read weights from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// `torch.save(model.state_dict())` pickles.
    Pytorch,
    Safetensors,
}

impl ArtifactFormat {
    pub fn from_path(path: &Path) -> Result<Self, ModelLoadError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("pt") | Some("pth") => Ok(ArtifactFormat::Pytorch),
            Some("safetensors") => Ok(ArtifactFormat::Safetensors),
            _ => Err(ModelLoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Find the hyperparameters for an artifact.
///
/// A `<artifact>.json` sidecar wins; otherwise the `_hs<H>_nL<N>_` tags in the
/// file name are used.
pub fn config_for_artifact(path: impl AsRef<Path>) -> Result<BRNNConfig, ModelLoadError> {
    let path = path.as_ref();
    let sidecar = path.with_extension("json");
    if sidecar.is_file() {
        return BRNNConfig::from_json_file(sidecar);
    }
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(BRNNConfig::from_artifact_name)
        .ok_or_else(|| ModelLoadError::MissingConfig {
            path: path.to_path_buf(),
        })
}

/// Load the weights at `path` into a network shaped by `cfg`.
///
/// Every tensor must have exactly the shape `cfg` implies, and the artifact may
/// not contain more LSTM layers than `cfg.num_layers`.
pub fn load_brnn(
    path: impl AsRef<Path>,
    cfg: &BRNNConfig,
    device: &Device,
) -> Result<BRNN, ModelLoadError> {
    let path = path.as_ref();
    cfg.validate()?;
    if !path.is_file() {
        return Err(ModelLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let incompatible = |source: candle_core::Error| ModelLoadError::Incompatible {
        path: path.to_path_buf(),
        config: *cfg,
        source,
    };
    let vb = match ArtifactFormat::from_path(path)? {
        ArtifactFormat::Pytorch => {
            VarBuilder::from_pth(path, DType::F32, device).map_err(incompatible)?
        }
        ArtifactFormat::Safetensors => unsafe {
            VarBuilder::from_mmaped_safetensors(&[path], DType::F32, device)
                .map_err(incompatible)?
        },
    };
    let surplus_layer = format!("lstm.weight_ih_l{}", cfg.num_layers);
    if vb.contains_tensor(&surplus_layer) {
        return Err(incompatible(candle_core::Error::Msg(format!(
            "artifact has more than {} layers ({surplus_layer} present)",
            cfg.num_layers
        ))));
    }
    let brnn = BRNN::load(vb, cfg).map_err(incompatible)?;
    info!(
        path = %path.display(),
        hidden_size = cfg.hidden_size,
        num_layers = cfg.num_layers,
        "loaded BRNN weights"
    );
    Ok(brnn)
}
