//! Synthetic BRNN artifacts.
//!
//! Parameters follow a fixed integer pattern rather than a random generator so
//! that expected outputs can be reproduced anywhere.
use candle_core::{Device, Tensor};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

/// Bias of the output head. Scores sit around this value.
pub const HEAD_BIAS: f32 = 50.0;
/// Scale applied to the output head weights.
pub const HEAD_SCALE: f32 = 20.0;

/// A flat, row-major parameter with its shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub shape: Vec<usize>,
    pub values: Vec<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestNetwork {
    pub hidden_size: usize,
    pub num_layers: usize,
}

impl TestNetwork {
    pub fn new(hidden_size: usize, num_layers: usize) -> Self {
        Self {
            hidden_size,
            num_layers,
        }
    }

    /// Two layers, hidden size 3: small enough to check by hand.
    pub fn small() -> Self {
        Self::new(3, 2)
    }

    /// Value of element `index` of the parameter numbered `seed`, in `[-0.5, 0.5)`.
    pub fn param(seed: usize, index: usize) -> f32 {
        ((index * 37 + seed * 101) % 23) as f32 / 23.0 - 0.5
    }

    /// Every parameter of the network keyed by its PyTorch state dict name.
    pub fn parameters(&self) -> BTreeMap<String, Parameter> {
        let hidden = self.hidden_size;
        let gates = 4 * hidden;
        let mut params = BTreeMap::new();
        let mut seed = 0;
        let mut push = |name: String, shape: Vec<usize>, scale: f32| {
            let count = shape.iter().product::<usize>();
            let values = (0..count)
                .map(|index| Self::param(seed, index) * scale)
                .collect();
            params.insert(name, Parameter { shape, values });
            seed += 1;
        };
        for layer in 0..self.num_layers {
            let in_dim = if layer == 0 { 20 } else { 2 * hidden };
            for suffix in ["", "_reverse"] {
                push(
                    format!("lstm.weight_ih_l{layer}{suffix}"),
                    vec![gates, in_dim],
                    1.0,
                );
                push(
                    format!("lstm.weight_hh_l{layer}{suffix}"),
                    vec![gates, hidden],
                    1.0,
                );
                push(format!("lstm.bias_ih_l{layer}{suffix}"), vec![gates], 1.0);
                push(format!("lstm.bias_hh_l{layer}{suffix}"), vec![gates], 1.0);
            }
        }
        push("fc.weight".to_string(), vec![1, 2 * hidden], HEAD_SCALE);
        params.insert(
            "fc.bias".to_string(),
            Parameter {
                shape: vec![1],
                values: vec![HEAD_BIAS],
            },
        );
        params
    }

    /// Upper bound on `|score|`: every hidden unit lies in `(-1, 1)`.
    pub fn score_bound(&self) -> f64 {
        let params = self.parameters();
        let head: f64 = params["fc.weight"]
            .values
            .iter()
            .map(|w| f64::from(w.abs()))
            .sum();
        f64::from(HEAD_BIAS) + head
    }

    pub fn tensors(&self) -> candle_core::Result<BTreeMap<String, Tensor>> {
        self.parameters()
            .into_iter()
            .map(|(name, param)| {
                let tensor = Tensor::from_vec(param.values, param.shape, &Device::Cpu)?;
                Ok((name, tensor))
            })
            .collect()
    }

    /// File name carrying the `_hs<H>_nL<N>_` hyperparameter tags.
    pub fn artifact_name(&self) -> String {
        format!(
            "test_network_hs{}_nL{}_.safetensors",
            self.hidden_size, self.num_layers
        )
    }

    fn write_safetensors(&self, path: &Path) -> io::Result<()> {
        let tensors: std::collections::HashMap<String, Tensor> = self
            .tensors()
            .map_err(io::Error::other)?
            .into_iter()
            .collect();
        candle_core::safetensors::save(&tensors, path).map_err(io::Error::other)
    }

    /// Write the artifact under a tagged name into a fresh temporary directory.
    ///
    /// Returns (artifact path, directory handle); the directory is removed
    /// when the handle drops.
    pub fn create_temp(&self) -> io::Result<(String, TempDir)> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(self.artifact_name());
        self.write_safetensors(&path)?;
        Ok((path.to_string_lossy().into_owned(), dir))
    }

    /// Write the artifact under an untagged name with a `.json` config beside it.
    pub fn create_temp_with_config(&self) -> io::Result<(String, TempDir)> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("custom_network.safetensors");
        self.write_safetensors(&path)?;
        let config = serde_json::json!({
            "hidden_size": self.hidden_size,
            "num_layers": self.num_layers,
        });
        fs::write(path.with_extension("json"), config.to_string())?;
        Ok((path.to_string_lossy().into_owned(), dir))
    }
}
