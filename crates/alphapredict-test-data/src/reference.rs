//! Scalar BRNN.
//!
//! A direct `f64` transcription of the bidirectional LSTM, sharing nothing
//! with the tensor implementation but the parameter names.
use crate::network::{Parameter, TestNetwork};
use alphapredict_core::AminoAcid;
use std::collections::BTreeMap;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn values(params: &BTreeMap<String, Parameter>, name: &str) -> Vec<f64> {
    params[name].values.iter().map(|&v| f64::from(v)).collect()
}

fn run_direction(
    params: &BTreeMap<String, Parameter>,
    xs: &[Vec<f64>],
    hidden: usize,
    layer: usize,
    suffix: &str,
) -> Vec<Vec<f64>> {
    let in_dim = xs[0].len();
    let w_ih = values(params, &format!("lstm.weight_ih_l{layer}{suffix}"));
    let w_hh = values(params, &format!("lstm.weight_hh_l{layer}{suffix}"));
    let b_ih = values(params, &format!("lstm.bias_ih_l{layer}{suffix}"));
    let b_hh = values(params, &format!("lstm.bias_hh_l{layer}{suffix}"));

    let mut order: Vec<usize> = (0..xs.len()).collect();
    if suffix == "_reverse" {
        order.reverse();
    }
    let mut h = vec![0.0; hidden];
    let mut c = vec![0.0; hidden];
    let mut out = vec![vec![0.0; hidden]; xs.len()];
    for t in order {
        let gate = |row: usize| {
            let mut acc = b_ih[row] + b_hh[row];
            for j in 0..in_dim {
                acc += w_ih[row * in_dim + j] * xs[t][j];
            }
            for j in 0..hidden {
                acc += w_hh[row * hidden + j] * h[j];
            }
            acc
        };
        let gates: Vec<f64> = (0..4 * hidden).map(gate).collect();
        for k in 0..hidden {
            let i = sigmoid(gates[k]);
            let f = sigmoid(gates[hidden + k]);
            let g = gates[2 * hidden + k].tanh();
            let o = sigmoid(gates[3 * hidden + k]);
            c[k] = f * c[k] + i * g;
            h[k] = o * c[k].tanh();
        }
        out[t] = h.clone();
    }
    out
}

/// Unrounded score per residue of an upper case sequence.
///
/// # Panics
///
/// On residues outside the canonical alphabet.
pub fn reference_scores(network: &TestNetwork, sequence: &str) -> Vec<f64> {
    let params = network.parameters();
    let mut xs: Vec<Vec<f64>> = sequence
        .chars()
        .map(|c| {
            let aa = AminoAcid::from_char(c).expect("canonical residue");
            let mut row = vec![0.0; 20];
            row[aa.index()] = 1.0;
            row
        })
        .collect();
    for layer in 0..network.num_layers {
        let forward = run_direction(&params, &xs, network.hidden_size, layer, "");
        let reverse = run_direction(&params, &xs, network.hidden_size, layer, "_reverse");
        xs = forward
            .into_iter()
            .zip(reverse)
            .map(|(mut f, r)| {
                f.extend(r);
                f
            })
            .collect();
    }
    let fc_weight = values(&params, "fc.weight");
    let fc_bias = values(&params, "fc.bias")[0];
    xs.iter()
        .map(|x| fc_bias + x.iter().zip(&fc_weight).map(|(a, w)| a * w).sum::<f64>())
        .collect()
}
