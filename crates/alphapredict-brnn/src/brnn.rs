//! Bidirectional recurrent network, many-to-many.
//!
//! A stack of bidirectional LSTM layers followed by a linear head that maps
//! the concatenated hidden state of every residue to a single score.
//!
//! ```text
//! one-hot  [B, L, 20]
//!   -> bi-LSTM layer 0        [B, L, 2H]
//!   -> bi-LSTM layer 1..N-1   [B, L, 2H]
//!   -> Linear(2H, 1)          [B, L, 1]
//! ```
//!
//! Parameter names follow the PyTorch `nn.LSTM` state dict so that trained
//! artifacts load without renaming: `lstm.weight_ih_l{k}`,
//! `lstm.weight_hh_l{k}`, `lstm.bias_ih_l{k}`, `lstm.bias_hh_l{k}`, with a
//! `_reverse` suffix for the backward direction, plus `fc.weight` and `fc.bias`.
//!
use super::config::BRNNConfig;
use candle_core::{Module, Result, Tensor, D};
use candle_nn::{linear, ops::sigmoid, Linear, VarBuilder};

/// A network that scores every position of a `[B, L, input_size]` batch.
///
/// The seam used by the predictor; tests substitute their own implementations.
pub trait ResidueNetwork: Module + Send + Sync {
    fn input_size(&self) -> usize;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    fn suffix(&self) -> &'static str {
        match self {
            Direction::Forward => "",
            Direction::Reverse => "_reverse",
        }
    }
}

/// One direction of one LSTM layer.
///
/// Weights are stored transposed and the two PyTorch biases are pre-summed.
#[derive(Clone, Debug)]
struct LstmDirection {
    w_ih_t: Tensor,
    w_hh_t: Tensor,
    bias: Tensor,
    hidden_size: usize,
    direction: Direction,
}

impl LstmDirection {
    fn load(
        vb: &VarBuilder,
        in_dim: usize,
        hidden_size: usize,
        layer_idx: usize,
        direction: Direction,
    ) -> Result<Self> {
        let suffix = direction.suffix();
        let gate_dim = 4 * hidden_size;
        let w_ih = vb.get((gate_dim, in_dim), &format!("weight_ih_l{layer_idx}{suffix}"))?;
        let w_hh = vb.get((gate_dim, hidden_size), &format!("weight_hh_l{layer_idx}{suffix}"))?;
        let b_ih = vb.get(gate_dim, &format!("bias_ih_l{layer_idx}{suffix}"))?;
        let b_hh = vb.get(gate_dim, &format!("bias_hh_l{layer_idx}{suffix}"))?;
        Ok(Self {
            w_ih_t: w_ih.t()?.contiguous()?,
            w_hh_t: w_hh.t()?.contiguous()?,
            bias: b_ih.add(&b_hh)?,
            hidden_size,
            direction,
        })
    }

    /// Run the recurrence over `[B, L, in]`, returning `[B, L, H]` aligned to input positions.
    fn scan(&self, xs: &Tensor) -> Result<Tensor> {
        let (batch, seq_len, _) = xs.dims3()?;
        // input projections for every timestep at once: [B, L, 4H]
        let projected = xs.broadcast_matmul(&self.w_ih_t)?.broadcast_add(&self.bias)?;
        let mut h = Tensor::zeros((batch, self.hidden_size), xs.dtype(), xs.device())?;
        let mut c = h.clone();
        let mut outputs = Vec::with_capacity(seq_len);
        for step in 0..seq_len {
            let t = match self.direction {
                Direction::Forward => step,
                Direction::Reverse => seq_len - 1 - step,
            };
            let gates = projected
                .narrow(1, t, 1)?
                .squeeze(1)?
                .add(&h.matmul(&self.w_hh_t)?)?;
            // PyTorch gate order: input, forget, cell, output
            let gates = gates.chunk(4, D::Minus1)?;
            let input_gate = sigmoid(&gates[0])?;
            let forget_gate = sigmoid(&gates[1])?;
            let cell_gate = gates[2].tanh()?;
            let output_gate = sigmoid(&gates[3])?;
            c = forget_gate.mul(&c)?.add(&input_gate.mul(&cell_gate)?)?;
            h = output_gate.mul(&c.tanh()?)?;
            outputs.push(h.clone());
        }
        if self.direction == Direction::Reverse {
            outputs.reverse();
        }
        Tensor::stack(&outputs, 1)
    }
}

#[derive(Clone, Debug)]
struct BiLstmLayer {
    forward: LstmDirection,
    reverse: LstmDirection,
}

impl BiLstmLayer {
    fn load(vb: &VarBuilder, in_dim: usize, hidden_size: usize, layer_idx: usize) -> Result<Self> {
        Ok(Self {
            forward: LstmDirection::load(vb, in_dim, hidden_size, layer_idx, Direction::Forward)?,
            reverse: LstmDirection::load(vb, in_dim, hidden_size, layer_idx, Direction::Reverse)?,
        })
    }
}

impl Module for BiLstmLayer {
    fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        let forward = self.forward.scan(xs)?;
        let reverse = self.reverse.scan(xs)?;
        Tensor::cat(&[&forward, &reverse], D::Minus1)
    }
}

/// The BRNN many-to-many regressor.
///
/// Cloning is cheap: parameter tensors share storage, so workers can each own
/// a handle onto the same weights.
#[derive(Clone, Debug)]
pub struct BRNN {
    layers: Vec<BiLstmLayer>,
    fc: Linear,
    config: BRNNConfig,
}

impl BRNN {
    pub fn load(vb: VarBuilder, cfg: &BRNNConfig) -> Result<Self> {
        let lstm_vb = vb.pp("lstm");
        let mut layers = Vec::with_capacity(cfg.num_layers);
        for layer_idx in 0..cfg.num_layers {
            let in_dim = if layer_idx == 0 {
                cfg.input_size
            } else {
                cfg.bidirectional_size()
            };
            layers.push(BiLstmLayer::load(
                &lstm_vb,
                in_dim,
                cfg.hidden_size,
                layer_idx,
            )?);
        }
        let fc = linear(cfg.bidirectional_size(), cfg.num_classes, vb.pp("fc"))?;
        Ok(Self {
            layers,
            fc,
            config: *cfg,
        })
    }

    pub fn config(&self) -> &BRNNConfig {
        &self.config
    }
}

impl Module for BRNN {
    /// `[B, L, input_size]` -> `[B, L, num_classes]`
    fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        let (_, _, width) = xs.dims3()?;
        if width != self.config.input_size {
            candle_core::bail!(
                "BRNN expects {} features per residue, got {width}",
                self.config.input_size
            )
        }
        let mut xs = xs.clone();
        for layer in self.layers.iter() {
            xs = layer.forward(&xs)?;
        }
        self.fc.forward(&xs)
    }
}

impl ResidueNetwork for BRNN {
    fn input_size(&self) -> usize {
        self.config.input_size
    }
}
