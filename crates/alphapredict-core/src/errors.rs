use thiserror::Error;

/// Reasons a sequence cannot be turned into network input.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("cannot encode an empty sequence")]
    EmptySequence,

    /// `position` is the 0-based index of the residue in the sequence.
    #[error("invalid residue '{residue}' at position {position}")]
    InvalidResidue { residue: char, position: usize },

    #[error(transparent)]
    Tensor(#[from] candle_core::Error),
}
