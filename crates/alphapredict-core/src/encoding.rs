//! Sequence encoding.
//!
//! Turns a protein sequence into the `(L, 20)` float tensor the BRNN consumes.
use crate::errors::EncodingError;
use crate::info::constants::{AminoAcid, ONE_HOT_ALPHABET};
use candle_core::{Device, Tensor};

/// Encoding schemes a network can be trained against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EncodingScheme {
    #[default]
    OneHot,
}

impl EncodingScheme {
    /// Width of the per-residue vector.
    pub fn width(&self) -> usize {
        match self {
            EncodingScheme::OneHot => ONE_HOT_ALPHABET.len(),
        }
    }

    pub fn encode(&self, sequence: &str, device: &Device) -> Result<Tensor, EncodingError> {
        match self {
            EncodingScheme::OneHot => one_hot(sequence, device),
        }
    }
}

/// One-hot column of an upper case residue, if it is one of the 20.
pub fn residue_index(residue: char) -> Option<usize> {
    AminoAcid::from_char(residue).map(AminoAcid::index)
}

/// Map each residue to its one-hot column, failing on the first unknown symbol.
pub fn residue_indices(sequence: &str) -> Result<Vec<usize>, EncodingError> {
    if sequence.is_empty() {
        return Err(EncodingError::EmptySequence);
    }
    sequence
        .chars()
        .enumerate()
        .map(|(position, residue)| {
            residue_index(residue).ok_or(EncodingError::InvalidResidue { residue, position })
        })
        .collect()
}

/// One-hot encode an upper case sequence.
///
/// Returns an `F32` tensor of shape `(sequence length, 20)`.
pub fn one_hot(sequence: &str, device: &Device) -> Result<Tensor, EncodingError> {
    let indices = residue_indices(sequence)?;
    let width = ONE_HOT_ALPHABET.len();
    let mut data = vec![0f32; indices.len() * width];
    for (row, column) in indices.iter().enumerate() {
        data[row * width + column] = 1.0;
    }
    Ok(Tensor::from_vec(data, (indices.len(), width), device)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_hot_rows() -> Result<(), EncodingError> {
        let encoded = one_hot("ACY", &Device::Cpu)?;
        assert_eq!(encoded.dims(), &[3, 20]);
        let rows = encoded.to_vec2::<f32>()?;
        for (row, hot) in rows.iter().zip([0usize, 1, 19]) {
            assert_eq!(row.iter().sum::<f32>(), 1.0);
            assert_eq!(row[hot], 1.0);
        }
        Ok(())
    }

    #[test]
    fn test_invalid_residue_reports_position() {
        let err = one_hot("ACDZZ", &Device::Cpu).unwrap_err();
        match err {
            EncodingError::InvalidResidue { residue, position } => {
                assert_eq!(residue, 'Z');
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_gaps_and_lowercase_rejected() {
        for (seq, pos) in [("AC-D", 2), ("M*", 1), ("MK V", 2), ("mk", 0)] {
            match residue_indices(seq) {
                Err(EncodingError::InvalidResidue { position, .. }) => assert_eq!(position, pos),
                other => panic!("{seq}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_residue_index_follows_alphabet() {
        for (idx, residue) in "ACDEFGHIKLMNPQRSTVWY".chars().enumerate() {
            assert_eq!(residue_index(residue), Some(idx));
        }
        assert_eq!(residue_index('X'), None);
        assert_eq!(residue_index('a'), None);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(matches!(
            one_hot("", &Device::Cpu),
            Err(EncodingError::EmptySequence)
        ));
    }

    #[test]
    fn test_scheme_width() {
        assert_eq!(EncodingScheme::OneHot.width(), 20);
        assert_eq!(EncodingScheme::default(), EncodingScheme::OneHot);
    }
}
