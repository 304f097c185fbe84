//! alphapredict-core
//!
//! Sequence level building blocks shared by the alphaPredict crates:
//!
//! - the canonical amino acid alphabet and its frozen one-hot ordering
//! - one-hot encoding of protein sequences into `candle` tensors
//! - the [`EncodingError`] raised for sequences the networks cannot read
//!
//! ```
//! use alphapredict_core::encoding::one_hot;
//! use candle_core::Device;
//!
//! let encoded = one_hot("MKVL", &Device::Cpu).unwrap();
//! assert_eq!(encoded.dims(), &[4, 20]);
//! ```
pub mod encoding;
pub mod errors;
pub mod info;

pub use encoding::{one_hot, residue_index, EncodingScheme};
pub use errors::EncodingError;
pub use info::constants::{AminoAcid, ONE_HOT_ALPHABET};
