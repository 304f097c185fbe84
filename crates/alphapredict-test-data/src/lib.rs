//! alphapredict-test-data
//!
//! Test inputs shared across the alphaPredict crates.
//!
//! - [`TestFile`] packages FASTA files embedded in the crate and writes them to
//!   temporary files for programs to operate on.
//! - [`TestNetwork`] writes small, deterministic BRNN weight artifacts so the
//!   whole prediction path can be exercised without the trained networks.
//! - [`reference`] is a plain `f64` BRNN used to check the tensor implementation.
use std::fs;
use tempfile::{Builder, NamedTempFile};

pub mod network;
pub mod reference;

pub use network::TestNetwork;

/// Sequence used for the golden-output regression tests.
pub const GOLDEN_SEQUENCE: &str = "MKTAYIAKQR";

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use alphapredict_test_data::TestFile;
/// let (fasta, _temp) = TestFile::fasta_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Human hemoglobin alpha (142 aa), lower case ubiquitin (76 aa) wrapped
    /// over two lines, and a 10 residue peptide preceded by a blank line.
    pub fn fasta_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/fasta/proteins.fasta"),
            suffix: "fasta",
        }
    }
    /// Two records, the second containing an alignment gap.
    pub fn fasta_invalid() -> Self {
        Self {
            filebinary: include_bytes!("../data/fasta/invalid.fasta"),
            suffix: "fasta",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
