//! alphapredict-io
//!
//! Reading sequences in and writing scores out.
//!
//! - [`fasta`]: a small FASTA reader yielding `(id, sequence)` records
//! - [`csv`]: score export, either one row per protein or one row per residue
pub mod csv;
pub mod fasta;

pub use csv::{write_csv, write_table, ScoredRecord};
pub use fasta::{parse_fasta, read_fasta, FastaRecord};
