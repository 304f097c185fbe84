//! FASTA reader.
//!
//! Headers become record ids verbatim (minus the `>` and surrounding
//! whitespace). Sequence lines are concatenated with all whitespace removed.
//! Residues are not validated here; that is the encoder's job.
use anyhow::{bail, Context, Result};
use memchr::memchr_iter;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

/// Split a buffer into lines, dropping `\r` line endings.
fn lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut start = 0;
    memchr_iter(b'\n', bytes)
        .chain(std::iter::once(bytes.len()))
        .map(move |end| {
            let line = &bytes[start..end];
            start = end + 1;
            line.strip_suffix(b"\r").unwrap_or(line)
        })
}

pub fn parse_fasta(bytes: &[u8]) -> Result<Vec<FastaRecord>> {
    let mut records: Vec<FastaRecord> = Vec::new();
    for (lineno, line) in lines(bytes).enumerate() {
        let line = std::str::from_utf8(line)
            .with_context(|| format!("line {} is not valid UTF-8", lineno + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            records.push(FastaRecord {
                id: header.trim().to_string(),
                sequence: String::new(),
            });
        } else if let Some(record) = records.last_mut() {
            record
                .sequence
                .extend(line.chars().filter(|c| !c.is_whitespace()));
        } else {
            bail!("line {}: sequence data before the first header", lineno + 1);
        }
    }
    Ok(records)
}

pub fn read_fasta(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let records =
        parse_fasta(&bytes).with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "read FASTA");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphapredict_test_data::TestFile;

    #[test]
    fn test_read_fasta() -> Result<()> {
        let (fasta, _temp) = TestFile::fasta_01().create_temp()?;
        let records = read_fasta(fasta)?;
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].id,
            "sp|P69905|HBA_HUMAN Hemoglobin subunit alpha, Homo sapiens"
        );
        assert_eq!(records[0].sequence.len(), 142);
        assert!(records[0].sequence.starts_with("MVLSPADKTNV"));
        assert_eq!(records[1].id, "ubiquitin");
        assert_eq!(records[1].sequence.len(), 76);
        assert_eq!(records[2].sequence, "MKTAYIAKQR");
        Ok(())
    }

    #[test]
    fn test_crlf_and_trailing_data() -> Result<()> {
        let records = parse_fasta(b">a\r\nMK\r\nVL\r\n>b\r\n\r\n>c\nAC")?;
        assert_eq!(
            records,
            vec![
                FastaRecord {
                    id: "a".into(),
                    sequence: "MKVL".into()
                },
                FastaRecord {
                    id: "b".into(),
                    sequence: String::new()
                },
                FastaRecord {
                    id: "c".into(),
                    sequence: "AC".into()
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_sequence_before_header() {
        assert!(parse_fasta(b"MKV\n>a\nMKV\n").is_err());
        assert!(parse_fasta(b"").unwrap().is_empty());
    }
}
