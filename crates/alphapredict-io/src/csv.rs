//! Score export.
use anyhow::{ensure, Context, Result};
use itertools::Itertools;
use polars::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// A sequence together with its per-residue scores.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredRecord {
    pub id: String,
    pub sequence: String,
    pub scores: Vec<f64>,
}

/// One line per record: the id (commas replaced by spaces) followed by every
/// score to three decimals.
///
/// ```text
/// sp|P69905|HBA_HUMAN Hemoglobin subunit alpha Homo sapiens, 48.201, 52.930, ...
/// ```
pub fn write_csv(records: &[ScoredRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Unable to write to file destination {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        // commas in FASTA headers would break the row apart
        let id = record.id.replace(',', " ");
        let scores = record
            .scores
            .iter()
            .format_with("", |score, f| f(&format_args!(", {score:.3}")));
        writeln!(writer, "{id}{scores}")?;
    }
    writer.flush()?;
    debug!(path = %path.display(), records = records.len(), "wrote score csv");
    Ok(())
}

/// Long format: one row per residue with `id,position,residue,score` columns.
/// Positions are 1-based.
pub fn write_table(records: &[ScoredRecord], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut ids = Vec::new();
    let mut positions = Vec::new();
    let mut residues = Vec::new();
    let mut scores = Vec::new();
    for record in records {
        ensure!(
            record.sequence.chars().count() == record.scores.len(),
            "{}: {} residues but {} scores",
            record.id,
            record.sequence.chars().count(),
            record.scores.len()
        );
        for (idx, (residue, score)) in record.sequence.chars().zip(&record.scores).enumerate() {
            ids.push(record.id.clone());
            positions.push(idx as u32 + 1);
            residues.push(residue.to_string());
            scores.push(*score);
        }
    }
    let mut df = df!(
        "id" => ids,
        "position" => positions,
        "residue" => residues,
        "score" => scores,
    )?;
    let mut file = File::create(path)
        .with_context(|| format!("Unable to write to file destination {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    debug!(path = %path.display(), rows = df.height(), "wrote score table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ScoredRecord> {
        vec![
            ScoredRecord {
                id: "sp|P1|A, human".to_string(),
                sequence: "MK".to_string(),
                scores: vec![48.2014, 52.93],
            },
            ScoredRecord {
                id: "b".to_string(),
                sequence: "A".to_string(),
                scores: vec![90.0],
            },
        ]
    }

    #[test]
    fn test_write_csv() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("scores.csv");
        write_csv(&records(), &path)?;
        let contents = std::fs::read_to_string(&path)?;
        assert_eq!(
            contents,
            "sp|P1|A  human, 48.201, 52.930\nb, 90.000\n"
        );
        Ok(())
    }

    #[test]
    fn test_write_table() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("scores_long.csv");
        write_table(&records(), &path)?;
        let contents = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id,position,residue,score");
        assert!(lines[1].starts_with("\"sp|P1|A, human\",1,M,48.2014"));
        assert!(lines[3].starts_with("b,1,A,90"));
        Ok(())
    }

    #[test]
    fn test_table_rejects_length_mismatch() {
        let mut bad = records();
        bad[1].scores.push(1.0);
        let dir = tempfile::tempdir().unwrap();
        assert!(write_table(&bad, dir.path().join("bad.csv")).is_err());
    }
}
