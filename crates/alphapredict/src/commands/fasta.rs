use super::load_predictor;
use crate::cli::NetworkArgs;
use alphapredict_io::{read_fasta, write_csv, write_table, ScoredRecord};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

pub fn execute(input: &Path, output: &Path, table: bool, network: &NetworkArgs) -> Result<()> {
    let predictor = load_predictor(network)?;
    let records = read_fasta(input)?;
    let mut scored = Vec::with_capacity(records.len());
    for record in records {
        let scores = predictor
            .predict(&record.sequence)
            .with_context(|| format!("record '{}'", record.id))?;
        debug!(id = %record.id, residues = scores.len(), "scored record");
        scored.push(ScoredRecord {
            id: record.id,
            sequence: record.sequence.to_ascii_uppercase(),
            scores,
        });
    }
    if table {
        write_table(&scored, output)?;
    } else {
        write_csv(&scored, output)?;
    }
    info!(records = scored.len(), output = %output.display(), "wrote scores");
    Ok(())
}
