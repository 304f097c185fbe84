use super::load_predictor;
use crate::cli::NetworkArgs;
use alphapredict_graph::{graph, GraphOptions};
use anyhow::Result;
use std::path::Path;

pub fn execute(
    sequence: &str,
    output: &Path,
    options: &GraphOptions,
    network: &NetworkArgs,
) -> Result<()> {
    let predictor = load_predictor(network)?;
    graph(&predictor, sequence, options, Some(output))?;
    println!("{}", output.display());
    Ok(())
}
