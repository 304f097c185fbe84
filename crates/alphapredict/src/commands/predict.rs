use super::load_predictor;
use crate::cli::NetworkArgs;
use anyhow::Result;

pub fn execute(sequence: &str, network: &NetworkArgs) -> Result<()> {
    let predictor = load_predictor(network)?;
    let scores = predictor.predict(sequence)?;
    println!("{scores:?}");
    Ok(())
}
