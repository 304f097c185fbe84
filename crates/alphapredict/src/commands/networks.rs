use alphapredict_brnn::AlphaNetworks;
use anyhow::Result;
use strum::IntoEnumIterator;

pub fn execute() -> Result<()> {
    for network in AlphaNetworks::iter() {
        let config = network.config();
        let marker = if network == AlphaNetworks::default() {
            " (default)"
        } else {
            ""
        };
        let status = if network.path().exists() {
            "available"
        } else {
            "missing"
        };
        println!(
            "{network}{marker}\thidden_size={}\tnum_layers={}\t{}\t{status}",
            config.hidden_size,
            config.num_layers,
            network.filename(),
        );
    }
    Ok(())
}
