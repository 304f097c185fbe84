use super::commands;
use alphapredict_brnn::AlphaNetworks;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Which network to run and where.
#[derive(Args, Clone, Debug)]
pub struct NetworkArgs {
    /// Bundled network version.
    #[arg(long, value_enum, default_value_t)]
    pub network: AlphaNetworks,

    /// Custom weight artifact (.pt, .pth or .safetensors) instead of a bundled network.
    #[arg(long, conflicts_with = "network")]
    pub weights: Option<PathBuf>,

    /// JSON hyperparameters for `--weights`. Defaults to the artifact's
    /// sidecar config or the tags in its file name.
    #[arg(long, requires = "weights")]
    pub config: Option<PathBuf>,

    /// Run on the CPU even when a GPU backend is available.
    #[arg(long)]
    pub cpu: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the confidence score of every residue in a sequence.
    Predict {
        sequence: String,
        #[command(flatten)]
        network: NetworkArgs,
    },
    /// Score every record of a FASTA file and write the scores to CSV.
    PredictFasta {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        /// One row per residue (id,position,residue,score) instead of one per record.
        #[arg(long)]
        table: bool,
        #[command(flatten)]
        network: NetworkArgs,
    },
    /// Plot the confidence profile of a sequence as SVG.
    Graph {
        sequence: String,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value = "Predicted Confidence Score")]
        title: String,
        #[arg(long, default_value_t = 50.0)]
        threshold: f64,
        /// Residue range to shade, e.g. `10-25`. May be repeated.
        #[arg(long = "shade", value_parser = parse_region)]
        shaded_regions: Vec<(usize, usize)>,
        #[arg(long, default_value = "red")]
        shaded_region_color: String,
        #[arg(long, default_value = "blue")]
        confidence_line_color: String,
        #[arg(long, default_value = "black")]
        threshold_line_color: String,
        #[arg(long, default_value_t = 150)]
        dpi: u32,
        #[command(flatten)]
        network: NetworkArgs,
    },
    /// List the bundled network versions.
    Networks,
}

/// `start-end`, 1-based and inclusive.
fn parse_region(value: &str) -> Result<(usize, usize), String> {
    let (start, end) = value
        .split_once('-')
        .ok_or_else(|| format!("expected START-END, got '{value}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|e| format!("'{s}' in '{value}': {e}"))
    };
    Ok((parse(start)?, parse(end)?))
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        init_logging(self.verbose)?;
        match self.command {
            Commands::Predict { sequence, network } => {
                commands::predict::execute(&sequence, &network)
            }
            Commands::PredictFasta {
                input,
                output,
                table,
                network,
            } => commands::fasta::execute(&input, &output, table, &network),
            Commands::Graph {
                sequence,
                output,
                title,
                threshold,
                shaded_regions,
                shaded_region_color,
                confidence_line_color,
                threshold_line_color,
                dpi,
                network,
            } => {
                let options = alphapredict_graph::GraphOptions::builder()
                    .title(title)
                    .confidence_threshold(threshold)
                    .shaded_regions(shaded_regions)
                    .shaded_region_color(shaded_region_color)
                    .confidence_line_color(confidence_line_color)
                    .threshold_line_color(threshold_line_color)
                    .dpi(dpi)
                    .build();
                commands::graph::execute(&sequence, &output, &options, &network)
            }
            Commands::Networks => commands::networks::execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_region() {
        assert_eq!(parse_region("10-25"), Ok((10, 25)));
        assert_eq!(parse_region(" 1 - 3"), Ok((1, 3)));
        assert!(parse_region("10").is_err());
        assert!(parse_region("a-3").is_err());
    }

    #[test]
    fn test_weights_conflict_with_network() {
        let parsed = Cli::try_parse_from([
            "alphapredict",
            "predict",
            "MKV",
            "--network",
            "v2",
            "--weights",
            "net.safetensors",
        ]);
        assert!(parsed.is_err());
        let parsed = Cli::try_parse_from(["alphapredict", "predict", "MKV", "--config", "c.json"]);
        assert!(parsed.is_err());
    }
}
