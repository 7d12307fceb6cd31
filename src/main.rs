// Evaluate a three-class (AD / MCI / NL) prediction log
//
// Usage: diagnosis-eval [INPUT] [--dir DIR] [--config FILE] [--json] [--symmetric]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use diagnosis_eval::{
    config::{EvaluationConfig, OutputFormat},
    metrics::AveragingMode,
    records::{discover_input, RecordSet},
    report::{render_report, Evaluation},
};
use log::info;

#[derive(Parser)]
#[command(name = "diagnosis-eval")]
#[command(about = "Confusion tables and diagnostic metrics for AD / MCI / NL predictions")]
struct Cli {
    /// `Actual;Predicted` file to evaluate. Defaults to the last .csv file in --dir
    input: Option<PathBuf>,

    /// Directory searched for a .csv file when no input is given
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the evaluation as JSON
    #[arg(long)]
    json: bool,

    /// Average the NL table like the other classes instead of swapping its TP / TN
    #[arg(long)]
    symmetric: bool,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EvaluationConfig::load(path)?,
        None => EvaluationConfig::default(),
    };
    if cli.json {
        config = config.with_format(OutputFormat::Json);
    }
    if cli.symmetric {
        config = config.with_averaging(AveragingMode::Symmetric);
    }

    let input = match cli.input {
        Some(path) => path,
        None => discover_input(&cli.dir)?,
    };
    info!("Evaluating {}", input.display());

    let records = RecordSet::load(&input, &config)
        .with_context(|| format!("Could not read records from {}", input.display()))?;
    let evaluation = Evaluation::evaluate(&records, config.averaging);

    match config.format {
        OutputFormat::Text => print!("{}", render_report(&evaluation)),
        OutputFormat::Json => println!("{}", evaluation.to_json()?),
    }

    Ok(())
}
