use anyhow::{bail, Context};
use spaceship_transport::config::AppConfig;
use spaceship_transport::dataset::{write_results, BatchSummary, OutputFormat, PassengerBatch};
use spaceship_transport::{
    logging, Artifacts, PassengerForm, PredictionError, PredictionService, RecordError,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1).collect()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };
    if let Command::Help = options.command {
        println!("{}", help_text());
        return ExitCode::SUCCESS;
    }
    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CliOptions {
    config: Option<PathBuf>,
    command: Command,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Help,
    Predict {
        fields: Vec<(String, String)>,
    },
    Batch {
        input: PathBuf,
        output: Option<PathBuf>,
        format: OutputFormat,
    },
}

fn run(options: CliOptions) -> anyhow::Result<()> {
    let (config, source) =
        AppConfig::load(options.config.as_deref()).context("failed to load configuration")?;
    logging::init(&config.logging.filter).context("failed to initialize logging")?;
    info!(config = %source, "configuration loaded");

    let artifacts = Artifacts::load(&config.artifacts).context("failed to load artifacts")?;
    let service = PredictionService::new(Arc::new(artifacts));

    match options.command {
        Command::Help => Ok(()),
        Command::Predict { fields } => run_predict(&service, fields),
        Command::Batch {
            input,
            output,
            format,
        } => run_batch(&service, input, output, format),
    }
}

fn run_predict(service: &PredictionService, fields: Vec<(String, String)>) -> anyhow::Result<()> {
    let form = PassengerForm::from_pairs(fields).context("invalid passenger field")?;
    match service.predict_form(&form) {
        Ok(result) => {
            println!("{result}");
            Ok(())
        }
        Err(PredictionError::Record(RecordError::MissingFields(fields))) => {
            bail!("Please fill in all required fields: {}", fields.join(", "))
        }
        Err(err) => Err(err.into()),
    }
}

fn run_batch(
    service: &PredictionService,
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let batch = PassengerBatch::from_path(&input)
        .with_context(|| format!("failed to read batch {}", input.display()))?;
    info!(rows = batch.len(), input = %input.display(), "batch ready for prediction");

    let results = service.predict_batch(&batch)?;
    let summary = BatchSummary::from_results(&results);

    match &output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_results(BufWriter::new(file), &results, format)?;
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_results(&mut lock, &results, format)?;
            lock.flush()?;
        }
    }
    info!(%summary, "batch complete");
    Ok(())
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut config: Option<PathBuf> = None;
    let mut idx = 0usize;

    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                return Ok(CliOptions {
                    config,
                    command: Command::Help,
                })
            }
            "--config" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--config requires a value".to_string())?;
                config = Some(PathBuf::from(value));
            }
            "predict" => {
                let fields = parse_fields(&args[idx + 1..])?;
                return Ok(CliOptions {
                    config,
                    command: Command::Predict { fields },
                });
            }
            "batch" => {
                let command = parse_batch(&args[idx + 1..])?;
                return Ok(CliOptions { config, command });
            }
            other => return Err(format!("Unknown argument: {other}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Err(help_text())
}

fn parse_fields(args: &[String]) -> Result<Vec<(String, String)>, String> {
    if args.is_empty() {
        return Err("predict requires KEY=VALUE fields".to_string());
    }
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.to_string()))
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| format!("Expected KEY=VALUE, got {arg:?}"))
        })
        .collect()
}

fn parse_batch(args: &[String]) -> Result<Command, String> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut format = OutputFormat::default();

    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--input" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--input requires a value".to_string())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--output requires a value".to_string())?;
                output = Some(PathBuf::from(value));
            }
            "--format" => {
                idx += 1;
                let value = args
                    .get(idx)
                    .ok_or_else(|| "--format requires a value".to_string())?;
                format = value.parse()?;
            }
            other => return Err(format!("Unknown batch argument: {other}")),
        }
        idx += 1;
    }

    Ok(Command::Batch {
        input: input.ok_or_else(|| "batch requires --input <file.csv>".to_string())?,
        output,
        format,
    })
}

fn help_text() -> String {
    [
        "spaceship-transport",
        "",
        "Usage:",
        "  spaceship-transport [--config <file.toml>] predict KEY=VALUE...",
        "  spaceship-transport [--config <file.toml>] batch --input <file.csv> [options]",
        "",
        "Predict fields:",
        "  HomePlanet CryoSleep Destination Age VIP RoomService FoodCourt ShoppingMall",
        "  Spa VRDeck GroupSize Deck Cabin_Num Side, or Cabin=<deck>/<num>/<side>.",
        "  Name is optional. TotalSpend is computed.",
        "",
        "Batch options:",
        "  --output <file>       Write results to a file (default: stdout).",
        "  --format <csv|json>   Output format (default: csv).",
        "",
        "Config is read from --config, $SPACESHIP_TRANSPORT_CONFIG or ./spaceship-transport.toml.",
    ]
    .join("\n")
}
