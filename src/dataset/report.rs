//! Batch prediction listings.

use crate::dataset::BatchError;
use crate::prediction::{Prediction, PredictionOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Serialization of a batch listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?} (expected csv or json)")),
        }
    }
}

/// One line of a batch listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchPrediction {
    #[serde(rename = "PassengerId")]
    pub passenger_id: String,
    #[serde(rename = "Prediction")]
    pub outcome: PredictionOutcome,
}

/// Writes the listing, one entry per input row, in input order.
pub fn write_results<W: Write>(
    mut writer: W,
    results: &[BatchPrediction],
    format: OutputFormat,
) -> Result<(), BatchError> {
    match format {
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            if results.is_empty() {
                csv.write_record(["PassengerId", "Prediction"])?;
            }
            for result in results {
                csv.serialize(result)?;
            }
            csv.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, results)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Outcome counts of a batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub transported: usize,
    pub not_transported: usize,
    pub missing_values: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[BatchPrediction]) -> Self {
        results
            .iter()
            .fold(Self::default(), |mut summary, result| {
                summary.total += 1;
                match result.outcome {
                    PredictionOutcome::Predicted(Prediction::Transported) => {
                        summary.transported += 1
                    }
                    PredictionOutcome::Predicted(Prediction::NotTransported) => {
                        summary.not_transported += 1
                    }
                    PredictionOutcome::MissingValues => summary.missing_values += 1,
                }
                summary
            })
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows: {} transported, {} not transported, {} missing values",
            self.total, self.transported, self.not_transported, self.missing_values
        )
    }
}
