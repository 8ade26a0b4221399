//! Batch input and result output for the atmospheric layer classifier.
//! - CSV in: `altitude` column plus an optional `unit` column.
//! - JSON, JSON-Lines or CSV out, chosen by file extension.

pub mod reader;
pub mod writer;

pub use reader::{read_batch, read_batch_csv, BatchItem};
pub use writer::{write_reports, write_results, OutputFormat, CSV_HEADER};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("CSV must contain a column named 'altitude'.")]
    MissingAltitudeColumn,
    #[error("Row {row}: {reason}")]
    MalformedRow { row: u64, reason: String },
    #[error("Output file must end with .csv, .json, or .jsonl (got {0:?})")]
    UnsupportedOutputFormat(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
