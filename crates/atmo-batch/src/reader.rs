use std::fs::File;
use std::io::Read;
use std::path::Path;

use atmo_layers::Unit;

use crate::Error;

/// One parsed input row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchItem {
    pub altitude: f64,
    pub unit: Unit,
}

/// Read `(altitude, unit)` pairs from a CSV file.
pub fn read_batch_csv(path: impl AsRef<Path>) -> Result<Vec<BatchItem>, Error> {
    let path = path.as_ref();
    let items = read_batch(File::open(path)?)?;
    tracing::debug!("read {} rows from {}", items.len(), path.display());
    Ok(items)
}

/// Parse a headed CSV stream. The first malformed row aborts the whole batch;
/// row numbers count the header as row 1.
pub fn read_batch<R: Read>(input: R) -> Result<Vec<BatchItem>, Error> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = rdr.headers()?.clone();
    let altitude_idx = headers
        .iter()
        .position(|h| h == "altitude")
        .ok_or(Error::MissingAltitudeColumn)?;
    let unit_idx = headers.iter().position(|h| h == "unit");

    let mut items = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i as u64 + 2;
        let malformed = |reason: String| Error::MalformedRow { row, reason };

        let raw = record.get(altitude_idx).unwrap_or("");
        if raw.is_empty() {
            return Err(malformed("empty altitude".into()));
        }
        let altitude: f64 = raw
            .trim()
            .parse()
            .map_err(|_| malformed(format!("altitude must be a number, got '{raw}'")))?;

        let unit = match unit_idx {
            Some(idx) => {
                let cell = record.get(idx).unwrap_or("").trim().to_lowercase();
                cell.parse::<Unit>()
                    .map_err(|_| malformed(format!("unit must be 'km' or 'mi', got '{cell}'")))?
            }
            None => Unit::Km,
        };
        items.push(BatchItem { altitude, unit });
    }
    Ok(items)
}
