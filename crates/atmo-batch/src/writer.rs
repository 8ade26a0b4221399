use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use atmo_layers::{Detail, Report};

use crate::Error;

/// Fixed column order of CSV output.
pub const CSV_HEADER: [&str; 9] = [
    "input.altitude",
    "input.unit",
    "input.altitude_km",
    "layer",
    "extent",
    "temperature_profile",
    "composition",
    "phenomena",
    "note",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// single pretty-printed array
    Json,
    /// one compact object per line
    JsonLines,
    Csv,
}

impl OutputFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::JsonLines),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(Error::UnsupportedOutputFormat(
                path.as_ref().display().to_string(),
            )),
        }
    }
}

/// Write `reports` to `path`, format chosen by extension.
pub fn write_results(path: impl AsRef<Path>, reports: &[Report]) -> Result<(), Error> {
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    write_reports(&mut out, format, reports)?;
    out.flush()?;
    tracing::info!("wrote {} reports to {} ({:?})", reports.len(), path.display(), format);
    Ok(())
}

pub fn write_reports<W: Write>(
    mut out: W,
    format: OutputFormat,
    reports: &[Report],
) -> Result<(), Error> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, reports)?;
            out.write_all(b"\n")?;
        }
        OutputFormat::JsonLines => {
            for r in reports {
                serde_json::to_writer(&mut out, r)?;
                out.write_all(b"\n")?;
            }
        }
        OutputFormat::Csv => {
            let mut w = csv::Writer::from_writer(out);
            w.write_record(CSV_HEADER)?;
            for r in reports {
                w.write_record(csv_row(r))?;
            }
            w.flush()?;
        }
    }
    Ok(())
}

fn csv_row(r: &Report) -> [String; 9] {
    let (extent, temperature_profile, composition, phenomena, note) = match r.detail {
        Detail::Layer {
            extent,
            temperature_profile,
            composition,
            phenomena,
            ..
        } => (extent, temperature_profile, composition, phenomena, ""),
        Detail::Unclassified { note } => ("", "", "", "", note),
    };
    [
        r.input.altitude.to_string(),
        r.input.unit.to_string(),
        r.input.altitude_km.to_string(),
        r.layer.unwrap_or("").to_string(),
        extent.to_string(),
        temperature_profile.to_string(),
        composition.to_string(),
        phenomena.to_string(),
        note.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use atmo_layers::describe;

    fn sample() -> Vec<Report> {
        vec![
            describe(10.0, "km").unwrap(),
            describe(-1.0, "km").unwrap(),
            describe(62.1371, "mi").unwrap(),
        ]
    }

    fn render(format: OutputFormat, reports: &[Report]) -> String {
        let mut buf = Vec::new();
        write_reports(&mut buf, format, reports).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(OutputFormat::from_path("a.json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("a.JSONL").unwrap(), OutputFormat::JsonLines);
        assert_eq!(OutputFormat::from_path("dir/a.Csv").unwrap(), OutputFormat::Csv);
        for bad in ["a.txt", "a", "a.json.bak"] {
            assert!(matches!(
                OutputFormat::from_path(bad),
                Err(Error::UnsupportedOutputFormat(_))
            ));
        }
    }

    #[test]
    fn json_is_one_array() {
        let text = render(OutputFormat::Json, &sample());
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0]["layer"], "Troposphere");
        assert!(arr[1]["layer"].is_null());
    }

    #[test]
    fn jsonl_is_one_object_per_line() {
        let text = render(OutputFormat::JsonLines, &sample());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(v.get("input").is_some());
        }
    }

    #[test]
    fn csv_has_fixed_header_and_blank_cells() {
        let text = render(OutputFormat::Csv, &sample());
        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let header: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(header, CSV_HEADER);

        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][3], "Troposphere");
        assert_eq!(&rows[0][8], "");
        assert_eq!(&rows[1][0], "-1");
        assert_eq!(&rows[1][3], "");
        assert_eq!(&rows[1][4], "");
        assert!(!rows[1][8].is_empty());
        assert_eq!(&rows[2][1], "mi");
        assert_eq!(&rows[2][2], "99.999969");
    }

    #[test]
    fn empty_batch_csv_is_header_only() {
        let text = render(OutputFormat::Csv, &[]);
        assert_eq!(text.lines().count(), 1);
    }
}
