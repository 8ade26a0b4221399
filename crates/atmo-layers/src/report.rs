//! Per-query reports and their human-readable rendering.

use core::fmt;

use serde::Serialize;

use crate::classify::classify;
use crate::layer::Layer;
use crate::units::Unit;
use crate::Error;

pub const REFERENCES_NOTE: &str =
    "Ranges are approximate; boundaries are gradual and vary with latitude/season/solar activity.";
pub const OUT_OF_RANGE_NOTE: &str =
    "Altitude is outside modeled ranges (below 0 km or above ~10,000 km).";

/// The query as the caller gave it, plus the normalized altitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportInput {
    pub altitude: f64,
    pub unit: Unit,
    /// rounded to 6 decimal places
    pub altitude_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Detail {
    Layer {
        extent: &'static str,
        temperature_profile: &'static str,
        composition: &'static str,
        phenomena: &'static str,
        references_note: &'static str,
    },
    Unclassified {
        note: &'static str,
    },
}

/// Serializes as
/// `{"input": {..}, "layer": "<name>"|null, <detail fields>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: ReportInput,
    pub layer: Option<&'static str>,
    #[serde(flatten)]
    pub detail: Detail,
}

impl Report {
    /// Explanation for an unclassified altitude.
    pub fn note(&self) -> Option<&'static str> {
        match self.detail {
            Detail::Unclassified { note } => Some(note),
            Detail::Layer { .. } => None,
        }
    }
}

pub fn build_report(
    altitude: f64,
    unit: Unit,
    altitude_km: f64,
    layer: Option<&Layer>,
) -> Report {
    let input = ReportInput {
        altitude,
        unit,
        altitude_km: round6(altitude_km),
    };
    match layer {
        Some(l) => Report {
            input,
            layer: Some(l.name),
            detail: Detail::Layer {
                extent: l.extent_note,
                temperature_profile: l.temperature_profile,
                composition: l.composition,
                phenomena: l.phenomena,
                references_note: REFERENCES_NOTE,
            },
        },
        None => Report {
            input,
            layer: None,
            detail: Detail::Unclassified {
                note: OUT_OF_RANGE_NOTE,
            },
        },
    }
}

/// Classify an altitude given in a known unit.
pub fn describe_in(altitude: f64, unit: Unit) -> Report {
    let altitude_km = unit.to_km(altitude);
    build_report(altitude, unit, altitude_km, classify(altitude_km))
}

/// Classify an altitude given in `unit` ("km" or "mi").
pub fn describe(altitude: f64, unit: &str) -> Result<Report, Error> {
    let unit: Unit = unit.parse()?;
    Ok(describe_in(altitude, unit))
}

fn round6(x: f64) -> f64 {
    let scaled = x * 1e6;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / 1e6
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!(
            "Atmospheric Layer Report @ {} {} (~{} km)",
            self.input.altitude, self.input.unit, self.input.altitude_km
        );
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "-".repeat(header.chars().count()))?;
        match (&self.layer, &self.detail) {
            (
                Some(name),
                Detail::Layer {
                    extent,
                    temperature_profile,
                    composition,
                    phenomena,
                    references_note,
                },
            ) => {
                writeln!(f, "Layer: {name}")?;
                writeln!(f, "Extent: {extent}")?;
                writeln!(f, "Temperature: {temperature_profile}")?;
                writeln!(f, "Composition: {composition}")?;
                writeln!(f, "Notable phenomena: {phenomena}")?;
                write!(f, "Note: {references_note}")
            }
            (_, Detail::Unclassified { note }) => write!(f, "{note}"),
            (None, Detail::Layer { .. }) => write!(f, "No layer"),
        }
    }
}
