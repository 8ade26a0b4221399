//! Atmospheric layer classification.
//!
//! Maps an altitude onto one of five fixed layers (troposphere through
//! exosphere) and builds a descriptive report for it. Everything here is pure:
//! no I/O, no shared mutable state.
//!
//! ```
//! use atmo_layers::{classify, describe};
//!
//! assert_eq!(classify(15.0).map(|l| l.name), Some("Stratosphere"));
//! let report = describe(250.0, "mi").unwrap();
//! assert_eq!(report.layer, Some("Thermosphere"));
//! ```

mod checks;
mod classify;
mod error;
mod layer;
mod report;
mod units;

pub use checks::{run_self_checks, run_self_checks_with, SELF_CHECK_CASES};
pub use classify::classify;
pub use error::{CheckMismatch, Error};
pub use layer::{Layer, LAYERS};
pub use report::{
    build_report, describe, describe_in, Detail, Report, ReportInput, OUT_OF_RANGE_NOTE,
    REFERENCES_NOTE,
};
pub use units::{miles_to_km, to_km, Unit, KM_PER_MILE};
