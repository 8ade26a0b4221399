//! Startup regression guard against accidental edits to the layer table.

use crate::classify::classify;
use crate::error::CheckMismatch;
use crate::layer::Layer;
use crate::Error;

/// (altitude km, expected layer)
pub const SELF_CHECK_CASES: [(f64, Option<&str>); 11] = [
    (0.0, Some("Troposphere")),
    (14.9999, Some("Troposphere")),
    (15.0, Some("Stratosphere")),
    (50.0, Some("Mesosphere")),
    (84.9999, Some("Mesosphere")),
    (85.0, Some("Thermosphere")),
    (400.0, Some("Thermosphere")),
    (600.0, Some("Exosphere")),
    (9999.0, Some("Exosphere")),
    (-1.0, None),
    (20000.0, None),
];

/// Run every case against the live classifier.
pub fn run_self_checks() -> Result<(), Error> {
    run_self_checks_with(classify)
}

/// Run every case against `classifier`, collecting all mismatches.
pub fn run_self_checks_with<F>(classifier: F) -> Result<(), Error>
where
    F: Fn(f64) -> Option<&'static Layer>,
{
    let failures: Vec<CheckMismatch> = SELF_CHECK_CASES
        .iter()
        .filter_map(|&(altitude_km, expected)| {
            let actual = classifier(altitude_km).map(|l| l.name);
            (actual != expected).then_some(CheckMismatch {
                altitude_km,
                expected,
                actual,
            })
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::SelfCheckFailure(failures))
    }
}
