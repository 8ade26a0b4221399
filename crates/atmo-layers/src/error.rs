use core::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unit must be 'km' or 'mi', got '{0}'")]
    InvalidUnit(String),
    #[error("self-checks failed: {}", list(.0))]
    SelfCheckFailure(Vec<CheckMismatch>),
}

/// A self-check case whose live classification differs from the expected one.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckMismatch {
    pub altitude_km: f64,
    pub expected: Option<&'static str>,
    pub actual: Option<&'static str>,
}

impl fmt::Display for CheckMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} km: expected {}, got {}",
            self.altitude_km,
            self.expected.unwrap_or("None"),
            self.actual.unwrap_or("None")
        )
    }
}

fn list(cases: &[CheckMismatch]) -> String {
    cases
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
