//! The numeric leaf values a profile report displays: a measurement with an
//! associated margin of error.

use serde::{Deserialize, Serialize};

use crate::error::PopulateError;

/// A measurement and its margin of error. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Numeric {
    pub value: f64,
    pub error: f64,
}

impl Numeric {
    pub fn new(value: f64, error: f64) -> Self {
        Self { value, error }
    }
}

/// A ratio of two measurements.
///
/// How the combined value and error propagate from numerator and denominator
/// is an open extension point: both accessors fail loudly rather than return
/// a made-up number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percent {
    pub numerator: Numeric,
    pub denominator: Numeric,
}

impl Percent {
    pub fn new(numerator: Numeric, denominator: Numeric) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn value(&self) -> Result<f64, PopulateError> {
        Err(PopulateError::NotImplemented(
            "percent value calculation",
        ))
    }

    pub fn error(&self) -> Result<f64, PopulateError> {
        Err(PopulateError::NotImplemented(
            "percent error calculation",
        ))
    }
}

/// The atomic unit of displayed data.
///
/// A tagged union so charts and documents can hold either kind without
/// caring which; callers that need the raw number dispatch through
/// [`Value::value`] / [`Value::error`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Numeric(Numeric),
    Percent(Percent),
}

impl Value {
    pub fn value(&self) -> Result<f64, PopulateError> {
        match self {
            Value::Numeric(n) => Ok(n.value),
            Value::Percent(p) => p.value(),
        }
    }

    pub fn error(&self) -> Result<f64, PopulateError> {
        match self {
            Value::Numeric(n) => Ok(n.error),
            Value::Percent(p) => p.error(),
        }
    }
}

impl From<Numeric> for Value {
    fn from(n: Numeric) -> Self {
        Value::Numeric(n)
    }
}

impl From<Percent> for Value {
    fn from(p: Percent) -> Self {
        Value::Percent(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_accessors_pass_through() {
        let v = Value::from(Numeric::new(16000.0, 0.0));
        assert_eq!(v.value(), Ok(16000.0));
        assert_eq!(v.error(), Ok(0.0));
    }

    #[test]
    fn percent_fails_loudly_not_silently() {
        let p = Percent::new(Numeric::new(1.0, 0.0), Numeric::new(4.0, 0.0));
        let err = Value::from(p).value().unwrap_err();
        assert!(matches!(err, PopulateError::NotImplemented(_)));
        // Distinct from a data lookup failure.
        assert_ne!(err, PopulateError::lookup("anything"));
    }
}
