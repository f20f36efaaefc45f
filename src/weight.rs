//! Recorded exercise weight and the parsing policy for user input

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;

/// Weight lifted for an exercise, in pounds. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    pub fn new(value: f64) -> Result<Self, WorkoutError> {
        if value.is_finite() && value >= 0.0 {
            // -0.0 passes the check above; store it as 0
            Ok(Self(value + 0.0))
        } else {
            Err(WorkoutError::InvalidWeight(value.to_string()))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Parse text typed into a weight field.
    ///
    /// Blank input means "no weight" and yields `Ok(None)`. Anything else must
    /// be a finite, non-negative number; otherwise the input is rejected so
    /// the caller keeps whatever weight was recorded before.
    pub fn parse_input(input: &str) -> Result<Option<Self>, WorkoutError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl FromStr for Weight {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| WorkoutError::InvalidWeight(s.to_string()))?;
        // "NaN" and "inf" parse as f64 but are not weights
        Self::new(value).map_err(|_| WorkoutError::InvalidWeight(s.to_string()))
    }
}

impl TryFrom<f64> for Weight {
    type Error = WorkoutError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lbs", self.0)
    }
}
