//! Workout split identifiers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;

/// A weekly schedule variant. The closed set of splits a user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Split {
    #[serde(rename = "3-day")]
    ThreeDay,
    #[serde(rename = "4-day")]
    FourDay,
    #[serde(rename = "5-day")]
    FiveDay,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::ThreeDay, Split::FourDay, Split::FiveDay];

    /// Identifier used on the wire and in catalog files
    pub fn as_str(self) -> &'static str {
        match self {
            Split::ThreeDay => "3-day",
            Split::FourDay => "4-day",
            Split::FiveDay => "5-day",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Split::ThreeDay => "3-Day Split",
            Split::FourDay => "4-Day Split",
            Split::FiveDay => "5-Day Split",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Split::ThreeDay => 0,
            Split::FourDay => 1,
            Split::FiveDay => 2,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Split::ALL
            .into_iter()
            .find(|split| split.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownSplit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_known_splits() {
        assert_eq!("3-day".parse::<Split>().unwrap(), Split::ThreeDay);
        assert_eq!("4-day".parse::<Split>().unwrap(), Split::FourDay);
        assert_eq!("5-day".parse::<Split>().unwrap(), Split::FiveDay);
    }

    #[test]
    fn test_from_str_unknown_split_fails() {
        for input in ["6-day", "3day", "", "3-DAY"] {
            assert!(matches!(
                input.parse::<Split>(),
                Err(WorkoutError::UnknownSplit(s)) if s == input
            ));
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Split::FourDay).unwrap(), "\"4-day\"");
        assert_eq!(
            serde_json::from_str::<Split>("\"5-day\"").unwrap(),
            Split::FiveDay
        );
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, split) in Split::ALL.iter().enumerate() {
            assert_eq!(split.index(), i);
        }
    }
}
