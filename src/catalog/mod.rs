//! Workout catalog
//!
//! The catalog is the fixed mapping from split to plan. It is built once at
//! startup (from the built-in plans or a JSON file), validated, and then only
//! ever read.

mod builtin;
pub mod model;
pub mod split;

use std::{collections::{BTreeMap, HashSet}, path::Path};

use tracing::{debug, info};

use crate::error::{Result, WorkoutError};

pub use model::{Exercise, ExerciseId, Workout, WorkoutId};
pub use split::Split;

/// Immutable split → plan mapping, one plan per split
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    plans: [Vec<Workout>; 3],
}

impl Catalog {
    /// Catalog with the plans shipped with the server
    pub fn builtin() -> Self {
        Self {
            plans: Split::ALL.map(builtin::plan),
        }
    }

    /// Build a catalog from per-split plans, validating every plan.
    /// All three splits must be present.
    pub fn from_plans(mut plans: BTreeMap<Split, Vec<Workout>>) -> Result<Self> {
        for split in Split::ALL {
            if !plans.contains_key(&split) {
                return Err(WorkoutError::InvalidCatalog(format!(
                    "missing plan for split {}",
                    split
                )));
            }
        }
        for (split, plan) in &plans {
            validate_plan(*split, plan)?;
        }

        let mut take = |split: Split| plans.remove(&split).unwrap_or_default();
        Ok(Self {
            plans: [take(Split::ThreeDay), take(Split::FourDay), take(Split::FiveDay)],
        })
    }

    /// Parse a catalog from JSON of the form `{"3-day": [...], "4-day": [...], "5-day": [...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let plans: BTreeMap<Split, Vec<Workout>> = serde_json::from_str(json)?;
        Self::from_plans(plans)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!("Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    pub fn plan(&self, split: Split) -> &[Workout] {
        &self.plans[split.index()]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_plan(split: Split, plan: &[Workout]) -> Result<()> {
    let invalid = |msg: String| WorkoutError::InvalidCatalog(format!("{}: {}", split, msg));

    let mut workout_ids = HashSet::new();
    for workout in plan {
        if !workout_ids.insert(workout.id) {
            return Err(invalid(format!("duplicate workout id {}", workout.id)));
        }
        if workout.day.trim().is_empty() {
            return Err(invalid(format!("workout {} has an empty day label", workout.id)));
        }

        let mut exercise_ids = HashSet::new();
        for exercise in &workout.exercises {
            let context = format!("workout {} exercise {}", workout.id, exercise.id);
            if !exercise_ids.insert(exercise.id) {
                return Err(invalid(format!("duplicate exercise id in {}", context)));
            }
            if exercise.name.trim().is_empty() {
                return Err(invalid(format!("{} has an empty name", context)));
            }
            if exercise.sets == 0 || exercise.reps == 0 {
                return Err(invalid(format!("{} needs positive sets and reps", context)));
            }
            if exercise.weight.is_some() {
                return Err(invalid(format!("{} has a preset weight", context)));
            }
        }
    }
    Ok(())
}
