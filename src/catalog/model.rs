//! Exercises and workouts as they appear in plans and tracked history

use serde::{Deserialize, Serialize};

use crate::weight::Weight;

pub type ExerciseId = u32;
pub type WorkoutId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    /// Unset until the user records a weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl Exercise {
    pub fn new(id: ExerciseId, name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            id,
            name: name.into(),
            sets,
            reps,
            weight: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub day: String,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub fn exercise(&self, exercise_id: ExerciseId) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == exercise_id)
    }

    pub fn exercise_mut(&mut self, exercise_id: ExerciseId) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == exercise_id)
    }
}
