//! Per-page workout session: selected split, live plan, tracked history

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::{Catalog, ExerciseId, Split, Workout, WorkoutId},
    weight::Weight,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NoSplitSelected,
    PlanActive,
}

/// A workout as it was when the user tracked it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedWorkout {
    pub tracked_at: DateTime<Utc>,
    pub workout: Workout,
}

/// Read-only copy of a session handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub selected_split: Option<Split>,
    pub plan: Vec<Workout>,
    pub tracked: Vec<TrackedWorkout>,
    /// Bumped by every applied mutation, unchanged by no-ops
    pub revision: u64,
}

/// Workout session state.
///
/// `plan` is always a private copy of the catalog entry for `selected_split`
/// (or empty), and every tracked entry is a private copy of the workout at the
/// time it was tracked. Weight edits therefore never reach the catalog or the
/// history.
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    catalog: Arc<Catalog>,
    selected_split: Option<Split>,
    plan: Vec<Workout>,
    tracked: Vec<TrackedWorkout>,
    revision: u64,
}

impl WorkoutSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selected_split: None,
            plan: Vec::new(),
            tracked: Vec::new(),
            revision: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.selected_split {
            Some(_) => SessionPhase::PlanActive,
            None => SessionPhase::NoSplitSelected,
        }
    }

    pub fn selected_split(&self) -> Option<Split> {
        self.selected_split
    }

    pub fn plan(&self) -> &[Workout] {
        &self.plan
    }

    pub fn tracked(&self) -> &[TrackedWorkout] {
        &self.tracked
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Pick a split and replace the plan with a fresh copy of its catalog entry
    pub fn select_split(&mut self, split: Split) {
        self.selected_split = Some(split);
        self.plan = self.catalog.plan(split).to_vec();
        self.revision += 1;
        debug!("Selected split {} ({} workouts)", split, self.plan.len());
    }

    /// Go back to split selection. Tracked history is kept.
    /// Returns false if no split was selected.
    pub fn clear_split(&mut self) -> bool {
        if self.selected_split.take().is_none() {
            return false;
        }
        self.plan.clear();
        self.revision += 1;
        true
    }

    /// Record (or clear, with `None`) the weight of one exercise in the live
    /// plan. Returns false and leaves the plan untouched if the ids do not
    /// match an exercise.
    pub fn set_exercise_weight(
        &mut self,
        workout_id: WorkoutId,
        exercise_id: ExerciseId,
        weight: Option<Weight>,
    ) -> bool {
        let Some(exercise) = self
            .plan
            .iter_mut()
            .find(|w| w.id == workout_id)
            .and_then(|w| w.exercise_mut(exercise_id))
        else {
            debug!("No exercise {} in workout {}, weight ignored", exercise_id, workout_id);
            return false;
        };

        exercise.weight = weight;
        self.revision += 1;
        true
    }

    /// Append a snapshot of a plan workout to the history.
    /// Returns the new entry, or None if no workout matches.
    pub fn track_workout(&mut self, workout_id: WorkoutId) -> Option<&TrackedWorkout> {
        let Some(workout) = self.plan.iter().find(|w| w.id == workout_id) else {
            debug!("No workout {} in plan, nothing tracked", workout_id);
            return None;
        };

        self.tracked.push(TrackedWorkout {
            tracked_at: Utc::now(),
            workout: workout.clone(),
        });
        self.revision += 1;
        self.tracked.last()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            selected_split: self.selected_split,
            plan: self.plan.clone(),
            tracked: self.tracked.clone(),
            revision: self.revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> WorkoutSession {
        WorkoutSession::new(Arc::new(Catalog::builtin()))
    }

    fn lbs(value: f64) -> Option<Weight> {
        Some(Weight::new(value).unwrap())
    }

    fn weight_of(workouts: &[Workout], workout_id: WorkoutId, exercise_id: ExerciseId) -> Option<Weight> {
        workouts
            .iter()
            .find(|w| w.id == workout_id)
            .and_then(|w| w.exercise(exercise_id))
            .and_then(|e| e.weight)
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = session();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, SessionPhase::NoSplitSelected);
        assert_eq!(snapshot.selected_split, None);
        assert!(snapshot.plan.is_empty());
        assert!(snapshot.tracked.is_empty());
        assert_eq!(snapshot.revision, 0);
    }

    #[test]
    fn test_select_split_yields_catalog_plan() {
        let catalog = Catalog::builtin();
        for split in Split::ALL {
            let mut session = session();
            session.select_split(split);
            let snapshot = session.snapshot();
            assert_eq!(snapshot.phase, SessionPhase::PlanActive);
            assert_eq!(snapshot.selected_split, Some(split));
            assert_eq!(snapshot.plan, catalog.plan(split));
            assert!(snapshot
                .plan
                .iter()
                .flat_map(|w| &w.exercises)
                .all(|e| e.weight.is_none()));
        }
    }

    #[test]
    fn test_set_weight_changes_only_target() {
        let mut session = session();
        session.select_split(Split::FourDay);
        let before = session.snapshot();

        assert!(session.set_exercise_weight(2, 5, lbs(60.0)));
        let after = session.snapshot();

        for workout in &after.plan {
            for exercise in &workout.exercises {
                let expected = if (workout.id, exercise.id) == (2, 5) {
                    lbs(60.0)
                } else {
                    weight_of(&before.plan, workout.id, exercise.id)
                };
                assert_eq!(exercise.weight, expected);
            }
        }
        assert_eq!(after.revision, before.revision + 1);
    }

    #[test]
    fn test_set_weight_latest_value_wins() {
        let mut session = session();
        session.select_split(Split::ThreeDay);
        session.set_exercise_weight(1, 1, lbs(100.0));
        session.set_exercise_weight(1, 1, lbs(115.0));
        assert_eq!(weight_of(session.plan(), 1, 1), lbs(115.0));
    }

    #[test]
    fn test_set_weight_none_clears() {
        let mut session = session();
        session.select_split(Split::ThreeDay);
        session.set_exercise_weight(1, 2, lbs(95.0));
        assert!(session.set_exercise_weight(1, 2, None));
        assert_eq!(weight_of(session.plan(), 1, 2), None);
    }

    #[test]
    fn test_set_weight_unknown_ids_is_noop() {
        let mut session = session();
        session.select_split(Split::ThreeDay);
        session.set_exercise_weight(2, 4, lbs(80.0));
        let before = session.snapshot();

        // Unknown workout, unknown exercise, and an exercise from another workout
        assert!(!session.set_exercise_weight(99, 1, lbs(1.0)));
        assert!(!session.set_exercise_weight(1, 99, lbs(1.0)));
        assert!(!session.set_exercise_weight(1, 4, lbs(1.0)));

        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_operations_without_split_are_noops() {
        let mut session = session();
        assert!(!session.set_exercise_weight(1, 1, lbs(135.0)));
        assert!(session.track_workout(1).is_none());
        assert!(!session.clear_split());
        assert_eq!(session.revision(), 0);
        assert!(session.tracked().is_empty());
    }

    #[test]
    fn test_track_snapshots_current_weights() {
        let mut session = session();
        session.select_split(Split::FiveDay);
        session.set_exercise_weight(3, 7, lbs(315.0));

        let entry = session.track_workout(3).unwrap().clone();
        assert_eq!(entry.workout, session.plan()[2]);
        assert_eq!(weight_of(std::slice::from_ref(&entry.workout), 3, 7), lbs(315.0));
        assert_eq!(session.tracked().len(), 1);
    }

    #[test]
    fn test_tracked_entry_isolated_from_later_edits() {
        let mut session = session();
        session.select_split(Split::ThreeDay);
        session.set_exercise_weight(2, 5, lbs(20.0));
        session.track_workout(2);

        session.set_exercise_weight(2, 5, lbs(40.0));
        session.set_exercise_weight(2, 6, lbs(135.0));

        let tracked = &session.tracked()[0].workout;
        assert_eq!(tracked.exercise(5).unwrap().weight, lbs(20.0));
        assert_eq!(tracked.exercise(6).unwrap().weight, None);
    }

    #[test]
    fn test_track_same_workout_twice() {
        let mut session = session();
        session.select_split(Split::ThreeDay);
        session.track_workout(3);
        session.track_workout(3);
        let days: Vec<_> = session.tracked().iter().map(|t| t.workout.id).collect();
        assert_eq!(days, vec![3, 3]);
    }

    #[test]
    fn test_track_unknown_workout_is_noop() {
        let mut session = session();
        session.select_split(Split::ThreeDay);
        let revision = session.revision();
        assert!(session.track_workout(42).is_none());
        assert!(session.tracked().is_empty());
        assert_eq!(session.revision(), revision);
    }

    #[test]
    fn test_reselect_gives_fresh_plan_and_catalog_untouched() {
        let catalog = Arc::new(Catalog::builtin());
        let mut session = WorkoutSession::new(Arc::clone(&catalog));
        session.select_split(Split::ThreeDay);
        session.set_exercise_weight(1, 1, lbs(135.0));

        session.select_split(Split::ThreeDay);
        assert_eq!(weight_of(session.plan(), 1, 1), None);
        assert_eq!(*catalog, Catalog::builtin());
    }

    #[test]
    fn test_sessions_sharing_catalog_are_independent() {
        let catalog = Arc::new(Catalog::builtin());
        let mut first = WorkoutSession::new(Arc::clone(&catalog));
        let mut second = WorkoutSession::new(catalog);
        first.select_split(Split::FourDay);
        second.select_split(Split::FourDay);

        first.set_exercise_weight(1, 1, lbs(185.0));
        assert_eq!(weight_of(second.plan(), 1, 1), None);
    }

    #[test]
    fn test_clear_split_keeps_history() {
        let mut session = session();
        session.select_split(Split::ThreeDay);
        session.track_workout(1);

        assert!(session.clear_split());
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, SessionPhase::NoSplitSelected);
        assert!(snapshot.plan.is_empty());
        assert_eq!(snapshot.tracked.len(), 1);

        session.select_split(Split::FiveDay);
        assert_eq!(session.plan().len(), 5);
    }

    #[test]
    fn test_three_day_scenario() {
        let mut session = session();
        session.select_split(Split::ThreeDay);

        let days: Vec<_> = session.plan().iter().map(|w| w.day.as_str()).collect();
        assert_eq!(days, vec!["Monday", "Wednesday", "Friday"]);
        let monday: Vec<_> = session.plan()[0]
            .exercises
            .iter()
            .map(|e| (e.name.as_str(), e.sets, e.reps, e.weight))
            .collect();
        assert_eq!(
            monday,
            vec![
                ("Squats", 3, 10, None),
                ("Bench Press", 3, 8, None),
                ("Deadlift", 3, 5, None),
            ]
        );

        session.set_exercise_weight(1, 1, lbs(135.0));
        assert_eq!(weight_of(session.plan(), 1, 1), lbs(135.0));
        assert_eq!(weight_of(session.plan(), 1, 2), None);

        session.track_workout(1);
        assert_eq!(session.tracked().len(), 1);
        let entry = &session.tracked()[0].workout;
        assert_eq!(entry.day, "Monday");
        assert_eq!(entry.exercise(1).unwrap().weight, lbs(135.0));

        session.set_exercise_weight(1, 1, lbs(225.0));
        assert_eq!(weight_of(session.plan(), 1, 1), lbs(225.0));
        assert_eq!(session.tracked()[0].workout.exercise(1).unwrap().weight, lbs(135.0));
    }
}
