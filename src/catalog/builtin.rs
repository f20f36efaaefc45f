//! The plans shipped with the server

use super::{Exercise, Split, Workout};

type ExerciseRow = (u32, &'static str, u32, u32);
type WorkoutRow = (u32, &'static str, &'static [ExerciseRow]);

const THREE_DAY: &[WorkoutRow] = &[
    (1, "Monday", &[(1, "Squats", 3, 10), (2, "Bench Press", 3, 8), (3, "Deadlift", 3, 5)]),
    (2, "Wednesday", &[(4, "Overhead Press", 3, 8), (5, "Pull-ups", 3, 10), (6, "Barbell Rows", 3, 8)]),
    (3, "Friday", &[(7, "Lunges", 3, 12), (8, "Bicep Curls", 3, 12), (9, "Tricep Dips", 3, 12)]),
];

const FOUR_DAY: &[WorkoutRow] = &[
    (1, "Monday", &[(1, "Squats", 4, 8), (2, "Leg Press", 3, 12), (3, "Leg Curls", 3, 12)]),
    (2, "Tuesday", &[
        (4, "Bench Press", 4, 8),
        (5, "Incline Dumbbell Press", 3, 10),
        (6, "Chest Flyes", 3, 12),
    ]),
    (3, "Thursday", &[(7, "Deadlift", 4, 5), (8, "Pull-ups", 3, 10), (9, "Barbell Rows", 3, 8)]),
    (4, "Friday", &[(10, "Overhead Press", 4, 8), (11, "Lateral Raises", 3, 12), (12, "Face Pulls", 3, 15)]),
];

const FIVE_DAY: &[WorkoutRow] = &[
    (1, "Monday", &[(1, "Squats", 5, 5), (2, "Leg Press", 4, 10), (3, "Calf Raises", 4, 15)]),
    (2, "Tuesday", &[(4, "Bench Press", 5, 5), (5, "Dumbbell Flyes", 3, 12), (6, "Push-ups", 3, 15)]),
    (3, "Wednesday", &[(7, "Deadlift", 5, 3), (8, "Lat Pulldowns", 4, 10), (9, "Seated Rows", 4, 10)]),
    (4, "Thursday", &[(10, "Overhead Press", 5, 5), (11, "Arnold Press", 3, 12), (12, "Shrugs", 3, 15)]),
    (5, "Friday", &[
        (13, "Barbell Curls", 4, 10),
        (14, "Tricep Pushdowns", 4, 10),
        (15, "Hammer Curls", 3, 12),
    ]),
];

pub(super) fn plan(split: Split) -> Vec<Workout> {
    let rows = match split {
        Split::ThreeDay => THREE_DAY,
        Split::FourDay => FOUR_DAY,
        Split::FiveDay => FIVE_DAY,
    };

    rows.iter()
        .map(|&(id, day, exercises)| Workout {
            id,
            day: day.to_string(),
            exercises: exercises
                .iter()
                .map(|&(id, name, sets, reps)| Exercise::new(id, name, sets, reps))
                .collect(),
        })
        .collect()
}
