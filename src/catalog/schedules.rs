//! Weekly workout schedules, one per fitness goal, Monday first.

use time::Weekday::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};

use super::Difficulty::{Advanced, Beginner, Intermediate};
use super::{Exercise, WorkoutDay, WorkoutSchedule};

pub static WORKOUT_SCHEDULES: &[WorkoutSchedule] = &[
    WorkoutSchedule {
        goal: "weight-loss",
        schedule: &[
            WorkoutDay {
                day: Monday,
                exercises: &[
                    Exercise::new(
                        "wl-1",
                        "Cardio Interval Training",
                        "Alternate between 30 seconds of high-intensity and 90 seconds of low-intensity cardio.",
                        Intermediate,
                    )
                    .duration("30 minutes"),
                    Exercise::new(
                        "wl-2",
                        "Bodyweight Circuit",
                        "Complete 3 rounds of: 15 squats, 10 push-ups, 10 lunges per leg, 30-second plank.",
                        Beginner,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Tuesday,
                exercises: &[
                    Exercise::new(
                        "wl-3",
                        "Brisk Walking or Light Jogging",
                        "Maintain a steady pace that elevates your heart rate.",
                        Beginner,
                    )
                    .duration("45 minutes"),
                    Exercise::new(
                        "wl-4",
                        "Core Workout",
                        "Complete 3 sets of: 15 crunches, 30-second plank, 15 bicycle crunches, 15 leg raises.",
                        Beginner,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Wednesday,
                exercises: &[
                    Exercise::new(
                        "wl-5",
                        "HIIT Workout",
                        "Complete 8 rounds of: 20 seconds all-out effort, 10 seconds rest.",
                        Advanced,
                    )
                    .duration("25 minutes"),
                    Exercise::new(
                        "wl-6",
                        "Lower Body Strength",
                        "Complete 3 sets of: 15 squats, 12 lunges per leg, 15 glute bridges, 12 calf raises.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Thursday,
                exercises: &[Exercise::new(
                    "wl-7",
                    "Active Recovery",
                    "Light stretching, yoga, or a leisurely walk to promote recovery.",
                    Beginner,
                )
                .duration("30 minutes")],
            },
            WorkoutDay {
                day: Friday,
                exercises: &[
                    Exercise::new(
                        "wl-8",
                        "Steady-State Cardio",
                        "Maintain a moderate intensity throughout the session.",
                        Intermediate,
                    )
                    .duration("40 minutes"),
                    Exercise::new(
                        "wl-9",
                        "Upper Body Circuit",
                        "Complete 3 sets of: 10 push-ups, 10 dumbbell rows per arm, 10 shoulder presses, 10 tricep dips.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Saturday,
                exercises: &[Exercise::new(
                    "wl-10",
                    "Full Body HIIT",
                    "Complete 4 rounds of: 45 seconds work, 15 seconds rest for 6 different exercises.",
                    Advanced,
                )
                .duration("35 minutes")],
            },
            WorkoutDay {
                day: Sunday,
                exercises: &[Exercise::new(
                    "wl-11",
                    "Rest Day",
                    "Take a complete rest or do light stretching to recover.",
                    Beginner,
                )
                .duration("As needed")],
            },
        ],
    },
    WorkoutSchedule {
        goal: "muscle-gain",
        schedule: &[
            WorkoutDay {
                day: Monday,
                exercises: &[
                    Exercise::new(
                        "mg-1",
                        "Chest & Triceps",
                        "Bench press: 4 sets of 8-10 reps, Incline dumbbell press: 3 sets of 10-12 reps, Tricep dips: 3 sets of 10-12 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "mg-2",
                        "Core Finisher",
                        "Plank: 3 sets of 30-60 seconds, Russian twists: 3 sets of 15 reps per side.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Tuesday,
                exercises: &[
                    Exercise::new(
                        "mg-3",
                        "Back & Biceps",
                        "Pull-ups or assisted pull-ups: 4 sets of 6-8 reps, Bent-over rows: 3 sets of 10-12 reps, Bicep curls: 3 sets of 10-12 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "mg-4",
                        "Core Work",
                        "Hanging leg raises: 3 sets of 10-12 reps, Side planks: 3 sets of 30 seconds per side.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Wednesday,
                exercises: &[Exercise::new(
                    "mg-5",
                    "Active Recovery",
                    "Light cardio, stretching, or yoga to promote recovery and maintain mobility.",
                    Beginner,
                )
                .duration("30-45 minutes")],
            },
            WorkoutDay {
                day: Thursday,
                exercises: &[
                    Exercise::new(
                        "mg-6",
                        "Legs & Shoulders",
                        "Squats: 4 sets of 8-10 reps, Lunges: 3 sets of 10-12 reps per leg, Shoulder press: 3 sets of 10-12 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "mg-7",
                        "Calves & Abs",
                        "Calf raises: 4 sets of 15-20 reps, Crunches: 3 sets of 15-20 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                ],
            },
            WorkoutDay {
                day: Friday,
                exercises: &[
                    Exercise::new(
                        "mg-8",
                        "Full Body Workout",
                        "Deadlifts: 4 sets of 6-8 reps, Push-ups: 3 sets of 10-15 reps, Dumbbell rows: 3 sets of 10-12 reps per arm.",
                        Advanced,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "mg-9",
                        "Core Circuit",
                        "Complete 3 rounds of: 15 sit-ups, 30-second plank, 15 bicycle crunches.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Saturday,
                exercises: &[
                    Exercise::new(
                        "mg-10",
                        "Arms & Shoulders",
                        "Overhead press: 4 sets of 8-10 reps, Tricep extensions: 3 sets of 10-12 reps, Bicep curls: 3 sets of 10-12 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "mg-11",
                        "Light Cardio",
                        "Moderate intensity cardio to improve recovery and cardiovascular health.",
                        Beginner,
                    )
                    .duration("20-30 minutes"),
                ],
            },
            WorkoutDay {
                day: Sunday,
                exercises: &[Exercise::new(
                    "mg-12",
                    "Rest Day",
                    "Complete rest to allow your muscles to recover and grow.",
                    Beginner,
                )
                .duration("Full day")],
            },
        ],
    },
    WorkoutSchedule {
        goal: "weight-gain",
        schedule: &[
            WorkoutDay {
                day: Monday,
                exercises: &[
                    Exercise::new(
                        "wg-1",
                        "Compound Lifts - Lower Body",
                        "Squats: 4 sets of 6-8 reps, Deadlifts: 4 sets of 6-8 reps, Leg press: 3 sets of 8-10 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "wg-2",
                        "Calorie-Dense Meal Planning",
                        "Focus on consuming a protein-rich meal within 30 minutes after your workout.",
                        Beginner,
                    ),
                ],
            },
            WorkoutDay {
                day: Tuesday,
                exercises: &[
                    Exercise::new(
                        "wg-3",
                        "Upper Body Push",
                        "Bench press: 4 sets of 6-8 reps, Overhead press: 3 sets of 8-10 reps, Dips: 3 sets of 8-10 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "wg-4",
                        "Core Stability",
                        "Plank: 3 sets of 45-60 seconds, Ab wheel rollouts: 3 sets of 8-10 reps.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Wednesday,
                exercises: &[
                    Exercise::new(
                        "wg-5",
                        "Active Recovery",
                        "Light mobility work and stretching to maintain flexibility.",
                        Beginner,
                    )
                    .duration("30 minutes"),
                    Exercise::new(
                        "wg-6",
                        "Nutrition Focus",
                        "Ensure youre consuming 300-500 calories above your maintenance level with adequate protein.",
                        Beginner,
                    ),
                ],
            },
            WorkoutDay {
                day: Thursday,
                exercises: &[
                    Exercise::new(
                        "wg-7",
                        "Upper Body Pull",
                        "Pull-ups or lat pulldowns: 4 sets of 6-8 reps, Barbell rows: 3 sets of 8-10 reps, Face pulls: 3 sets of 10-12 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "wg-8",
                        "Bicep Focus",
                        "Barbell curls: 3 sets of 8-10 reps, Hammer curls: 3 sets of 10-12 reps.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Friday,
                exercises: &[
                    Exercise::new(
                        "wg-9",
                        "Lower Body Hypertrophy",
                        "Leg extensions: 3 sets of 10-12 reps, Leg curls: 3 sets of 10-12 reps, Calf raises: 4 sets of 15-20 reps.",
                        Intermediate,
                    )
                    .sets("3-4"),
                    Exercise::new(
                        "wg-10",
                        "Core Strength",
                        "Weighted sit-ups: 3 sets of 10-12 reps, Russian twists: 3 sets of 12-15 reps per side.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Saturday,
                exercises: &[
                    Exercise::new(
                        "wg-11",
                        "Full Body Strength",
                        "Focus on compound movements with slightly higher reps: Squats, bench press, rows, overhead press.",
                        Intermediate,
                    )
                    .sets("3")
                    .reps("10-12"),
                    Exercise::new(
                        "wg-12",
                        "Recovery Nutrition",
                        "Ensure adequate protein and carbohydrate intake post-workout.",
                        Beginner,
                    ),
                ],
            },
            WorkoutDay {
                day: Sunday,
                exercises: &[Exercise::new(
                    "wg-13",
                    "Rest Day",
                    "Complete rest with focus on consuming your calorie and protein targets.",
                    Beginner,
                )],
            },
        ],
    },
    WorkoutSchedule {
        goal: "maintenance",
        schedule: &[
            WorkoutDay {
                day: Monday,
                exercises: &[
                    Exercise::new(
                        "mt-1",
                        "Full Body Strength",
                        "Perform 3 sets of 10-12 reps for: squats, push-ups, rows, lunges, and shoulder press.",
                        Intermediate,
                    )
                    .sets("3"),
                    Exercise::new(
                        "mt-2",
                        "Light Cardio",
                        "Brisk walking or light jogging to improve cardiovascular health.",
                        Beginner,
                    )
                    .duration("20 minutes"),
                ],
            },
            WorkoutDay {
                day: Tuesday,
                exercises: &[
                    Exercise::new(
                        "mt-3",
                        "Flexibility & Mobility",
                        "Complete a full-body stretching routine focusing on major muscle groups.",
                        Beginner,
                    )
                    .duration("30 minutes"),
                    Exercise::new(
                        "mt-4",
                        "Core Stability",
                        "Perform 3 sets of: 30-second plank, 15 bird dogs per side, 10 dead bugs per side.",
                        Beginner,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Wednesday,
                exercises: &[
                    Exercise::new(
                        "mt-5",
                        "Moderate Cardio",
                        "Choose from jogging, cycling, swimming, or using the elliptical at a moderate intensity.",
                        Intermediate,
                    )
                    .duration("30 minutes"),
                    Exercise::new(
                        "mt-6",
                        "Upper Body Strength",
                        "Perform 3 sets of 10-12 reps for: push-ups, dumbbell rows, shoulder press, and tricep dips.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Thursday,
                exercises: &[Exercise::new(
                    "mt-7",
                    "Active Recovery",
                    "Light activity such as walking or gentle yoga to promote recovery.",
                    Beginner,
                )
                .duration("30 minutes")],
            },
            WorkoutDay {
                day: Friday,
                exercises: &[
                    Exercise::new(
                        "mt-8",
                        "Lower Body Strength",
                        "Perform 3 sets of 10-12 reps for: squats, lunges, glute bridges, and calf raises.",
                        Intermediate,
                    )
                    .sets("3"),
                    Exercise::new(
                        "mt-9",
                        "Core Workout",
                        "Complete 3 sets of: 15 crunches, 15 bicycle crunches, 30-second side plank per side.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Saturday,
                exercises: &[Exercise::new(
                    "mt-10",
                    "Recreational Activity",
                    "Engage in a sport or activity you enjoy: hiking, tennis, basketball, dancing, etc.",
                    Intermediate,
                )
                .duration("45-60 minutes")],
            },
            WorkoutDay {
                day: Sunday,
                exercises: &[Exercise::new(
                    "mt-11",
                    "Rest or Light Activity",
                    "Take a complete rest or do light stretching based on how you feel.",
                    Beginner,
                )
                .duration("As needed")],
            },
        ],
    },
    WorkoutSchedule {
        goal: "general-fitness",
        schedule: &[
            WorkoutDay {
                day: Monday,
                exercises: &[
                    Exercise::new(
                        "gf-1",
                        "Cardio Endurance",
                        "Steady-state cardio at 60-70% of your max heart rate: jogging, cycling, or elliptical.",
                        Intermediate,
                    )
                    .duration("30 minutes"),
                    Exercise::new(
                        "gf-2",
                        "Core Circuit",
                        "Complete 3 rounds of: 15 crunches, 30-second plank, 10 superman holds, 15 Russian twists per side.",
                        Beginner,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Tuesday,
                exercises: &[Exercise::new(
                    "gf-3",
                    "Full Body Strength",
                    "Perform 3 sets of 12-15 reps for: squats, push-ups, rows, lunges, and shoulder press.",
                    Intermediate,
                )
                .sets("3")],
            },
            WorkoutDay {
                day: Wednesday,
                exercises: &[Exercise::new(
                    "gf-4",
                    "Flexibility & Mobility",
                    "Complete a full yoga session or comprehensive stretching routine.",
                    Beginner,
                )
                .duration("30-45 minutes")],
            },
            WorkoutDay {
                day: Thursday,
                exercises: &[
                    Exercise::new(
                        "gf-5",
                        "Interval Training",
                        "Complete 10 rounds of: 30 seconds high intensity, 90 seconds low intensity.",
                        Intermediate,
                    )
                    .duration("25 minutes"),
                    Exercise::new(
                        "gf-6",
                        "Core Stability",
                        "Perform 3 sets of: 45-second plank, 15 bird dogs per side, 15 dead bugs per side.",
                        Intermediate,
                    )
                    .sets("3"),
                ],
            },
            WorkoutDay {
                day: Friday,
                exercises: &[Exercise::new(
                    "gf-7",
                    "Circuit Training",
                    "Complete 3 rounds of: 15 squats, 10 push-ups, 10 dumbbell rows per arm, 10 lunges per leg, 15 jumping jacks.",
                    Intermediate,
                )
                .sets("3")],
            },
            WorkoutDay {
                day: Saturday,
                exercises: &[Exercise::new(
                    "gf-8",
                    "Recreational Activity",
                    "Engage in a sport or activity you enjoy: hiking, swimming, cycling, team sports, etc.",
                    Intermediate,
                )
                .duration("45-60 minutes")],
            },
            WorkoutDay {
                day: Sunday,
                exercises: &[Exercise::new(
                    "gf-9",
                    "Active Recovery",
                    "Light walking, gentle stretching, or restorative yoga.",
                    Beginner,
                )
                .duration("20-30 minutes")],
            },
        ],
    },
];
