//! Fitness goal → recommended exercise table.

use super::Difficulty::{Advanced, Beginner, Intermediate};
use super::Exercise;

/// Goal keys in the order the profile form offers them.
pub const GOAL_KEYS: &[&str] = &["weight-loss", "weight-gain", "muscle-gain", "maintenance", "general-fitness"];

pub static GOAL_EXERCISES: &[(&str, &[Exercise])] = &[
    (
        "weight-loss",
        &[
            Exercise::new(
                "wl-1",
                "High-Intensity Interval Training (HIIT)",
                "Alternate between 30 seconds of high-intensity exercise and 30 seconds of rest for 15-20 minutes. Effective for burning calories and improving cardiovascular health.",
                Intermediate,
            )
            .duration("20-30 minutes"),
            Exercise::new(
                "wl-2",
                "Circuit Training",
                "Perform a series of exercises with minimal rest between them. Combines strength and cardio for maximum calorie burn.",
                Intermediate,
            )
            .duration("30-45 minutes"),
            Exercise::new(
                "wl-3",
                "Steady-State Cardio",
                "Maintain a moderate intensity for an extended period. Good for building endurance and burning fat.",
                Beginner,
            )
            .duration("30-60 minutes"),
            Exercise::new(
                "wl-4",
                "Bodyweight Circuit",
                "Complete 3 rounds of: 15 squats, 10 push-ups, 10 lunges per leg, 30-second plank. Great for burning calories without equipment.",
                Beginner,
            )
            .duration("20-30 minutes"),
            Exercise::new(
                "wl-5",
                "Jump Rope Intervals",
                "Jump rope for 1 minute, rest for 30 seconds. Repeat for 10-15 rounds. Excellent for cardiovascular health and calorie burning.",
                Intermediate,
            )
            .duration("15-20 minutes"),
        ],
    ),
    (
        "weight-gain",
        &[
            Exercise::new(
                "wg-1",
                "Compound Strength Training",
                "Focus on heavy compound lifts like squats, deadlifts, and bench press. Aim for 4-6 sets of 6-8 reps with heavier weights.",
                Advanced,
            )
            .duration("45-60 minutes"),
            Exercise::new(
                "wg-2",
                "Progressive Overload Training",
                "Gradually increase the weight or reps in your strength training routine. Essential for muscle and strength gains.",
                Intermediate,
            )
            .duration("40-50 minutes"),
            Exercise::new(
                "wg-3",
                "Full Body Hypertrophy Workout",
                "Target all major muscle groups with 3-4 sets of 8-12 reps. Focus on proper form and controlled movements.",
                Intermediate,
            )
            .duration("50-60 minutes"),
            Exercise::new(
                "wg-4",
                "Caloric Surplus Diet Planning",
                "Learn to calculate your maintenance calories and add 300-500 calories daily. Focus on protein intake of 1.6-2.2g per kg of bodyweight.",
                Beginner,
            )
            .duration("15-20 minutes"),
            Exercise::new(
                "wg-5",
                "Rest and Recovery Optimization",
                "Strategies for proper sleep, stress management, and active recovery to maximize muscle growth and weight gain.",
                Beginner,
            )
            .duration("10-15 minutes"),
        ],
    ),
    (
        "muscle-gain",
        &[
            Exercise::new(
                "mg-1",
                "Hypertrophy Training Split",
                "Follow a push/pull/legs or upper/lower body split routine. Focus on 8-12 reps per set with moderate to heavy weights.",
                Intermediate,
            )
            .duration("45-60 minutes"),
            Exercise::new(
                "mg-2",
                "Time Under Tension Training",
                "Slow down your reps, especially the eccentric (lowering) phase. Increases muscle damage and growth stimulus.",
                Intermediate,
            )
            .duration("40-50 minutes"),
            Exercise::new(
                "mg-3",
                "Compound Movement Focus",
                "Prioritize multi-joint exercises like squats, deadlifts, bench press, and rows for maximum muscle recruitment.",
                Advanced,
            )
            .duration("50-60 minutes"),
            Exercise::new(
                "mg-4",
                "Protein Timing and Nutrition",
                "Strategies for optimal protein intake and meal timing to support muscle protein synthesis and recovery.",
                Beginner,
            )
            .duration("15-20 minutes"),
            Exercise::new(
                "mg-5",
                "Progressive Overload Techniques",
                "Methods to continually challenge your muscles through increasing weight, reps, sets, or decreasing rest periods.",
                Intermediate,
            )
            .duration("30-40 minutes"),
        ],
    ),
    (
        "maintenance",
        &[
            Exercise::new(
                "mt-1",
                "Balanced Fitness Routine",
                "Combine strength training, cardio, and flexibility work in a balanced weekly routine to maintain overall fitness.",
                Intermediate,
            )
            .duration("30-45 minutes"),
            Exercise::new(
                "mt-2",
                "Functional Fitness Circuit",
                "Perform exercises that mimic everyday movements to maintain strength and mobility for daily activities.",
                Beginner,
            )
            .duration("20-30 minutes"),
            Exercise::new(
                "mt-3",
                "Active Recovery Sessions",
                "Low-intensity activities like walking, swimming, or yoga to maintain fitness while allowing for recovery.",
                Beginner,
            )
            .duration("30-40 minutes"),
            Exercise::new(
                "mt-4",
                "Maintenance Nutrition Plan",
                "Guidelines for maintaining your current weight and body composition through balanced nutrition.",
                Beginner,
            )
            .duration("15-20 minutes"),
            Exercise::new(
                "mt-5",
                "Mobility and Flexibility Routine",
                "A comprehensive stretching and mobility routine to maintain joint health and prevent injuries.",
                Beginner,
            )
            .duration("15-20 minutes"),
        ],
    ),
    (
        "general-fitness",
        &[
            Exercise::new(
                "gf-1",
                "Full Body Circuit Training",
                "A balanced workout targeting all major muscle groups with a mix of strength and cardio exercises.",
                Intermediate,
            )
            .duration("30-45 minutes"),
            Exercise::new(
                "gf-2",
                "Cardiovascular Endurance Training",
                "Moderate intensity cardio activities like jogging, cycling, or swimming to improve heart health and stamina.",
                Beginner,
            )
            .duration("20-30 minutes"),
            Exercise::new(
                "gf-3",
                "Functional Strength Workout",
                "Exercises that improve strength for everyday activities, focusing on core stability and multi-joint movements.",
                Intermediate,
            )
            .duration("30-40 minutes"),
            Exercise::new(
                "gf-4",
                "Flexibility and Mobility Session",
                "A combination of static stretches, dynamic movements, and foam rolling to improve overall mobility.",
                Beginner,
            )
            .duration("15-20 minutes"),
            Exercise::new(
                "gf-5",
                "Balanced Nutrition Basics",
                "Learn the fundamentals of a balanced diet that supports overall health and fitness goals.",
                Beginner,
            )
            .duration("10-15 minutes"),
        ],
    ),
];
