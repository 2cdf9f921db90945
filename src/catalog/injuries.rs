//! Injury → rehabilitation exercise table.

use super::Difficulty::{Advanced, Beginner, Intermediate};
use super::Exercise;

/// Injury keys in the order the selection form offers them.
pub const INJURY_KEYS: &[&str] = &[
    "Shoulder Pain",
    "Knee Pain",
    "Back Pain",
    "Ankle Sprain",
    "Wrist Pain",
    "Hip Pain",
    "Neck Pain",
    "Elbow Pain",
    "Hamstring Strain",
    "Plantar Fasciitis",
    "Tennis Elbow",
    "Groin Strain",
    "Shin Splints",
    "Rotator Cuff Injury",
    "IT Band Syndrome",
    "Carpal Tunnel",
];

pub static INJURY_EXERCISES: &[(&str, &[Exercise])] = &[
    (
        "Neck Pain",
        &[
            Exercise::new(
                "17",
                "Neck Rotation",
                "Slowly turn your head from side to side. Helps improve neck mobility and reduce stiffness.",
                Beginner,
            )
            .duration("5-8 minutes"),
            Exercise::new(
                "18",
                "Chin Tucks",
                "Draw your chin straight back while keeping your head level. Strengthens deep neck flexors.",
                Beginner,
            )
            .duration("5-10 minutes"),
            Exercise::new(
                "19",
                "Isometric Neck Exercises",
                "Place hand on forehead and push against it while keeping head still. Strengthens neck muscles.",
                Intermediate,
            )
            .duration("8-10 minutes"),
        ],
    ),
    (
        "Shoulder Pain",
        &[
            Exercise::new(
                "1",
                "Pendulum Exercise",
                "Lean over slightly and let your affected arm hang down. Swing your arm gently in small circles. This helps reduce inflammation and improve mobility.",
                Beginner,
            )
            .duration("5-10 minutes"),
            Exercise::new(
                "2",
                "Wall Slides",
                "Stand with your back against a wall and slowly slide your arms up and down. Helps improve shoulder blade movement and posture.",
                Intermediate,
            )
            .duration("10-15 minutes"),
            Exercise::new(
                "3",
                "Rotator Cuff External Rotation",
                "Using a resistance band, keep your elbow at your side and rotate your arm outward. Strengthens the rotator cuff muscles.",
                Intermediate,
            )
            .duration("10-12 minutes"),
        ],
    ),
    (
        "Knee Pain",
        &[
            Exercise::new(
                "4",
                "Straight Leg Raises",
                "Lie on your back and raise one leg while keeping it straight. Strengthens quadriceps without stressing the knee joint.",
                Beginner,
            )
            .duration("10 minutes"),
            Exercise::new(
                "5",
                "Wall Sits",
                "Stand with your back against a wall and slide down until your thighs are parallel to the ground. Builds knee stability and quad strength.",
                Intermediate,
            )
            .duration("5-8 minutes"),
            Exercise::new(
                "6",
                "Step-Ups",
                "Step up onto a platform with one leg, then step back down. Start with a low step and progress as strength improves.",
                Advanced,
            )
            .duration("15 minutes"),
        ],
    ),
    (
        "Back Pain",
        &[
            Exercise::new(
                "7",
                "Cat-Cow Stretch",
                "On hands and knees, alternate between arching and rounding your back. Improves spine flexibility and relieves tension.",
                Beginner,
            )
            .duration("5-10 minutes"),
            Exercise::new(
                "8",
                "Bird Dog Exercise",
                "On hands and knees, extend opposite arm and leg while maintaining balance. Strengthens core and improves stability.",
                Intermediate,
            )
            .duration("10-15 minutes"),
            Exercise::new(
                "9",
                "Bridge Exercise",
                "Lie on your back with knees bent, lift hips off the ground. Strengthens lower back and glutes.",
                Beginner,
            )
            .duration("8-10 minutes"),
        ],
    ),
    (
        "Ankle Sprain",
        &[
            Exercise::new(
                "10",
                "Ankle Alphabet",
                "Draw the alphabet with your toes while keeping your ankle elevated. Improves range of motion and circulation.",
                Beginner,
            )
            .duration("5-10 minutes"),
            Exercise::new(
                "11",
                "Heel Raises",
                "Stand on the edge of a step and raise up onto your toes. Strengthens calf muscles and improves ankle stability.",
                Intermediate,
            )
            .duration("8-12 minutes"),
            Exercise::new(
                "12",
                "Balance Board Exercises",
                "Stand on a balance board and maintain stability. Enhances proprioception and ankle strength.",
                Advanced,
            )
            .duration("10-15 minutes"),
        ],
    ),
    (
        "Wrist Pain",
        &[
            Exercise::new(
                "13",
                "Wrist Flexor Stretch",
                "Extend your arm with palm up, gently pull fingers back. Relieves tension in forearm muscles.",
                Beginner,
            )
            .duration("5-8 minutes"),
            Exercise::new(
                "14",
                "Grip Strengthening",
                "Squeeze a stress ball or hand gripper. Improves grip strength and wrist stability.",
                Intermediate,
            )
            .duration("5-10 minutes"),
        ],
    ),
    (
        "Elbow Pain",
        &[
            Exercise::new(
                "20",
                "Wrist Flexion/Extension",
                "Bend wrist up and down while keeping elbow straight. Improves forearm flexibility.",
                Beginner,
            )
            .duration("5-8 minutes"),
            Exercise::new(
                "21",
                "Forearm Pronation/Supination",
                "Rotate palm up and down while keeping elbow at side. Improves rotational mobility.",
                Intermediate,
            )
            .duration("8-10 minutes"),
        ],
    ),
    (
        "Hamstring Strain",
        &[
            Exercise::new(
                "22",
                "Standing Hamstring Stretch",
                "Place foot on elevated surface and lean forward. Improves hamstring flexibility.",
                Beginner,
            )
            .duration("8-10 minutes"),
            Exercise::new(
                "23",
                "Nordic Hamstring Curl",
                "Kneel with partner holding ankles, slowly lower torso. Strengthens hamstrings eccentrically.",
                Advanced,
            )
            .duration("10-15 minutes"),
        ],
    ),
    (
        "Plantar Fasciitis",
        &[
            Exercise::new(
                "24",
                "Foot Rolling",
                "Roll foot over a tennis ball or frozen water bottle. Relieves plantar fascia tension.",
                Beginner,
            )
            .duration("5-10 minutes"),
            Exercise::new(
                "25",
                "Toe Stretches",
                "Pull toes back towards shin while seated. Stretches plantar fascia and calf.",
                Beginner,
            )
            .duration("5-8 minutes"),
        ],
    ),
    (
        "Tennis Elbow",
        &[
            Exercise::new(
                "26",
                "Eccentric Wrist Extension",
                "Lower weight slowly with back of hand facing up. Strengthens wrist extensors.",
                Intermediate,
            )
            .duration("8-12 minutes"),
            Exercise::new(
                "27",
                "Forearm Stretches",
                "Extend arm and gently stretch wrist in both directions. Relieves tennis elbow pain.",
                Beginner,
            )
            .duration("5-8 minutes"),
        ],
    ),
    (
        "Groin Strain",
        &[
            Exercise::new(
                "28",
                "Butterfly Stretch",
                "Sit with feet together, knees out, gently press knees down. Stretches inner thighs.",
                Beginner,
            )
            .duration("8-10 minutes"),
            Exercise::new(
                "29",
                "Lateral Lunges",
                "Step sideways into lunge position. Strengthens adductors and improves flexibility.",
                Intermediate,
            )
            .duration("10-12 minutes"),
        ],
    ),
    (
        "Shin Splints",
        &[
            Exercise::new(
                "30",
                "Toe Taps",
                "Tap toes while keeping heel on ground. Strengthens anterior tibialis muscle.",
                Beginner,
            )
            .duration("5-8 minutes"),
            Exercise::new(
                "31",
                "Calf Raises",
                "Rise up on toes then lower slowly. Improves lower leg strength and stability.",
                Intermediate,
            )
            .duration("8-10 minutes"),
        ],
    ),
    (
        "Rotator Cuff Injury",
        &[
            Exercise::new(
                "32",
                "Internal Rotation",
                "Using resistance band, rotate arm inward while keeping elbow at side.",
                Intermediate,
            )
            .duration("8-10 minutes"),
            Exercise::new(
                "33",
                "Shoulder Blade Squeezes",
                "Squeeze shoulder blades together. Improves posture and strengthens rotator cuff.",
                Beginner,
            )
            .duration("5-8 minutes"),
        ],
    ),
    (
        "IT Band Syndrome",
        &[
            Exercise::new(
                "34",
                "Foam Rolling IT Band",
                "Use foam roller along outside of thigh. Releases IT band tension.",
                Intermediate,
            )
            .duration("8-10 minutes"),
            Exercise::new(
                "35",
                "Standing IT Band Stretch",
                "Cross legs and lean to side. Stretches IT band and hip muscles.",
                Beginner,
            )
            .duration("5-8 minutes"),
        ],
    ),
    (
        "Carpal Tunnel",
        &[
            Exercise::new(
                "36",
                "Nerve Gliding Exercises",
                "Move wrist and fingers through series of positions. Helps nerve mobility.",
                Beginner,
            )
            .duration("5-8 minutes"),
            Exercise::new(
                "37",
                "Wrist Stretches",
                "Gently stretch wrist in all directions. Reduces pressure on median nerve.",
                Beginner,
            )
            .duration("5-10 minutes"),
        ],
    ),
    (
        "Hip Pain",
        &[
            Exercise::new(
                "15",
                "Hip Flexor Stretch",
                "Kneel on one knee, push hips forward. Releases tight hip flexors and improves mobility.",
                Beginner,
            )
            .duration("8-10 minutes"),
            Exercise::new(
                "16",
                "Clamshell Exercise",
                "Lie on side, knees bent, lift top knee while keeping feet together. Strengthens hip abductors.",
                Intermediate,
            )
            .duration("10-12 minutes"),
        ],
    ),
];
