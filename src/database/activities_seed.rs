use crate::models::Activity;

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice drills and play in the inter-school league",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["james@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Improve your serve and play friendly matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        10,
        &["alex@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore painting, drawing and sculpture",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        &["mia@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Drama Club",
        "Rehearse and perform in the school plays",
        "Thursdays, 3:30 PM - 5:30 PM",
        25,
        &["ava@mergington.edu"],
    ),
    (
        "Debate Team",
        "Sharpen public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["liam@mergington.edu", "isabella@mergington.edu"],
    ),
    (
        "Robotics Club",
        "Design, build and program robots for competitions",
        "Saturdays, 10:00 AM - 12:00 PM",
        14,
        &["ethan@mergington.edu"],
    ),
];

/// Directory contents at process start.
pub fn seed_activities() -> Vec<(String, Activity)> {
    SEED.iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
