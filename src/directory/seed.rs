//! The fixed activity table the server starts with.
//!
//! There is no runtime creation or deletion of activities; this table is the
//! complete lifecycle. State returns to it only when the process restarts.

use std::collections::BTreeMap;

use crate::models::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in inter-school matches",
        schedule: "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 25,
        participants: &["alex@mergington.edu", "ryan@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Practice basketball skills and participate in tournaments",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu", "lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Express creativity through painting, drawing, and sculpture",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["lily@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Perform in plays and develop acting skills",
        schedule: "Thursdays, 3:30 PM - 5:30 PM",
        max_participants: 20,
        participants: &["mia@mergington.edu", "charlotte@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop critical thinking and public speaking through competitive debates",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["ethan@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Science Olympiad",
        description: "Compete in science competitions and conduct experiments",
        schedule: "Fridays, 3:30 PM - 5:30 PM",
        max_participants: 20,
        participants: &["isabella@mergington.edu", "william@mergington.edu"],
    },
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
];

/// Build the seed mapping.
pub fn activities() -> BTreeMap<String, Activity> {
    SEED.iter()
        .map(|entry| {
            (
                entry.name.to_string(),
                Activity {
                    description: entry.description.to_string(),
                    schedule: entry.schedule.to_string(),
                    max_participants: entry.max_participants,
                    participants: entry.participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}
