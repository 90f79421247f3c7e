//! Demo journal used to populate an empty store.

/// One demo journal text with its fixed creation time.
#[derive(Debug, Clone, Copy)]
pub struct DemoEntry {
    pub text: &'static str,
    /// Unix epoch milliseconds (UTC).
    pub created_at: i64,
}

/// Twenty demo entries in chronological order.
pub const DEMO_ENTRIES: &[DemoEntry] = &[
    DemoEntry {
        text: "I'm feeling really happy today! The weather is perfect.",
        created_at: 1_756_116_000_000,
    },
    DemoEntry {
        text: "Feeling a bit down today. Work was stressful.",
        created_at: 1_756_216_800_000,
    },
    DemoEntry {
        text: "Just a regular day, nothing special happened.",
        created_at: 1_756_317_600_000,
    },
    DemoEntry {
        text: "Amazing news! I got the promotion I wanted!",
        created_at: 1_756_371_600_000,
    },
    DemoEntry {
        text: "Feeling anxious about tomorrow's presentation.",
        created_at: 1_756_472_400_000,
    },
    DemoEntry {
        text: "Had a nice lunch with colleagues.",
        created_at: 1_756_573_200_000,
    },
    DemoEntry {
        text: "Feeling overwhelmed with all the tasks.",
        created_at: 1_756_638_000_000,
    },
    DemoEntry {
        text: "Productive day at work, completed several projects.",
        created_at: 1_756_717_200_000,
    },
    DemoEntry {
        text: "Feeling neutral about today's events.",
        created_at: 1_756_720_800_000,
    },
    DemoEntry {
        text: "Great workout session, feeling energized!",
        created_at: 1_756_724_400_000,
    },
    DemoEntry {
        text: "Feeling sad about missing the family dinner.",
        created_at: 1_756_728_000_000,
    },
    DemoEntry {
        text: "Regular day at home, nothing out of the ordinary.",
        created_at: 1_756_731_600_000,
    },
    DemoEntry {
        text: "Excited about the weekend plans!",
        created_at: 1_756_735_200_000,
    },
    DemoEntry {
        text: "Feeling frustrated with technical issues.",
        created_at: 1_756_737_000_000,
    },
    DemoEntry {
        text: "Peaceful evening reading a book.",
        created_at: 1_756_738_800_000,
    },
    DemoEntry {
        text: "Wonderful surprise from my partner!",
        created_at: 1_756_740_600_000,
    },
    DemoEntry {
        text: "Feeling lonely today.",
        created_at: 1_756_742_400_000,
    },
    DemoEntry {
        text: "Good conversation with an old friend.",
        created_at: 1_756_744_200_000,
    },
    DemoEntry {
        text: "Feeling indifferent about current events.",
        created_at: 1_756_746_000_000,
    },
    DemoEntry {
        text: "Achieved a personal goal today!",
        created_at: 1_756_747_800_000,
    },
];
