//! Fixed journaling themes, five prompts each.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JournalCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub prompts: [&'static str; 5],
}

pub static CATEGORIES: [JournalCategory; 5] = [
    JournalCategory {
        name: "Anxiety & Worry",
        description: "Explore and reframe anxious thoughts using CBT techniques",
        prompts: [
            "What specific situation or thought is making me anxious right now?",
            "What evidence do I have that supports this worry? What evidence contradicts it?",
            "What would I tell a friend who had this worry?",
            "What's the worst that could realistically happen? How would I cope?",
            "What's a more balanced way to think about this situation?",
        ],
    },
    JournalCategory {
        name: "Difficult Emotions",
        description: "Process and understand challenging feelings with compassion",
        prompts: [
            "What emotion am I experiencing right now? Where do I feel it in my body?",
            "What triggered this emotion? What happened just before I started feeling this way?",
            "What is this emotion trying to tell me or protect me from?",
            "How can I care for myself while experiencing this feeling?",
            "What do I need right now to feel supported or safe?",
        ],
    },
    JournalCategory {
        name: "Self-Discovery",
        description: "Deepen self-awareness and understand your patterns",
        prompts: [
            "What values are most important to me? Am I living in alignment with them?",
            "What patterns do I notice in my thoughts, behaviors, or relationships?",
            "What parts of myself am I proud of? What am I working to develop?",
            "When do I feel most authentic and alive?",
            "What limiting beliefs might be holding me back?",
        ],
    },
    JournalCategory {
        name: "Growth & Goals",
        description: "Clarify intentions and build momentum toward your aspirations",
        prompts: [
            "What does growth look like for me right now?",
            "What small step could I take this week toward something I care about?",
            "What obstacles might come up, and how can I prepare for them?",
            "Who or what supports my growth? How can I engage with that more?",
            "How will I celebrate progress, even if it's small?",
        ],
    },
    JournalCategory {
        name: "Relationship Reflection",
        description: "Explore connection patterns and communication needs",
        prompts: [
            "What relationship is on my mind? What am I feeling about it?",
            "What do I appreciate about this person or connection?",
            "What needs of mine might not be getting met in this relationship?",
            "How could I communicate my feelings or needs more clearly?",
            "What boundaries would help me feel more respected or safe?",
        ],
    },
];

/// Look up a category by name (case-insensitive) or by 1-based position.
pub fn find_category(key: &str) -> Option<&'static JournalCategory> {
    let key = key.trim();
    if let Ok(n) = key.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| CATEGORIES.get(i));
    }
    CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(key))
}
