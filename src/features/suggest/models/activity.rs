use std::fmt;

/// Section of the suggestion a request is mostly about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Sleep,
    Music,
    Breathing,
    Exercise,
    Travel,
    Video,
    Reading,
    Meals,
    Other,
}

/// Checked in order; the first kind with a matching word wins
const KEYWORDS: &[(ActivityKind, &[&str])] = &[
    (
        ActivityKind::Sleep,
        &["sleep", "sleeping", "nap", "insomnia", "bedtime", "rest"],
    ),
    (
        ActivityKind::Breathing,
        &[
            "breathe",
            "breathing",
            "breath",
            "meditate",
            "meditation",
            "mindfulness",
        ],
    ),
    (
        ActivityKind::Music,
        &["music", "song", "songs", "playlist", "listen", "listening"],
    ),
    (
        ActivityKind::Travel,
        &[
            "travel", "trip", "vacation", "holiday", "getaway", "journey", "weekend",
        ],
    ),
    (
        ActivityKind::Meals,
        &[
            "meal",
            "meals",
            "food",
            "eat",
            "eating",
            "cook",
            "cooking",
            "dinner",
            "lunch",
            "breakfast",
            "restaurant",
            "recipe",
        ],
    ),
    (
        ActivityKind::Exercise,
        &[
            "exercise", "workout", "run", "running", "walk", "walking", "yoga", "stretch",
            "stretching", "gym", "sport", "hike", "hiking",
        ],
    ),
    (
        ActivityKind::Video,
        &["video", "videos", "movie", "movies", "film", "watch", "youtube"],
    ),
    (
        ActivityKind::Reading,
        &["read", "reading", "book", "books", "novel", "article"],
    ),
];

impl ActivityKind {
    /// Classify a free-text activity by its words
    pub fn from_activity(activity: &str) -> Self {
        let lowered = activity.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        KEYWORDS
            .iter()
            .find(|(_, keywords)| words.iter().any(|w| keywords.contains(w)))
            .map(|(kind, _)| *kind)
            .unwrap_or(ActivityKind::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Sleep => "sleep",
            ActivityKind::Music => "music",
            ActivityKind::Breathing => "breathing",
            ActivityKind::Exercise => "exercise",
            ActivityKind::Travel => "travel",
            ActivityKind::Video => "video",
            ActivityKind::Reading => "reading",
            ActivityKind::Meals => "meals",
            ActivityKind::Other => "other",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
