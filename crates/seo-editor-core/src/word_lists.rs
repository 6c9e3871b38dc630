//! Fixed word lists used by the analyzers.

/// Transition words counted by the readability classifier.
///
/// The multi-word entries are kept for parity with the scoring rules even
/// though token-level matching can never hit them.
pub const TRANSITION_WORDS: [&str; 14] = [
    "however",
    "therefore",
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "meanwhile",
    "nevertheless",
    "specifically",
    "for example",
    "in addition",
    "as a result",
    "on the other hand",
    "in contrast",
];

/// Call-to-action verbs expected somewhere in a meta description.
pub const ACTION_WORDS: [&str; 7] = [
    "discover", "learn", "find out", "get", "download", "read", "explore",
];

/// Title phrases that signal shareable, instructional content.
pub const SHAREABLE_TITLE_MARKERS: [&str; 2] = ["how to", "guide"];

/// Returns `true` if `token` (already lowercased) is a transition word.
pub fn is_transition_word(token: &str) -> bool {
    TRANSITION_WORDS.contains(&token)
}
