//! Answer matching for typed answers (fill-in-the-blank).

use crate::types::MatchingMode;
use serde::{Deserialize, Serialize};

/// References up to this many chars tolerate one edit, longer ones two.
const SHORT_ANSWER_LEN: usize = 5;

/// Result of comparing a typed answer to the reference answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Similarity score between 0.0 and 1.0.
    pub similarity: f64,
    /// The matching mode used.
    pub matching_mode: MatchingMode,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// Normalized reference answer (for display).
    pub correct_normalized: String,
}

/// Compare a typed answer to the reference answer.
pub fn compare_answers(typed: &str, correct: &str, mode: MatchingMode) -> MatchResult {
    let typed_normalized = normalize_whitespace(typed);
    let correct_normalized = normalize_whitespace(correct);

    let (is_correct, similarity) = match mode {
        MatchingMode::Exact => {
            let is_correct = typed_normalized == correct_normalized;
            (is_correct, if is_correct { 1.0 } else { 0.0 })
        }
        MatchingMode::CaseInsensitive => {
            let is_correct = typed_normalized.to_lowercase() == correct_normalized.to_lowercase();
            (is_correct, if is_correct { 1.0 } else { 0.0 })
        }
        MatchingMode::Fuzzy => (
            fuzzy_match(&typed_normalized, &correct_normalized),
            normalized_similarity(
                &typed_normalized.to_lowercase(),
                &correct_normalized.to_lowercase(),
            ),
        ),
    };

    MatchResult {
        is_correct,
        similarity,
        matching_mode: mode,
        typed_normalized,
        correct_normalized,
    }
}

/// Accept `input` if it is within a small edit distance of `reference`,
/// ignoring case and surrounding or repeated whitespace.
pub fn fuzzy_match(input: &str, reference: &str) -> bool {
    let input = normalize(input);
    let reference = normalize(reference);
    if input == reference {
        return true;
    }
    levenshtein_distance(&input, &reference) <= tolerance(&reference)
}

/// Edits allowed against a normalized reference.
pub fn tolerance(reference: &str) -> usize {
    if reference.chars().count() <= SHORT_ANSWER_LEN {
        1
    } else {
        2
    }
}

/// Lowercase and collapse whitespace.
pub fn normalize(s: &str) -> String {
    normalize_whitespace(s).to_lowercase()
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Calculate normalized similarity (0.0 to 1.0) based on Levenshtein distance.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
