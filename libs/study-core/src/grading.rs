//! Grading of learner answers against parsed questions.

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::matching::{compare_answers, normalize};
use crate::types::{Kind, MatchPair, MatchingMode, OpenQuestion, Question};

/// A learner's answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Answer {
    Choice { selected: usize },
    FillBlank { text: String },
    /// Labels in hotspot order.
    ImageHotspot { labels: Vec<String> },
    Matching { pairs: Vec<MatchPair> },
    TrueFalse { value: bool },
    Open { text: String },
}

impl Answer {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Choice { .. } => Kind::Choice,
            Self::FillBlank { .. } => Kind::FillBlank,
            Self::ImageHotspot { .. } => Kind::ImageHotspot,
            Self::Matching { .. } => Kind::Matching,
            Self::TrueFalse { .. } => Kind::TrueFalse,
            Self::Open { .. } => Kind::Open,
        }
    }
}

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// `None` for self-assessed (open) questions.
    pub is_correct: Option<bool>,
    /// Fraction correct, 0.0 to 1.0.
    pub score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_keywords: Vec<String>,
}

impl Grade {
    fn all_or_nothing(is_correct: bool) -> Self {
        Self {
            is_correct: Some(is_correct),
            score: if is_correct { 1.0 } else { 0.0 },
            matched_keywords: Vec::new(),
        }
    }

    /// Nothing to match: the score follows the verdict.
    fn partial(correct: usize, total: usize, is_correct: bool) -> Self {
        if total == 0 {
            return Self::all_or_nothing(is_correct);
        }
        Self {
            is_correct: Some(is_correct),
            score: fraction(correct, total),
            matched_keywords: Vec::new(),
        }
    }
}

/// Grade `answer` against `question`. `mode` applies to typed answers.
pub fn grade(question: &Question, answer: &Answer, mode: MatchingMode) -> Result<Grade, GradeError> {
    let grade = match (question, answer) {
        (Question::Choice(q), Answer::Choice { selected }) => {
            Grade::all_or_nothing(*selected == q.correct && *selected < q.options.len())
        }
        (Question::FillBlank(q), Answer::FillBlank { text }) => {
            let result = compare_answers(text, &q.answer, mode);
            Grade {
                is_correct: Some(result.is_correct),
                score: if result.is_correct { 1.0 } else { result.similarity },
                matched_keywords: Vec::new(),
            }
        }
        (Question::ImageHotspot(q), Answer::ImageHotspot { labels }) => {
            let correct = q
                .hotspots
                .iter()
                .zip(labels)
                .filter(|(hotspot, label)| normalize(&hotspot.label) == normalize(label))
                .count();
            Grade::partial(correct, q.hotspots.len(), correct == q.hotspots.len())
        }
        (Question::Matching(q), Answer::Matching { pairs }) => {
            let correct = pairs.iter().filter(|pair| q.pairs.contains(pair)).count();
            let complete = q.pairs.iter().all(|pair| pairs.contains(pair));
            Grade::partial(correct, q.pairs.len(), complete && correct == pairs.len())
        }
        (Question::TrueFalse(q), Answer::TrueFalse { value }) => {
            Grade::all_or_nothing(*value == q.answer)
        }
        (Question::Open(q), Answer::Open { text }) => {
            let matched_keywords = matched_keywords(q, text);
            Grade {
                is_correct: None,
                score: fraction(matched_keywords.len(), q.keywords.len()),
                matched_keywords,
            }
        }
        _ => {
            return Err(GradeError::KindMismatch {
                expected: question.kind(),
                found: answer.kind(),
            })
        }
    };
    Ok(grade)
}

/// Keywords that appear in `text`, case-insensitively, in question order.
pub fn matched_keywords(question: &OpenQuestion, text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    question
        .keywords
        .iter()
        .filter(|keyword| text.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}

fn fraction(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
