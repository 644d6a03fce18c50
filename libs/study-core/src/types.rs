//! Core types for the study companion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Question kind, as declared by a block's opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Choice,
    FillBlank,
    ImageHotspot,
    Matching,
    TrueFalse,
    Open,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 6] = [
        Self::Choice,
        Self::FillBlank,
        Self::ImageHotspot,
        Self::Matching,
        Self::TrueFalse,
        Self::Open,
    ];

    /// The tag used after `:::` in content markup.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Choice => "meerkeuze",
            Self::FillBlank => "invullen",
            Self::ImageHotspot => "afbeelding",
            Self::Matching => "koppelen",
            Self::TrueFalse => "waar-of-niet",
            Self::Open => "open",
        }
    }

    /// Look up a kind by its markup tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Kind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ParseError::UnknownKind(s.to_string()))
    }
}

/// Multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Fill-in-the-blank question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillBlankQuestion {
    pub prompt: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// A labelled point on an image, in source pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotspot {
    pub label: String,
    pub x: u32,
    pub y: u32,
}

/// Image question where the learner labels hotspots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHotspotQuestion {
    pub prompt: String,
    pub source: String,
    pub hotspots: Vec<Hotspot>,
}

/// Term and the definition it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub term: String,
    pub definition: String,
}

impl MatchPair {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Matching question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingQuestion {
    pub prompt: String,
    pub pairs: Vec<MatchPair>,
}

/// True/false statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueFalseQuestion {
    pub prompt: String,
    pub answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Open-ended question, self-assessed against keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenQuestion {
    pub prompt: String,
    pub keywords: Vec<String>,
}

/// A parsed question block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Question {
    Choice(ChoiceQuestion),
    FillBlank(FillBlankQuestion),
    ImageHotspot(ImageHotspotQuestion),
    Matching(MatchingQuestion),
    TrueFalse(TrueFalseQuestion),
    Open(OpenQuestion),
}

impl Question {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Choice(_) => Kind::Choice,
            Self::FillBlank(_) => Kind::FillBlank,
            Self::ImageHotspot(_) => Kind::ImageHotspot,
            Self::Matching(_) => Kind::Matching,
            Self::TrueFalse(_) => Kind::TrueFalse,
            Self::Open(_) => Kind::Open,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::Choice(q) => &q.prompt,
            Self::FillBlank(q) => &q.prompt,
            Self::ImageHotspot(q) => &q.prompt,
            Self::Matching(q) => &q.prompt,
            Self::TrueFalse(q) => &q.prompt,
            Self::Open(q) => &q.prompt,
        }
    }
}

/// Parser output: display markdown plus the questions cut out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedContent {
    pub markdown: String,
    pub questions: Vec<Question>,
}

/// Matching mode for typed answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::Fuzzy
    }
}

/// A subject with its topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub order: u32,
    pub topics: Vec<Topic>,
}

/// A single topic document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub subject_id: String,
    pub title: String,
    pub slug: String,
    /// Raw markdown with embedded question blocks.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(kind.tag().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            "onbekend".parse::<Kind>(),
            Err(ParseError::UnknownKind("onbekend".to_string()))
        );
    }

    #[test]
    fn question_serializes_with_type_tag() {
        let question = Question::TrueFalse(TrueFalseQuestion {
            prompt: "De aarde is rond.".to_string(),
            answer: true,
            explanation: None,
        });
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "true-false");
        assert_eq!(json["prompt"], "De aarde is rond.");
        assert_eq!(json["answer"], true);
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn question_accessors() {
        let question = Question::Open(OpenQuestion {
            prompt: "Leg uit".to_string(),
            keywords: vec![],
        });
        assert_eq!(question.kind(), Kind::Open);
        assert_eq!(question.prompt(), "Leg uit");
    }
}
