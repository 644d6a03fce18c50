//! Core study library shared by the backend and any front end.
//!
//! Provides:
//! - Content parser for topic documents with embedded question blocks
//! - Placeholder protocol between parser output and renderers
//! - Answer matching for typed answers (Levenshtein distance)
//! - Grading of answers for every question kind
//! - Flashcards from short-answer questions
//! - Shared types (Question, Kind, Subject, Topic, etc.)

pub mod body;
pub mod decode;
pub mod error;
pub mod flashcards;
pub mod grading;
pub mod matching;
pub mod parser;
pub mod placeholder;
pub mod scanner;
pub mod types;

pub use error::{GradeError, ParseError, PlaceholderError, Result};
pub use flashcards::{flashcard, flashcards, Flashcard};
pub use grading::{grade, Answer, Grade};
pub use matching::{compare_answers, fuzzy_match, levenshtein_distance, normalized_similarity, MatchResult};
pub use parser::{parse, parse_with, ParseOptions};
pub use placeholder::{segments, DroppedBlockPolicy, Placeholder, Segment};
pub use types::{
    ChoiceQuestion, FillBlankQuestion, Hotspot, ImageHotspotQuestion, Kind, MatchPair,
    MatchingMode, MatchingQuestion, OpenQuestion, ParsedContent, Question, Subject, Topic,
    TrueFalseQuestion,
};
