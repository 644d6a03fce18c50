//! Placeholder tokens left in display markdown where question blocks were.
//!
//! A token is an HTML comment: `<!-- question-3 -->` points at
//! `questions[3]`. Renderers call [`segments`] to interleave markdown with
//! question widgets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlaceholderError;

const OPEN: &str = "<!-- question-";
const CLOSE: &str = " -->";
const UNPARSED: &str = "unparsed";

/// What a placeholder token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// Index into the question list.
    Index(usize),
    /// Dropped block seen before any question parsed (`question--1`).
    BeforeFirst,
    /// Dropped block under [`DroppedBlockPolicy::Unparsed`].
    Unparsed,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{OPEN}{index}{CLOSE}"),
            Self::BeforeFirst => write!(f, "{OPEN}-1{CLOSE}"),
            Self::Unparsed => write!(f, "{OPEN}{UNPARSED}{CLOSE}"),
        }
    }
}

impl FromStr for Placeholder {
    type Err = PlaceholderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let payload = s
            .trim()
            .strip_prefix(OPEN)
            .and_then(|rest| rest.strip_suffix(CLOSE))
            .ok_or(PlaceholderError::NotAPlaceholder)?;
        parse_payload(payload).ok_or(PlaceholderError::NotAPlaceholder)
    }
}

fn parse_payload(payload: &str) -> Option<Placeholder> {
    match payload {
        "-1" => Some(Placeholder::BeforeFirst),
        UNPARSED => Some(Placeholder::Unparsed),
        digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            digits.parse().ok().map(Placeholder::Index)
        }
        _ => None,
    }
}

/// Which token a block that fails to decode leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroppedBlockPolicy {
    /// Point at the most recently parsed question, or `-1` if none yet.
    PreviousIndex,
    /// Emit `<!-- question-unparsed -->`.
    Unparsed,
}

impl Default for DroppedBlockPolicy {
    fn default() -> Self {
        Self::PreviousIndex
    }
}

impl DroppedBlockPolicy {
    /// Placeholder for a dropped block, given how many questions parsed so far.
    pub fn placeholder(self, parsed_so_far: usize) -> Placeholder {
        match self {
            Self::PreviousIndex => match parsed_so_far.checked_sub(1) {
                Some(previous) => Placeholder::Index(previous),
                None => Placeholder::BeforeFirst,
            },
            Self::Unparsed => Placeholder::Unparsed,
        }
    }
}

impl FromStr for DroppedBlockPolicy {
    type Err = PlaceholderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "previous" | "previous_index" => Ok(Self::PreviousIndex),
            "unparsed" => Ok(Self::Unparsed),
            other => Err(PlaceholderError::UnknownPolicy(other.to_string())),
        }
    }
}

/// A piece of display markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Markdown(&'a str),
    Question(Placeholder),
}

/// Split display markdown into prose and placeholder segments, in order.
pub fn segments(markdown: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut text_start = 0;
    let mut search_from = 0;

    while let Some(found) = markdown[search_from..].find(OPEN) {
        let token_start = search_from + found;
        let payload_start = token_start + OPEN.len();
        let Some(close) = markdown[payload_start..].find(CLOSE) else {
            break;
        };
        let token_end = payload_start + close + CLOSE.len();

        match parse_payload(&markdown[payload_start..payload_start + close]) {
            Some(placeholder) => {
                push_markdown(&mut out, &markdown[text_start..token_start]);
                out.push(Segment::Question(placeholder));
                text_start = token_end;
                search_from = token_end;
            }
            None => search_from = payload_start,
        }
    }

    push_markdown(&mut out, &markdown[text_start..]);
    out
}

fn push_markdown<'a>(out: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        out.push(Segment::Markdown(text));
    }
}
