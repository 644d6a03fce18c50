//! Per-kind decoding of a block body into a [`Question`].

use crate::body::BlockBody;
use crate::error::{ParseError, Result};
use crate::types::{
    ChoiceQuestion, FillBlankQuestion, Hotspot, ImageHotspotQuestion, Kind, MatchPair,
    MatchingQuestion, OpenQuestion, Question, TrueFalseQuestion,
};

/// Word for "true" in content answers.
const TRUE_WORD: &str = "waar";

/// Decode a block body as a question of the given kind.
pub fn decode(kind: Kind, body: &BlockBody<'_>) -> Result<Question> {
    let question = match kind {
        Kind::Choice => Question::Choice(choice(body)),
        Kind::FillBlank => Question::FillBlank(FillBlankQuestion {
            prompt: body.field_or_empty("vraag"),
            answer: body.field_or_empty("antwoord"),
            hint: optional(body, "hint"),
        }),
        Kind::ImageHotspot => Question::ImageHotspot(ImageHotspotQuestion {
            prompt: body.field_or_empty("vraag"),
            source: body.field_or_empty("bron"),
            hotspots: hotspots(body.lines())?,
        }),
        Kind::Matching => Question::Matching(MatchingQuestion {
            prompt: body.field_or_empty("vraag"),
            pairs: body
                .list_items()
                .iter()
                .filter_map(|item| match_pair(item))
                .collect(),
        }),
        Kind::TrueFalse => Question::TrueFalse(TrueFalseQuestion {
            prompt: body.field_or_empty("vraag"),
            answer: body
                .field("antwoord")
                .is_some_and(|value| value.trim().to_lowercase() == TRUE_WORD),
            explanation: optional(body, "uitleg"),
        }),
        Kind::Open => Question::Open(OpenQuestion {
            prompt: body.field_or_empty("vraag"),
            keywords: body.field("kernwoorden").map(keywords).unwrap_or_default(),
        }),
    };
    Ok(question)
}

fn optional(body: &BlockBody<'_>, key: &str) -> Option<String> {
    body.field(key).map(str::to_string)
}

fn choice(body: &BlockBody<'_>) -> ChoiceQuestion {
    let items = body.list_items();
    let correct = items
        .iter()
        .position(|item| item.ends_with('*'))
        .unwrap_or(0);
    let options = items
        .iter()
        .map(|item| match item.strip_suffix('*') {
            Some(text) => text.trim_end().to_string(),
            None => item.to_string(),
        })
        .collect();

    ChoiceQuestion {
        prompt: body.field_or_empty("vraag"),
        options,
        correct,
        explanation: optional(body, "uitleg"),
    }
}

#[derive(Default)]
struct HotspotBuilder {
    label: Option<String>,
    x: Option<u32>,
}

/// Rescan the body for `label:` / `x:` / `y:` trios. A hotspot is complete
/// when `y` arrives after both `label` and `x`.
fn hotspots(lines: &[&str]) -> Result<Vec<Hotspot>> {
    let mut hotspots = Vec::new();
    let mut current = HotspotBuilder::default();

    for line in lines {
        let trimmed = line.trim();
        let entry = trimmed.strip_prefix("- ").unwrap_or(trimmed);
        let Some((key, value)) = entry.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "label" if !value.is_empty() => current.label = Some(value.to_string()),
            "x" => {
                if let Some(x) = coordinate('x', value)? {
                    current.x = Some(x);
                }
            }
            "y" => {
                let Some(y) = coordinate('y', value)? else {
                    continue;
                };
                if let (Some(label), Some(x)) = (&current.label, current.x) {
                    hotspots.push(Hotspot {
                        label: label.clone(),
                        x,
                        y,
                    });
                    current = HotspotBuilder::default();
                }
            }
            _ => {}
        }
    }

    Ok(hotspots)
}

/// Leading digits of `value`, if any.
fn coordinate(axis: char, value: &str) -> Result<Option<u32>> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let digits = &value[..end];
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ParseError::InvalidCoordinate {
            axis,
            value: digits.to_string(),
        })
}

/// `[term, definition]` to a pair. Anything else is skipped.
fn match_pair(item: &str) -> Option<MatchPair> {
    let start = item.find('[')?;
    let inner = &item[start + 1..];
    let inner = &inner[..inner.find(']')?];
    let (term, definition) = inner.split_once(',')?;
    let (term, definition) = (term.trim(), definition.trim());
    if term.is_empty() || definition.is_empty() {
        return None;
    }
    Some(MatchPair::new(term, definition))
}

/// `[water, licht, energie]` to its trimmed words.
fn keywords(value: &str) -> Vec<String> {
    let (Some(start), Some(end)) = (value.find('['), value.rfind(']')) else {
        return Vec::new();
    };
    if end <= start + 1 {
        return Vec::new();
    }
    value[start + 1..end]
        .split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
