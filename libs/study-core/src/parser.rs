//! Content parser for topic documents.
//!
//! # Format
//! ```markdown
//! # Fotosynthese
//!
//! Planten zetten licht om in energie.
//!
//! :::meerkeuze
//! vraag: Welk gas nemen planten op?
//! uitleg: Planten nemen CO₂ op.
//! opties:
//!   - Zuurstof
//!   - Koolstofdioxide*
//! :::
//! ```
//!
//! Fields after a list (`opties:`) are read as list text, so `uitleg:`
//! goes before the options.
//!
//! Each block is cut out of the markdown and replaced by a placeholder
//! token (`<!-- question-0 -->`). Blocks that fail to decode are dropped
//! from the question list but still replaced.

use serde::{Deserialize, Serialize};

use crate::body::BlockBody;
use crate::decode::decode;
use crate::placeholder::{DroppedBlockPolicy, Placeholder};
use crate::scanner::scan;
use crate::types::ParsedContent;

/// Parser settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    pub dropped_block: DroppedBlockPolicy,
}

/// Parse a document with default options.
pub fn parse(document: &str) -> ParsedContent {
    parse_with(document, &ParseOptions::default())
}

/// Parse a document into display markdown and questions.
pub fn parse_with(document: &str, options: &ParseOptions) -> ParsedContent {
    let blocks = scan(document);
    let mut markdown = String::with_capacity(document.len());
    let mut questions = Vec::with_capacity(blocks.len());
    let mut copied_to = 0;

    for block in blocks {
        markdown.push_str(&document[copied_to..block.span.start]);
        copied_to = block.span.end;

        let placeholder = match decode(block.kind, &BlockBody::read(block.body)) {
            Ok(question) => {
                questions.push(question);
                Placeholder::Index(questions.len() - 1)
            }
            Err(err) => {
                tracing::debug!(kind = %block.kind, offset = block.span.start, error = %err, "dropping malformed question block");
                options.dropped_block.placeholder(questions.len())
            }
        };
        markdown.push_str(&placeholder.to_string());
    }

    markdown.push_str(&document[copied_to..]);
    tracing::trace!(questions = questions.len(), "parsed document");

    ParsedContent {
        markdown,
        questions,
    }
}
