//! Block scanner: finds question blocks in a document.
//!
//! # Format
//! ```markdown
//! :::meerkeuze
//! vraag: Welk gas nemen planten op?
//! opties:
//!   - Zuurstof
//!   - Koolstofdioxide*
//! :::
//! ```
//!
//! An opening line is `:::` followed directly by a known tag. The block ends
//! at the next line that is exactly `:::`. Blocks do not nest, so a body can
//! never contain a bare `:::` line.

use std::ops::Range;

use crate::types::Kind;

const DELIMITER: &str = ":::";

/// A question block located in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub kind: Kind,
    /// Text strictly between the opening and closing lines.
    pub body: &'a str,
    /// Byte range from the opening `:::` through the closing `:::`,
    /// excluding the closing line's terminator.
    pub span: Range<usize>,
}

/// Scan a document for question blocks, in document order.
pub fn scan(document: &str) -> Vec<RawBlock<'_>> {
    let lines = Lines::new(document).collect::<Vec<_>>();
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let open = &lines[cursor];
        let kind = match opening_kind(open) {
            Some(kind) => kind,
            None => {
                cursor += 1;
                continue;
            }
        };

        let close = lines[cursor + 1..]
            .iter()
            .position(|line| line.content == DELIMITER)
            .map(|offset| cursor + 1 + offset);

        match close {
            Some(close_idx) => {
                let close = &lines[close_idx];
                blocks.push(RawBlock {
                    kind,
                    body: &document[open.end..close.start],
                    span: open.start..close.start + close.content.len(),
                });
                cursor = close_idx + 1;
            }
            // No `:::` line remains, so no later opening can close.
            None => break,
        }
    }

    blocks
}

fn opening_kind(line: &Line<'_>) -> Option<Kind> {
    if !line.terminated {
        return None;
    }
    line.content
        .strip_prefix(DELIMITER)
        .and_then(Kind::from_tag)
}

/// A physical line with its byte offsets.
#[derive(Debug)]
struct Line<'a> {
    /// Line text without `\n` or a trailing `\r`.
    content: &'a str,
    start: usize,
    /// Offset just past the line terminator.
    end: usize,
    terminated: bool,
}

struct Lines<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        let rest = &self.text[start..];
        let (raw, end, terminated) = match rest.find('\n') {
            Some(nl) => (&rest[..nl], start + nl + 1, true),
            None => (rest, self.text.len(), false),
        };
        self.pos = end;

        Some(Line {
            content: raw.strip_suffix('\r').unwrap_or(raw),
            start,
            end,
            terminated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_single_block() {
        let doc = "Intro\n:::open\nvraag: Waarom?\n:::\nOutro";
        let blocks = scan(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, Kind::Open);
        assert_eq!(blocks[0].body, "vraag: Waarom?\n");
        assert_eq!(&doc[blocks[0].span.clone()], ":::open\nvraag: Waarom?\n:::");
    }

    #[test]
    fn finds_blocks_in_order() {
        let doc = ":::invullen\nvraag: a\n:::\n\n:::waar-of-niet\nvraag: b\n:::\n";
        let kinds = scan(doc).iter().map(|b| b.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![Kind::FillBlank, Kind::TrueFalse]);
    }

    #[test]
    fn every_tag_opens_a_block() {
        for kind in Kind::ALL {
            let doc = format!(":::{}\nvraag: x\n:::", kind.tag());
            let blocks = scan(&doc);
            assert_eq!(blocks.len(), 1, "tag {}", kind.tag());
            assert_eq!(blocks[0].kind, kind);
        }
    }

    #[test]
    fn unknown_tag_is_not_a_block() {
        let doc = ":::onbekend\nvraag: x\n:::\n";
        assert!(scan(doc).is_empty());
    }

    #[test]
    fn unknown_block_closing_line_does_not_leak() {
        let doc = ":::onbekend\nvraag: x\n:::\n\n:::open\nvraag: y\n:::\n";
        let blocks = scan(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "vraag: y\n");
    }

    #[test]
    fn unterminated_block_is_ignored() {
        let doc = "Tekst\n:::open\nvraag: nooit gesloten\n";
        assert!(scan(doc).is_empty());
    }

    #[test]
    fn many_unterminated_openings() {
        let doc = format!(
            ":::invullen\nvraag: a\n:::\n{}",
            ":::open\nvraag: x\n".repeat(50_000)
        );
        let blocks = scan(&doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, Kind::FillBlank);
    }

    #[test]
    fn opening_tag_must_be_whole_line() {
        let doc = ":::openbaar\nvraag: x\n:::\ntekst :::open\nvraag: y\n:::\n";
        assert!(scan(doc).is_empty());
    }

    #[test]
    fn opening_line_needs_newline() {
        assert!(scan(":::open").is_empty());
    }

    #[test]
    fn inline_delimiter_does_not_close() {
        let doc = ":::open\nvraag: wat betekent ::: hier?\n:::";
        let blocks = scan(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "vraag: wat betekent ::: hier?\n");
    }

    #[test]
    fn tolerates_crlf() {
        let doc = "A\r\n:::open\r\nvraag: x\r\n:::\r\nB";
        let blocks = scan(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "vraag: x\r\n");
        assert_eq!(&doc[blocks[0].span.clone()], ":::open\r\nvraag: x\r\n:::");
    }

    #[test]
    fn empty_body() {
        let blocks = scan(":::open\n:::\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "");
    }

    #[test]
    fn nested_opening_is_body_text() {
        let doc = ":::open\n:::invullen\nvraag: x\n:::\n:::\n";
        let blocks = scan(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, Kind::Open);
        assert_eq!(blocks[0].body, ":::invullen\nvraag: x\n");
    }
}
