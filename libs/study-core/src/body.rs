//! Reader for the inside of a question block.
//!
//! A body is a mix of `key: value` field lines and `- item` list lines.
//! Once the first list item appears the reader stays in list mode for the
//! rest of the body, so later `key: value` lines are not fields anymore.

use std::collections::HashMap;

/// Fields and list items collected from a block body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockBody<'a> {
    fields: HashMap<&'a str, &'a str>,
    list_items: Vec<&'a str>,
    lines: Vec<&'a str>,
}

impl<'a> BlockBody<'a> {
    /// Read a block body.
    pub fn read(body: &'a str) -> Self {
        let mut reader = Self::default();
        let mut in_list = false;

        for line in body.trim().lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            reader.lines.push(line);

            match classify(line, in_list) {
                LineType::Field(key, value) => {
                    reader.fields.insert(key, value);
                }
                LineType::ListItem(item) => {
                    in_list = true;
                    reader.list_items.push(item);
                }
                LineType::Continuation(item) => reader.list_items.push(item),
                LineType::Other => {}
            }
        }

        reader
    }

    /// Last value assigned to `key`.
    pub fn field(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).copied()
    }

    /// Value of `key`, or an empty string.
    pub fn field_or_empty(&self, key: &str) -> String {
        self.field(key).unwrap_or_default().to_string()
    }

    /// All list items in order, regardless of the field that introduced them.
    pub fn list_items(&self) -> &[&'a str] {
        &self.list_items
    }

    /// Body lines after trimming the body as a whole.
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }
}

enum LineType<'a> {
    Field(&'a str, &'a str),
    ListItem(&'a str),
    Continuation(&'a str),
    Other,
}

fn classify(line: &str, in_list: bool) -> LineType<'_> {
    if !in_list {
        if let Some((key, value)) = split_field(line) {
            return LineType::Field(key, value);
        }
    }

    let trimmed = line.trim();
    if let Some(item) = trimmed.strip_prefix("- ") {
        LineType::ListItem(item.trim())
    } else if in_list && trimmed.starts_with('[') {
        LineType::Continuation(trimmed)
    } else {
        LineType::Other
    }
}

/// Split `key: value`. The key starts at column 0 and is made of ASCII
/// word characters.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    if key.is_empty() || !key.chars().all(is_word) {
        return None;
    }
    Some((key, value.trim()))
}
