//! Test fixtures and factory functions for creating test data.

use std::path::Path;

use serde_json::{json, Value};

/// A topic document with one block of every kind.
pub fn all_kinds_document() -> String {
    [
        "# Alles",
        "",
        ":::meerkeuze\nvraag: Welke?\nopties:\n  - A\n  - B*\n:::",
        ":::invullen\nvraag: Vul in ___\nantwoord: water\n:::",
        ":::afbeelding\nvraag: Benoem\nbron: /img/hart.png\nlabel: Boezem\nx: 10\ny: 20\n:::",
        ":::koppelen\nvraag: Koppel\nparen:\n  - [Rijn, Zwitserland]\n:::",
        ":::waar-of-niet\nvraag: Klopt dit?\nantwoord: waar\n:::",
        ":::open\nvraag: Leg uit\nkernwoorden: [licht, water]\n:::",
        "",
        "Einde.",
    ]
    .join("\n")
}

/// A hotspot block whose coordinate does not fit and is dropped.
pub fn malformed_block() -> &'static str {
    ":::afbeelding\nvraag: Kapot\nlabel: A\nx: 99999999999\ny: 1\n:::"
}

/// Request body for POST /api/content/parse.
pub fn parse_request(content: &str) -> Value {
    json!({ "content": content })
}

/// Request body for POST /api/grade.
pub fn grade_request(question: Value, answer: Value) -> Value {
    json!({ "question": question, "answer": answer })
}

/// Write a subject directory with optional metadata and topics.
pub fn write_subject(root: &Path, id: &str, meta: Option<&str>, topics: &[(&str, &str)]) {
    let dir = root.join(id);
    std::fs::create_dir_all(&dir).expect("create subject dir");
    if let Some(meta) = meta {
        std::fs::write(dir.join("subject.json"), meta).expect("write subject.json");
    }
    for (stem, content) in topics {
        std::fs::write(dir.join(format!("{stem}.md")), content).expect("write topic");
    }
}
