//! Front/back cards derived from parsed questions.
//!
//! Only kinds with a single short answer make a card: choice, fill-in-the-blank
//! and true/false.

use serde::{Deserialize, Serialize};

use crate::types::Question;

const TRUE_LABEL: &str = "Waar";
const FALSE_LABEL: &str = "Niet waar";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

/// Card for one question, if its kind has a card form.
pub fn flashcard(question: &Question) -> Option<Flashcard> {
    let (front, back) = match question {
        Question::Choice(q) => (&q.prompt, q.options.get(q.correct)?.clone()),
        Question::FillBlank(q) => (&q.prompt, q.answer.clone()),
        Question::TrueFalse(q) => {
            let label = if q.answer { TRUE_LABEL } else { FALSE_LABEL };
            (&q.prompt, label.to_string())
        }
        Question::ImageHotspot(_) | Question::Matching(_) | Question::Open(_) => return None,
    };

    Some(Flashcard {
        front: front.clone(),
        back,
    })
}

/// Cards for every question that has one, in question order.
pub fn flashcards<'a>(questions: impl IntoIterator<Item = &'a Question>) -> Vec<Flashcard> {
    questions.into_iter().filter_map(flashcard).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::types::{ChoiceQuestion, OpenQuestion};
    use pretty_assertions::assert_eq;

    fn card(front: &str, back: &str) -> Flashcard {
        Flashcard {
            front: front.to_string(),
            back: back.to_string(),
        }
    }

    #[test]
    fn cards_from_parsed_document() {
        let doc = ":::meerkeuze\nvraag: Welk gas?\nopties:\n  - Zuurstof\n  - Koolstofdioxide*\n:::\n\
                   :::invullen\nvraag: Het pigment heet ___\nantwoord: chlorofyl\n:::\n\
                   :::waar-of-niet\nvraag: De aarde is plat.\nantwoord: niet waar\n:::\n\
                   :::waar-of-niet\nvraag: Water kookt bij 100 graden.\nantwoord: waar\n:::\n\
                   :::open\nvraag: Leg uit\nkernwoorden: [licht]\n:::\n\
                   :::koppelen\nvraag: Koppel\nparen:\n  - [Rijn, Zwitserland]\n:::\n";
        let parsed = parse(doc);
        assert_eq!(parsed.questions.len(), 6);

        assert_eq!(
            flashcards(&parsed.questions),
            vec![
                card("Welk gas?", "Koolstofdioxide"),
                card("Het pigment heet ___", "chlorofyl"),
                card("De aarde is plat.", "Niet waar"),
                card("Water kookt bij 100 graden.", "Waar"),
            ]
        );
    }

    #[test]
    fn choice_without_options_has_no_card() {
        let question = Question::Choice(ChoiceQuestion {
            prompt: "Leeg".to_string(),
            options: vec![],
            correct: 0,
            explanation: None,
        });
        assert_eq!(flashcard(&question), None);
    }

    #[test]
    fn open_has_no_card() {
        let question = Question::Open(OpenQuestion {
            prompt: "Leg uit".to_string(),
            keywords: vec!["licht".to_string()],
        });
        assert_eq!(flashcard(&question), None);
    }
}
