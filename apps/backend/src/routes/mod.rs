pub mod content;
pub mod flashcards;
pub mod grade;
pub mod search;
pub mod subjects;
