//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from study-core
pub use study_core::{
    Answer, Flashcard, Grade, MatchingMode, ParsedContent, Question, Subject, Topic,
};

use crate::services::catalog::SearchHit;

// === Subject API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub order: u32,
    pub topic_count: usize,
}

impl From<&Subject> for SubjectSummary {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id.clone(),
            name: subject.name.clone(),
            icon: subject.icon.clone(),
            order: subject.order,
            topic_count: subject.topics.len(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectListResponse {
    pub subjects: Vec<SubjectSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
}

impl From<&Topic> for TopicSummary {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id.clone(),
            title: topic.title.clone(),
            slug: topic.slug.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubjectResponse {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub order: u32,
    pub topics: Vec<TopicSummary>,
}

impl From<&Subject> for SubjectResponse {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id.clone(),
            name: subject.name.clone(),
            icon: subject.icon.clone(),
            order: subject.order,
            topics: subject.topics.iter().map(TopicSummary::from).collect(),
        }
    }
}

/// Topic with its content already split into markdown and questions.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopicResponse {
    pub id: String,
    pub subject_id: String,
    pub title: String,
    pub slug: String,
    pub content: ParsedContent,
}

// === Content API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseContentRequest {
    pub content: String,
}

// === Grading API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct GradeRequest {
    pub question: Question,
    pub answer: Answer,
    #[serde(default)]
    pub matching_mode: MatchingMode,
}

// === Search API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchResult {
    Subject {
        subject_id: String,
        name: String,
        icon: String,
        topic_count: usize,
    },
    Topic {
        subject_id: String,
        subject_name: String,
        topic_id: String,
        title: String,
        slug: String,
    },
}

impl From<SearchHit<'_>> for SearchResult {
    fn from(hit: SearchHit<'_>) -> Self {
        match hit {
            SearchHit::Subject(subject) => SearchResult::Subject {
                subject_id: subject.id.clone(),
                name: subject.name.clone(),
                icon: subject.icon.clone(),
                topic_count: subject.topics.len(),
            },
            SearchHit::Topic { subject, topic } => SearchResult::Topic {
                subject_id: subject.id.clone(),
                subject_name: subject.name.clone(),
                topic_id: topic.id.clone(),
                title: topic.title.clone(),
                slug: topic.slug.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

// === Flashcard API Types ===

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FlashcardQuery {
    /// Restrict cards to one subject.
    pub subject: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlashcardResponse {
    pub front: String,
    pub back: String,
    pub subject_id: String,
    pub subject: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlashcardListResponse {
    pub cards: Vec<FlashcardResponse>,
}
