//! In-memory catalog of subjects and topics.
//!
//! Content is laid out as one directory per subject:
//!
//! ```text
//! content/
//!   biologie/
//!     subject.json      { "name": "Biologie", "icon": "🧬", "order": 1 }
//!     fotosynthese.md
//!     cellen.md
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use study_core::{Subject, Topic};
use thiserror::Error;

const SUBJECT_META_FILE: &str = "subject.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid subject.json for subject {subject}: {message}")]
    Metadata { subject: String, message: String },
}

/// Bundled sample content: (subject id, subject.json, topics).
const SAMPLE: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "biologie",
        include_str!("../../content/biologie/subject.json"),
        &[
            ("cellen", include_str!("../../content/biologie/cellen.md")),
            ("fotosynthese", include_str!("../../content/biologie/fotosynthese.md")),
        ],
    ),
    (
        "aardrijkskunde",
        include_str!("../../content/aardrijkskunde/subject.json"),
        &[("rivieren", include_str!("../../content/aardrijkskunde/rivieren.md"))],
    ),
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubjectMeta {
    name: Option<String>,
    icon: Option<String>,
    order: Option<u32>,
}

/// A catalog entry matching a search query.
#[derive(Debug, Clone, Copy)]
pub enum SearchHit<'a> {
    Subject(&'a Subject),
    Topic { subject: &'a Subject, topic: &'a Topic },
}

/// Read-only set of subjects, sorted by `order` then id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    subjects: Vec<Subject>,
}

impl Catalog {
    pub fn new(mut subjects: Vec<Subject>) -> Self {
        subjects.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        for subject in &mut subjects {
            subject.topics.sort_by(|a, b| a.id.cmp(&b.id));
        }
        Self { subjects }
    }

    /// Catalog built from the content bundled with the binary.
    pub fn sample() -> Result<Self, CatalogError> {
        let subjects = SAMPLE
            .iter()
            .map(|&(id, meta, topics)| {
                let topics = topics
                    .iter()
                    .map(|&(stem, content)| topic_from_markdown(id, stem, content))
                    .collect();
                build_subject(id, Some(meta), topics)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(subjects))
    }

    /// Load every subject directory under `root`.
    pub async fn load_dir(root: &Path) -> Result<Self, CatalogError> {
        let mut subjects = Vec::new();

        for subject_dir in list_dir(root).await? {
            if !is_dir(&subject_dir).await? {
                continue;
            }
            let Some(id) = file_stem(&subject_dir) else {
                continue;
            };

            let mut meta = None;
            let mut topics = Vec::new();
            for path in list_dir(&subject_dir).await? {
                let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
                if file_name == SUBJECT_META_FILE {
                    meta = Some(read_to_string(&path).await?);
                } else if path.extension().is_some_and(|ext| ext == "md") {
                    if let Some(stem) = file_stem(&path) {
                        let content = read_to_string(&path).await?;
                        topics.push(topic_from_markdown(&id, &stem, &content));
                    }
                }
            }

            tracing::debug!("Loaded subject {} with {} topics", id, topics.len());
            subjects.push(build_subject(&id, meta.as_deref(), topics)?);
        }

        Ok(Self::new(subjects))
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    pub fn topic(&self, subject_id: &str, topic_id: &str) -> Option<&Topic> {
        self.subject(subject_id)?
            .topics
            .iter()
            .find(|topic| topic.id == topic_id)
    }

    /// Case-insensitive substring search over subject names, topic titles
    /// and topic text. Each subject hit is followed by its topic hits.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let mut hits = Vec::new();

        for subject in &self.subjects {
            if subject.name.to_lowercase().contains(&needle) {
                hits.push(SearchHit::Subject(subject));
            }
            hits.extend(
                subject
                    .topics
                    .iter()
                    .filter(|topic| {
                        topic.title.to_lowercase().contains(&needle)
                            || topic.content.to_lowercase().contains(&needle)
                    })
                    .map(|topic| SearchHit::Topic { subject, topic }),
            );
        }

        tracing::debug!(query, hits = hits.len(), "searched catalog");
        hits
    }
}

fn build_subject(id: &str, meta: Option<&str>, topics: Vec<Topic>) -> Result<Subject, CatalogError> {
    let meta = match meta {
        Some(json) => serde_json::from_str::<SubjectMeta>(json).map_err(|err| CatalogError::Metadata {
            subject: id.to_string(),
            message: err.to_string(),
        })?,
        None => SubjectMeta::default(),
    };

    Ok(Subject {
        id: id.to_string(),
        name: meta.name.unwrap_or_else(|| id.to_string()),
        icon: meta.icon.unwrap_or_default(),
        order: meta.order.unwrap_or(0),
        topics,
    })
}

/// Title is the first level-one heading, falling back to the file stem.
fn topic_from_markdown(subject_id: &str, stem: &str, content: &str) -> Topic {
    let title = content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(stem);

    Topic {
        id: stem.to_string(),
        subject_id: subject_id.to_string(),
        title: title.to_string(),
        slug: stem.to_string(),
        content: content.to_string(),
    }
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}

async fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error(dir))?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error(dir))? {
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

async fn is_dir(path: &Path) -> Result<bool, CatalogError> {
    let metadata = tokio::fs::metadata(path).await.map_err(io_error(path))?;
    Ok(metadata.is_dir())
}

async fn read_to_string(path: &Path) -> Result<String, CatalogError> {
    tokio::fs::read_to_string(path).await.map_err(io_error(path))
}
