use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of link categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Learning,
    Work,
    #[default]
    Personal,
}

impl Category {
    /// Fixed section order used by grouped exports and stats.
    pub const ALL: [Category; 3] = [Category::Learning, Category::Work, Category::Personal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Learning => "learning",
            Category::Work => "work",
            Category::Personal => "personal",
        }
    }

    /// Capitalized label for headings
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Learning => "Learning",
            Category::Work => "Work",
            Category::Personal => "Personal",
        }
    }

    /// Map free text onto a category. Never fails; anything unrecognized is personal.
    pub fn normalize(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "learning" | "education" | "study" | "tutorial" => Category::Learning,
            "work" | "business" | "professional" | "job" => Category::Work,
            _ => Category::Personal,
        }
    }

    /// Exact (case-insensitive) category name, without synonyms
    pub fn from_name(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(text))
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::normalize(&s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`Category::normalize`]
pub fn normalize_category(text: &str) -> Category {
    Category::normalize(text)
}

/// A stored link record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub favorite: bool,
}

impl Link {
    /// Create a record from a candidate, assigning a fresh id
    pub fn from_candidate(candidate: CandidateLink, created_at: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(),
            title: candidate.title,
            url: candidate.url,
            category: candidate.category,
            description: candidate.description,
            created_at,
            favorite: candidate.favorite,
        }
    }
}

pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A link extracted from an import source, not yet deduplicated or stored
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateLink {
    pub title: String,
    pub url: String,
    pub category: Category,
    pub description: String,
    pub favorite: bool,
}

impl CandidateLink {
    /// Candidate with a host-derived title and no description
    pub fn from_url(url: &str, category: Category) -> Self {
        Self {
            title: crate::validate::extract_title_from_url(url),
            url: url.to_string(),
            category,
            ..Default::default()
        }
    }
}

/// User-supplied fields for direct add and edit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkInput {
    pub title: String,
    pub url: String,
    pub category: Category,
    pub description: String,
}
