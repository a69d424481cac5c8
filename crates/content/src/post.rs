//! Blog post and portfolio item models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Average adult reading speed used for the "N min read" estimate.
const WORDS_PER_MINUTE: usize = 200;

/// A published article or case study.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub excerpt: String,
    #[serde(default)]
    pub body: String,
    pub published: NaiveDate,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        published: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            tags: Vec::new(),
            excerpt: String::new(),
            body: String::new(),
            published,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Estimated reading time in whole minutes, never below one.
    pub fn read_time_minutes(&self) -> usize {
        let words = self.body.split_whitespace().count();
        read_time(words)
    }

    /// Reading-time label in the form shown next to each post, e.g. `5 min read`.
    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_time_minutes())
    }
}

/// Ceiling of `words / 200`, with a one-minute floor for short posts.
pub fn read_time(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Up to three posts sharing `post`'s category, excluding the post itself.
///
/// Order follows the input slice, so callers that keep posts newest-first
/// get the newest related articles.
pub fn related_posts<'a>(post: &Post, all: &'a [Post]) -> Vec<&'a Post> {
    all.iter()
        .filter(|other| other.id != post.id && other.category == post.category)
        .take(3)
        .collect()
}
