use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actions::like::LikeState;
use crate::models::user::Author;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    pub author: Author,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub like: LikeState,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

/// Card shape used by search results and profile listings.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub author: Author,
    pub tags: Vec<String>,
    pub like: LikeState,
    pub comments: usize,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            image: self.image.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
            like: self.like,
            comments: self.comments.len(),
            created_at: self.created_at,
        }
    }

    /// Body split into display paragraphs, one per line.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

impl PostSummary {
    /// Text the search filter matches against.
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.tags.iter().map(String::as_str))
            .chain(std::iter::once(self.content.as_str()))
    }
}

// the input to the data source's `submit_post`
#[derive(Serialize, Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub author: Author,
}

/// `May 27, 2025`
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_flattened_like_state() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "id": "post-1",
            "title": "T",
            "content": "first\nsecond",
            "author": { "id": "author-1", "name": "John Doe" },
            "tags": ["Frontend"],
            "likes": 20,
            "is_liked": false,
            "created_at": "2025-05-27T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(post.like.count(), 20);
        assert!(!post.like.is_liked());
        assert!(post.comments.is_empty());
        assert_eq!(post.paragraphs().collect::<Vec<_>>(), ["first", "second"]);
        assert_eq!(post.summary().comments, 0);
    }

    #[test]
    fn formats_dates_like_the_cards() {
        let at: DateTime<Utc> = "2025-05-07T10:00:00Z".parse().unwrap();
        assert_eq!(format_date(&at), "May 7, 2025");
    }
}
