//! Post models handed to the rendering layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FrontMatter, ReadingTime, Slug};
use crate::helpers::parse_date;

/// Attributes of one post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    /// Raw date string from the front-matter
    pub date: String,
    pub author: String,
    pub reading_time: ReadingTime,
    /// Delimited tag list, kept as written
    pub tags: String,
    pub description: String,
}

impl Metadata {
    /// Build metadata from parsed front-matter and the body it was attached to
    pub fn from_front_matter(fm: FrontMatter, body: &str, words_per_minute: u32) -> Self {
        Self {
            title: fm.title,
            date: fm.date,
            author: fm.author,
            reading_time: ReadingTime::estimate(body, words_per_minute),
            tags: fm.tags,
            description: fm.description,
        }
    }

    /// The publication date as a timestamp, if it parses
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        parse_date(&self.date)
    }
}

/// A listing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub meta: Metadata,
    /// File name without directory or extension; doubles as the slug
    pub path: String,
}

/// Rendered post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Content {
    html: String,
}

impl Content {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    pub fn as_html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

/// A fully resolved post page
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub metadata: Metadata,
    pub content: Content,
    pub slug: Slug,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_matter(date: &str) -> FrontMatter {
        FrontMatter {
            title: "Title".to_string(),
            date: date.to_string(),
            author: "Ann".to_string(),
            tags: "a, b".to_string(),
            description: "desc".to_string(),
        }
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let meta = Metadata::from_front_matter(front_matter("2024-01-01"), "one two three", 200);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["title"], "Title");
        assert_eq!(json["readingTime"]["words"], 3);
        assert_eq!(json["tags"], "a, b");
        assert!(json.get("reading_time").is_none());
    }

    #[test]
    fn test_timestamp() {
        let meta = Metadata::from_front_matter(front_matter("2024-06-01"), "", 200);
        assert!(meta.timestamp().is_some());

        let meta = Metadata::from_front_matter(front_matter("not a date"), "", 200);
        assert!(meta.timestamp().is_none());
    }

    #[test]
    fn test_detail_payload_shape() {
        let detail = PostDetail {
            metadata: Metadata::from_front_matter(front_matter("2024-01-01"), "", 200),
            content: Content::new("<p>hi</p>".to_string()),
            slug: Slug::parse("hello").unwrap(),
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["slug"], "hello");
        assert_eq!(json["content"], "<p>hi</p>");
        assert_eq!(json["metadata"]["date"], "2024-01-01");
    }
}
