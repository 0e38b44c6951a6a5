//! Content module - post discovery, front-matter, slugs and rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;
mod reading_time;
pub mod slug;

pub use frontmatter::FrontMatter;
pub use loader::{sort_by_date, ContentLoader};
pub use markdown::MarkdownRenderer;
pub use post::{Content, Metadata, Post, PostDetail};
pub use reading_time::ReadingTime;
pub use slug::Slug;
