//! mdblog: a minimal Markdown blog
//!
//! Posts are plain `*.md` files with YAML front-matter in one content
//! directory. The crate provides two flows over that directory:
//!
//! - the listing flow ([`Blog::list_posts`]): read every post's metadata
//!   concurrently and order the result newest first;
//! - the detail flow ([`Blog::load_post`]): validate an untrusted slug, then
//!   load and render the single matching post.
//!
//! Both are exposed through the `mdblog` CLI and a small JSON HTTP server.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, Post, PostDetail};
use error::BlogError;

/// Name of the optional site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the posts
    pub content_dir: PathBuf,
    loader: ContentLoader,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a blog instance from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let loader = ContentLoader::new(&config, &content_dir);

        Self {
            config,
            base_dir,
            content_dir,
            loader,
        }
    }

    /// Content loader bound to this blog's content directory
    pub fn loader(&self) -> &ContentLoader {
        &self.loader
    }

    /// All posts, newest first
    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogError> {
        self.loader.list().await
    }

    /// Load a single post by an untrusted slug
    pub async fn load_post(&self, slug: &str) -> Result<PostDetail, BlogError> {
        self.loader.load(slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.content_dir, dir.path().join("posts"));
        assert_eq!(blog.loader().content_dir(), blog.content_dir.as_path());
    }

    #[test]
    fn test_new_reads_content_dir_from_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "content_dir: src/routes/blog\n").unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.content_dir, dir.path().join("src/routes/blog"));
    }

    #[test]
    fn test_new_rejects_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "server: [1, 2\n").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }

    #[tokio::test]
    async fn test_listing_and_detail_flows() {
        let dir = tempfile::tempdir().unwrap();
        let posts = dir.path().join("posts");
        fs::create_dir(&posts).unwrap();
        fs::write(posts.join("a.md"), "---\ntitle: A\ndate: 2024-01-01\n---\nA body\n").unwrap();
        fs::write(posts.join("b.md"), "---\ntitle: B\ndate: 2024-06-01\n---\nB body\n").unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let listing = blog.list_posts().await.unwrap();
        let order: Vec<_> = listing.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);

        let detail = blog.load_post("a").await.unwrap();
        assert_eq!(detail.metadata.title, "A");

        assert_eq!(blog.load_post("../secret").await.unwrap_err().status_code(), 400);
        assert_eq!(blog.load_post("missing-post").await.unwrap_err().status_code(), 404);
    }
}
