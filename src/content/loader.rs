//! Content loader - lists posts and resolves single posts by slug

use glob::{MatchOptions, Pattern};
use std::cmp::Reverse;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

use super::{slug, FrontMatter, MarkdownRenderer, Metadata, Post, PostDetail, Slug};
use crate::config::SiteConfig;
use crate::error::{BlogError, LoadError};

/// Loads posts from a single content directory
#[derive(Clone)]
pub struct ContentLoader {
    content_dir: PathBuf,
    words_per_minute: u32,
    renderer: Arc<MarkdownRenderer>,
}

impl ContentLoader {
    /// Create a loader for `content_dir` using the rendering settings in `config`
    pub fn new<P: Into<PathBuf>>(config: &SiteConfig, content_dir: P) -> Self {
        let renderer = MarkdownRenderer::with_options(&config.highlight_theme, config.line_numbers);
        Self {
            content_dir: content_dir.into(),
            words_per_minute: config.words_per_minute,
            renderer: Arc::new(renderer),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Find every `*.md` file directly inside the content directory, sorted by path.
    /// Hidden files and subdirectories are skipped.
    pub fn discover(&self) -> Result<Vec<PathBuf>, BlogError> {
        let enumeration_error = |source: LoadError| BlogError::Enumeration {
            path: self.content_dir.clone(),
            source,
        };

        let root = self
            .content_dir
            .to_str()
            .ok_or_else(|| enumeration_error(LoadError::NonUtf8(self.content_dir.clone())))?;
        let pattern = format!("{}/*.md", Pattern::escape(root.trim_end_matches('/')));
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };

        let mut files = Vec::new();
        let entries = glob::glob_with(&pattern, options)
            .map_err(|e| enumeration_error(LoadError::Pattern(e)))?;
        for entry in entries {
            let path = entry.map_err(|e| BlogError::Enumeration {
                path: e.path().to_path_buf(),
                source: LoadError::Io(e.into()),
            })?;
            if path.is_file() {
                files.push(path);
            }
        }

        files.sort();
        tracing::debug!("Found {} posts in {:?}", files.len(), self.content_dir);
        Ok(files)
    }

    /// Load the metadata of every post.
    ///
    /// All files are read concurrently; the first failure aborts the rest and
    /// is returned. The result is in discovery order.
    pub async fn enumerate(&self) -> Result<Vec<Post>, BlogError> {
        let files = self.discover()?;
        let count = files.len();

        let mut tasks = JoinSet::new();
        for (index, path) in files.into_iter().enumerate() {
            let root = self.content_dir.clone();
            let words_per_minute = self.words_per_minute;
            tasks.spawn(async move {
                let result = load_listing_entry(&root, &path, words_per_minute).await;
                (index, path, result)
            });
        }

        let mut slots: Vec<Option<Post>> = vec![None; count];
        while let Some(joined) = tasks.join_next().await {
            let (index, path, result) = joined?;
            match result {
                Ok(post) => slots[index] = Some(post),
                Err(source) => {
                    tracing::debug!("Failed to load post {:?}: {}", path, source);
                    return Err(BlogError::Enumeration { path, source });
                }
            }
        }

        Ok(slots.into_iter().flatten().collect())
    }

    /// The listing flow: every post, newest first
    pub async fn list(&self) -> Result<Vec<Post>, BlogError> {
        let posts = sort_by_date(self.enumerate().await?);
        tracing::info!("Loaded {} posts from {:?}", posts.len(), self.content_dir);
        Ok(posts)
    }

    /// Load and render the post identified by an already validated slug.
    ///
    /// Every failure is reported as [`BlogError::NotFound`]; the underlying
    /// cause is only logged.
    pub async fn resolve(&self, slug: &Slug) -> Result<PostDetail, BlogError> {
        match self.load_detail(slug).await {
            Ok(detail) => Ok(detail),
            Err(e) => {
                tracing::debug!("Post {:?} could not be resolved: {}", slug.as_str(), e);
                Err(BlogError::NotFound(slug.to_string()))
            }
        }
    }

    /// The detail flow: validate untrusted input, then resolve it
    pub async fn load(&self, raw_slug: &str) -> Result<PostDetail, BlogError> {
        let slug = Slug::parse(raw_slug)?;
        self.resolve(&slug).await
    }

    async fn load_detail(&self, slug: &Slug) -> Result<PostDetail, LoadError> {
        let path = self.content_dir.join(slug.file_name());
        let raw = tokio::fs::read_to_string(&path).await?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        let metadata = Metadata::from_front_matter(fm, body, self.words_per_minute);
        let content = self.renderer.render(body);

        Ok(PostDetail {
            metadata,
            content,
            slug: slug.clone(),
        })
    }
}

/// Read one post file and build its listing entry
async fn load_listing_entry(
    root: &Path,
    path: &Path,
    words_per_minute: u32,
) -> Result<Post, LoadError> {
    let identifier = post_identifier(root, path)?;
    let raw = tokio::fs::read_to_string(path).await?;
    let (fm, body) = FrontMatter::parse(&raw)?;

    Ok(Post {
        meta: Metadata::from_front_matter(fm, body, words_per_minute),
        path: identifier,
    })
}

/// Identifier of a post file: its path relative to the content directory,
/// without the `.md` extension
fn post_identifier(root: &Path, path: &Path) -> Result<String, LoadError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| LoadError::OutsideRoot(path.to_path_buf()))?;
    let stem = relative
        .file_stem()
        .ok_or_else(|| LoadError::OutsideRoot(path.to_path_buf()))?
        .to_str()
        .ok_or_else(|| LoadError::NonUtf8(path.to_path_buf()))?;

    if !slug::is_valid(stem) {
        return Err(LoadError::InvalidIdentifier(stem.to_string()));
    }

    Ok(stem.to_string())
}

/// Order posts by date, newest first.
///
/// Equal dates keep their input order. Posts whose date does not parse go
/// last, also in input order.
pub fn sort_by_date(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by_cached_key(|post| {
        let timestamp = post.meta.timestamp();
        if timestamp.is_none() {
            tracing::warn!(
                "Post {:?} has an unparseable date {:?}, listing it last",
                post.path,
                post.meta.date
            );
        }
        Reverse(timestamp)
    });
    posts
}
