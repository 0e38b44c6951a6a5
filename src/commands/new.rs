//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::Slug;
use crate::Blog;

/// Create a new post file and return its path.
///
/// Without an explicit slug the file name is derived from the title.
pub fn create_post(blog: &Blog, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => Slug::parse(s)?,
        None => Slug::parse(&slug::slugify(title))
            .map_err(|_| anyhow::anyhow!("Cannot derive a slug from title {:?}", title))?,
    };

    fs::create_dir_all(&blog.content_dir)?;

    let file_path = blog.content_dir.join(slug.file_name());
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    let content = format!(
        "---\ntitle: {}\ndate: {}\nauthor: {}\ntags: ''\ndescription: ''\n---\n\n",
        yaml_string(title),
        now.format("%Y-%m-%dT%H:%M:%S%:z"),
        yaml_string(&blog.config.author),
    );

    fs::write(&file_path, content)?;
    tracing::debug!("Created {:?}", file_path);

    Ok(file_path)
}

/// Quote a value for a single-line YAML scalar
fn yaml_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
