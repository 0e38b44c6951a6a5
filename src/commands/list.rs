//! List posts

use anyhow::Result;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::display_date;
use crate::Blog;

/// Print the listing, newest first
pub async fn run(blog: &Blog) -> Result<()> {
    let posts = blog.list_posts().await?;
    print!("{}", format_listing(&blog.config, &posts));
    Ok(())
}

/// Render the listing as plain text under the site heading
fn format_listing(config: &SiteConfig, posts: &[Post]) -> String {
    let mut out = format!("{}\n", config.title);
    if !config.description.is_empty() {
        out.push_str(&format!("{}\n", config.description));
    }

    out.push_str(&format!("\nPosts ({}):\n", posts.len()));
    for post in posts {
        out.push_str(&format!(
            "  {} - {} [{}] ({})\n",
            display_date(&post.meta.date),
            post.meta.title,
            post.path,
            post.meta.reading_time.text
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listing_has_site_heading() {
        let dir = tempfile::tempdir().unwrap();
        let posts_dir = dir.path().join("posts");
        std::fs::create_dir(&posts_dir).unwrap();
        std::fs::write(
            posts_dir.join("first.md"),
            "---\ntitle: First\ndate: 2024-01-01\n---\nbody\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("_config.yml"),
            "title: Field Notes\ndescription: Things I learned\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let posts = blog.list_posts().await.unwrap();
        let text = format_listing(&blog.config, &posts);

        assert!(text.starts_with("Field Notes\nThings I learned\n"));
        assert!(text.contains("Posts (1):"));
        assert!(text.contains("2024-01-01 - First [first] (1 min read)"));
    }

    #[test]
    fn test_empty_description_is_skipped() {
        let config = SiteConfig::default();
        let text = format_listing(&config, &[]);
        assert_eq!(text, "My Blog\n\nPosts (0):\n");
    }
}
