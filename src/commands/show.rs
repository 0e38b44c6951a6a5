//! Show a single post

use anyhow::Result;

use crate::helpers::display_date;
use crate::Blog;

/// Resolve a post by slug and print it
pub async fn run(blog: &Blog, slug: &str, json: bool) -> Result<()> {
    let detail = blog.load_post(slug).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    let meta = &detail.metadata;
    println!("{}", meta.title);
    println!("  slug:    {}", detail.slug);
    println!("  date:    {}", display_date(&meta.date));
    if !meta.author.is_empty() {
        println!("  author:  {}", meta.author);
    }
    if !meta.tags.is_empty() {
        println!("  tags:    {}", meta.tags);
    }
    println!("  reading: {}", meta.reading_time.text);
    if !meta.description.is_empty() {
        println!("\n{}", meta.description);
    }
    println!("\n{}", detail.content.as_html());

    Ok(())
}
