//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILE;

const SAMPLE_POST: &str = r#"---
title: Hello World
date: {{ date }}
author: {{ author }}
tags: welcome
description: The first post on this blog
---

Welcome! Every `*.md` file in this directory is a post. Its file name is
the slug used to open it, so keep names to letters, digits, `-` and `_`.

```rust
fn main() {
    println!("Hello, world!");
}
```
"#;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }

    let content_dir = target_dir.join(&config.content_dir);
    fs::create_dir_all(&content_dir)?;

    let config_content = format!("# mdblog configuration\n{}", config.to_yaml()?);
    fs::write(&config_path, config_content)?;
    tracing::debug!("Wrote {:?}", config_path);

    let sample_path = content_dir.join("hello-world.md");
    if !sample_path.exists() {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        let sample = SAMPLE_POST
            .replace("{{ date }}", &today)
            .replace("{{ author }}", &config.author);
        fs::write(&sample_path, sample)?;
        tracing::debug!("Wrote {:?}", sample_path);
    }

    Ok(())
}
