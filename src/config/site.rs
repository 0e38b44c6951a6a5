//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default reading speed used for reading-time estimates
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // Content
    /// Directory holding the `*.md` posts, relative to the site base directory
    pub content_dir: String,
    pub words_per_minute: u32,

    // Rendering
    pub highlight_theme: String,
    pub line_numbers: bool,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),

            content_dir: "posts".to_string(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,

            highlight_theme: "base16-ocean.dark".to_string(),
            line_numbers: false,

            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Serialize back to YAML, used when scaffolding a new site
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
