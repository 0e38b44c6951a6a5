//! Configuration module

mod site;

pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::DEFAULT_WORDS_PER_MINUTE;
