//! Slug validation
//!
//! A slug is the only piece of untrusted input that ever reaches the
//! filesystem, so every lookup by slug goes through [`Slug::parse`] first.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::SlugError;

lazy_static! {
    static ref SLUG_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// A validated post identifier: one or more ASCII letters, digits,
/// underscores or hyphens
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Validate an untrusted string
    pub fn parse(input: &str) -> Result<Self, SlugError> {
        if is_valid(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(SlugError::Invalid(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the post this slug refers to
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0)
    }
}

/// Check a string against the slug grammar
pub fn is_valid(input: &str) -> bool {
    SLUG_PATTERN.is_match(input)
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
