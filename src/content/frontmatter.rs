//! Front-matter parsing

use serde::{Deserialize, Deserializer};

use crate::error::LoadError;

/// Custom deserializer that accepts either a single scalar or a list of
/// scalars and flattens the list into one comma-separated string
fn string_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrList;

    impl<'de> Visitor<'de> for StringOrList {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a scalar or a list of scalars")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut items = Vec::new();
            while let Some(item) = seq.next_element::<serde_yaml::Value>()? {
                if let Some(item) = scalar_to_string(item) {
                    items.push(item);
                }
            }
            Ok(items.join(", "))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(StringOrList)
}

/// Text of one list element; nulls are dropped
fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        other => serde_yaml::to_string(&other)
            .ok()
            .map(|s| s.trim_end().to_string()),
    }
}

/// Front-matter data at the top of a post
///
/// Only `date` is required; everything else defaults to empty.
/// Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub author: String,
    #[serde(deserialize_with = "string_or_list", default)]
    pub tags: String,
    #[serde(default)]
    pub description: String,
}

impl FrontMatter {
    /// Parse front-matter from a document
    /// Returns (front_matter, body)
    pub fn parse(content: &str) -> Result<(Self, &str), LoadError> {
        let (yaml, body) = split(content).ok_or(LoadError::MissingFrontMatter)?;
        let fm: FrontMatter = serde_yaml::from_str(yaml)?;
        Ok((fm, body))
    }
}

/// Split a document into its YAML block and the remaining body.
///
/// Both delimiters must be a line consisting of `---` alone.
fn split(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start_matches('\u{feff}');
    let content = content.trim_start_matches(['\n', '\r']);

    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((yaml, body.trim_start_matches(['\n', '\r'])));
        }
        offset += line.len();
    }

    None
}
