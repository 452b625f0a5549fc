//! Front-matter parsing

use std::collections::HashMap;

const DELIMITER: &str = "---";

/// Front-matter data from a post
///
/// Values are kept as plain strings; only a handful of keys are
/// interpreted, through the typed accessors below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content that does not open with `---`, or that has no closing
    /// delimiter, comes back unchanged with empty front-matter.
    pub fn parse(content: &str) -> (Self, &str) {
        if !content.starts_with(DELIMITER) {
            return (FrontMatter::default(), content);
        }

        let mut parts = content.splitn(3, DELIMITER);
        let (Some(_), Some(meta), Some(body)) = (parts.next(), parts.next(), parts.next()) else {
            return (FrontMatter::default(), content);
        };

        let fields = meta
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once(':')?;
                Some((key.trim().to_string(), unquote(value.trim()).to_string()))
            })
            .collect();

        (FrontMatter { fields }, body.trim())
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Non-empty title
    pub fn title(&self) -> Option<&str> {
        self.get("title").filter(|t| !t.is_empty())
    }

    pub fn summary(&self) -> Option<&str> {
        self.get("summary")
    }

    pub fn date(&self) -> Option<&str> {
        self.get("date")
    }

    pub fn draft_source(&self) -> Option<&str> {
        self.get("draft_source")
    }

    /// Tags written as `[a, b]` or `a, b`
    pub fn tags(&self) -> Vec<String> {
        let Some(raw) = self.get("tags") else {
            return Vec::new();
        };
        let raw = raw.trim();
        let raw = raw
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .unwrap_or(raw);

        raw.split(',')
            .map(|tag| unquote(tag.trim()).trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Strip one pair of surrounding double quotes
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
