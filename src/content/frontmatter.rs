//! Front-matter parsing

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter data from a markdown page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, remaining_content). Content without a
    /// recognizable front-matter block yields empty metadata and the whole
    /// text as body; so does a block that fails to parse.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.trim_start();

        // YAML front-matter (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // JSON front-matter (;;; or {"key":)
        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        (FrontMatter::default(), content)
    }

    fn parse_yaml(content: &str) -> (Self, &str) {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        // No closing ---, treat as no front-matter
        let Some(end_pos) = rest.find("\n---") else {
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        // A --- block with no key: value lines is a markdown thematic
        // break, not front-matter
        if !has_yaml_structure(yaml_content) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    fn parse_json(content: &str) -> (Self, &str) {
        // JSON front-matter fenced by ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

                return match serde_json::from_str::<FrontMatter>(json_content) {
                    Ok(fm) => (fm, remaining),
                    Err(e) => {
                        tracing::warn!(
                            "Failed to parse JSON front-matter, treating as content: {}",
                            e
                        );
                        (FrontMatter::default(), content)
                    }
                };
            }
            return (FrontMatter::default(), content);
        }

        // Bare JSON object at the start: find the matching closing brace
        let mut depth = 0usize;
        let mut end_pos = 0usize;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        end_pos = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }

        if end_pos == 0 {
            return (FrontMatter::default(), content);
        }

        let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);
        match serde_json::from_str::<FrontMatter>(&content[..end_pos]) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse JSON front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }
}

/// Check whether a --- delimited block actually looks like YAML mappings.
/// Requires at least one `key: value` line with a simple identifier key;
/// URL schemes do not count.
fn has_yaml_structure(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let before_colon = &trimmed[..colon_pos];
        let is_valid_key = !before_colon.is_empty()
            && before_colon
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && before_colon != "http"
            && before_colon != "https"
            && before_colon != "ftp";
        if !is_valid_key {
            return false;
        }
        let after_colon = &trimmed[colon_pos + 1..];
        after_colon.is_empty() || after_colon.starts_with(' ')
    })
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%dT%H:%M:%S%.f%z",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
        // Try parsing date only
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Some(DateTime::from_naive_utc_and_offset(
                dt,
                *Local::now().offset(),
            ));
        }
    }

    // RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}
