use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod akleg;

/// A single element test: tag name plus an optional required class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementMatch {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl ElementMatch {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: None,
        }
    }

    pub fn with_class(tag: &str, class: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: Some(class.to_string()),
        }
    }
}

/// The primary selector as data: items are either direct children of a
/// matching parent (`ul.people-list > li`) or any matching element on the
/// page (`div.legislator`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ElementMatch>,
    pub item: ElementMatch,
}

impl FragmentSelector {
    /// Human-readable CSS-like rendering, for logs only.
    pub fn describe(&self) -> String {
        let item = describe_match(&self.item);
        match &self.parent {
            Some(parent) => format!("{} > {item}", describe_match(parent)),
            None => item,
        }
    }
}

fn describe_match(m: &ElementMatch) -> String {
    match &m.class {
        Some(class) => format!("{}.{class}", m.tag),
        None => m.tag.clone(),
    }
}

/// Everything site-specific about one roster page, so the driver itself
/// stays target-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeTarget {
    pub name: String,
    pub url: String,
    pub user_agent: String,
    pub timeout_ms: u64,
    pub list: FragmentSelector,
    /// Fixed title literal for every record from this target.
    pub title: String,
    /// Container class holding the member photo; its img alt text is the
    /// name fallback.
    pub photo_holder_class: String,
    /// Container class holding the free-text description line.
    pub description_class: String,
    /// Alternative selectors probed when the primary selector matches nothing.
    pub probes: Vec<FragmentSelector>,
    pub output_path: String,
}

impl ScrapeTarget {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read target file: {e}"))?;
        let target: ScrapeTarget = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse target file: {e}"))?;
        Ok(target)
    }
}
