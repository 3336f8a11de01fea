use serde::{Deserialize, Serialize};

/// One legislator as extracted from a roster list entry.
///
/// `name` is the only field required for a record to make it into the output;
/// everything else is best-effort. Absent optional fields are omitted from
/// the serialized JSON rather than rendered as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legislator {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Legislator {
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            title: None,
            position: None,
            party: None,
            address: None,
            phone: None,
            email: None,
            url: None,
        }
    }

    /// A record is usable only if it carries a non-blank name.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Final outcome of one scrape run. "Nothing matched" is a distinct variant
/// instead of an empty success, so the embedding process can pick its own
/// exit-code or alerting policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { count: usize },
    NoMatches,
    FetchFailed { reason: String },
    WriteFailed { reason: String },
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Completed { .. } => 0,
            RunOutcome::NoMatches
            | RunOutcome::FetchFailed { .. }
            | RunOutcome::WriteFailed { .. } => 1,
        }
    }
}
