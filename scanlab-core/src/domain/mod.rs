//! Domain types shared by all scanner pipelines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Finding severity
///
/// Variants are declared from most to least severe, so the derived ordering
/// puts `High` first and `min()` over a set of severities yields the worst one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Worst severity in the iterator, `None` when it is empty
    pub fn worst<I>(severities: I) -> Option<Severity>
    where
        I: IntoIterator<Item = Severity>,
    {
        severities.into_iter().min()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
