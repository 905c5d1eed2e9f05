//! Pattern scanning value objects

use scanlab_core::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category reported by a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeVulnerabilityType {
    #[serde(rename = "Command Injection")]
    CommandInjection,
    #[serde(rename = "Cross-Site Scripting (XSS)")]
    CrossSiteScripting,
    #[serde(rename = "User Experience")]
    UserExperience,
    #[serde(rename = "Information Leakage")]
    InformationLeakage,
    #[serde(rename = "Development Artifact")]
    DevelopmentArtifact,
    #[serde(rename = "Regular Expression Injection")]
    RegexInjection,
}

impl CodeVulnerabilityType {
    pub fn label(&self) -> &'static str {
        match self {
            CodeVulnerabilityType::CommandInjection => "Command Injection",
            CodeVulnerabilityType::CrossSiteScripting => "Cross-Site Scripting (XSS)",
            CodeVulnerabilityType::UserExperience => "User Experience",
            CodeVulnerabilityType::InformationLeakage => "Information Leakage",
            CodeVulnerabilityType::DevelopmentArtifact => "Development Artifact",
            CodeVulnerabilityType::RegexInjection => "Regular Expression Injection",
        }
    }
}

impl fmt::Display for CodeVulnerabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall risk of a source text. `Safe` only when nothing was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeRisk {
    High,
    Medium,
    Low,
    Safe,
}

impl CodeRisk {
    pub fn from_severities<I>(severities: I) -> Self
    where
        I: IntoIterator<Item = Severity>,
    {
        match Severity::worst(severities) {
            Some(Severity::High) => CodeRisk::High,
            Some(Severity::Medium) => CodeRisk::Medium,
            Some(Severity::Low) => CodeRisk::Low,
            None => CodeRisk::Safe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CodeRisk::High => "high",
            CodeRisk::Medium => "medium",
            CodeRisk::Low => "low",
            CodeRisk::Safe => "safe",
        }
    }
}

impl fmt::Display for CodeRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_from_severities() {
        assert_eq!(CodeRisk::from_severities([]), CodeRisk::Safe);
        assert_eq!(CodeRisk::from_severities([Severity::Low]), CodeRisk::Low);
        assert_eq!(
            CodeRisk::from_severities([Severity::Low, Severity::Medium]),
            CodeRisk::Medium
        );
        assert_eq!(
            CodeRisk::from_severities([Severity::Medium, Severity::High, Severity::Low]),
            CodeRisk::High
        );
    }

    #[test]
    fn test_labels_serialize_verbatim() {
        assert_eq!(
            serde_json::to_string(&CodeVulnerabilityType::CrossSiteScripting).unwrap(),
            "\"Cross-Site Scripting (XSS)\""
        );
        assert_eq!(serde_json::to_string(&CodeRisk::Safe).unwrap(), "\"safe\"");
    }
}
