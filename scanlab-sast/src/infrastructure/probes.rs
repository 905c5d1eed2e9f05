//! Static probe table
//!
//! Regexes are compiled once and shared across scans.

use once_cell::sync::Lazy;
use regex::Regex;
use scanlab_core::Severity;
use tracing::debug;

use crate::domain::entities::CodeFinding;
use crate::domain::value_objects::CodeVulnerabilityType;

/// How a probe picks the line it reports
#[derive(Debug, Clone, Copy)]
pub enum LineMatcher {
    /// First line containing the literal
    Contains(&'static str),
    /// First line matched by the probe's own regex
    Pattern,
}

/// One regex check over the whole source text
#[derive(Debug)]
pub struct Probe {
    pub id: &'static str,
    pub pattern: Regex,
    pub line_matcher: LineMatcher,
    pub severity: Severity,
    pub vulnerability_type: CodeVulnerabilityType,
    pub description: &'static str,
    pub recommendation: &'static str,
}

impl Probe {
    fn new(
        id: &'static str,
        pattern: &str,
        line_matcher: LineMatcher,
        severity: Severity,
        vulnerability_type: CodeVulnerabilityType,
        description: &'static str,
        recommendation: &'static str,
    ) -> Self {
        Self {
            id,
            pattern: Regex::new(pattern).expect("valid regex"),
            line_matcher,
            severity,
            vulnerability_type,
            description,
            recommendation,
        }
    }

    /// Finding for `code`, if the probe matches anywhere in it
    pub fn check(&self, code: &str) -> Option<CodeFinding> {
        if !self.pattern.is_match(code) {
            return None;
        }

        Some(CodeFinding {
            severity: self.severity,
            vulnerability_type: self.vulnerability_type,
            line: self.first_line(code),
            description: self.description.to_string(),
            recommendation: self.recommendation.to_string(),
        })
    }

    /// 1-based index of the first matching line, 0 when none does
    fn first_line(&self, code: &str) -> usize {
        code.split('\n')
            .position(|line| match self.line_matcher {
                LineMatcher::Contains(needle) => line.contains(needle),
                LineMatcher::Pattern => self.pattern.is_match(line),
            })
            .map(|index| index + 1)
            .unwrap_or(0)
    }
}

pub static PROBES: Lazy<Vec<Probe>> = Lazy::new(|| {
    vec![
        Probe::new(
            "eval",
            r"(?-u:\b)eval\s*\(",
            LineMatcher::Contains("eval"),
            Severity::High,
            CodeVulnerabilityType::CommandInjection,
            "Using eval() can execute arbitrary JavaScript code and is extremely dangerous",
            "Avoid using eval(). Use safer alternatives like JSON.parse() for JSON data.",
        ),
        Probe::new(
            "inner-html",
            r"\.innerHTML\s*=",
            LineMatcher::Contains("innerHTML"),
            Severity::High,
            CodeVulnerabilityType::CrossSiteScripting,
            "Using innerHTML can lead to XSS vulnerabilities",
            "Use textContent or createElement instead of innerHTML",
        ),
        Probe::new(
            "string-timer",
            r#"set(?:Timeout|Interval)\s*\(\s*["']"#,
            LineMatcher::Pattern,
            Severity::High,
            CodeVulnerabilityType::CommandInjection,
            "Using setTimeout/setInterval with string arguments is similar to eval() and poses security risks",
            "Use functions instead of strings with setTimeout/setInterval",
        ),
        Probe::new(
            "document-write",
            r"document\.write\s*\(",
            LineMatcher::Contains("document.write"),
            Severity::Medium,
            CodeVulnerabilityType::CrossSiteScripting,
            "document.write can lead to XSS vulnerabilities and is bad for performance",
            "Use DOM manipulation methods instead of document.write",
        ),
        Probe::new(
            "native-popup",
            r"(?-u:\b)(alert|confirm|prompt)\s*\(",
            LineMatcher::Pattern,
            Severity::Low,
            CodeVulnerabilityType::UserExperience,
            "Using alert/confirm/prompt is bad for user experience and can expose sensitive information",
            "Use custom modal dialogs instead of browser native popups",
        ),
        Probe::new(
            "console-output",
            r"console\.(log|debug|info|warn|error)\s*\(",
            LineMatcher::Pattern,
            Severity::Low,
            CodeVulnerabilityType::InformationLeakage,
            "Console logs may expose sensitive information in production",
            "Remove console logs or use proper logging service in production",
        ),
        Probe::new(
            "debugger",
            r"(?-u:\b)debugger(?-u:\b)",
            LineMatcher::Contains("debugger"),
            Severity::Medium,
            CodeVulnerabilityType::DevelopmentArtifact,
            "Debugger statements should not be present in production code",
            "Remove all debugger statements before deployment",
        ),
        Probe::new(
            "dynamic-regexp",
            r"new RegExp\(.*\+.*\)",
            LineMatcher::Pattern,
            Severity::High,
            CodeVulnerabilityType::RegexInjection,
            "Dynamic regular expressions can lead to ReDoS attacks",
            "Use static regular expressions or validate dynamic parts carefully",
        ),
        Probe::new(
            "jquery-html",
            r"\$\(.*\)\.html\(",
            LineMatcher::Pattern,
            Severity::High,
            CodeVulnerabilityType::CrossSiteScripting,
            "Using jQuery .html() with untrusted content can lead to XSS",
            "Use .text() instead of .html() or sanitize content properly",
        ),
    ]
});

/// Run every probe in table order
pub fn scan(code: &str) -> Vec<CodeFinding> {
    PROBES
        .iter()
        .filter_map(|probe| {
            let finding = probe.check(code)?;
            debug!(probe = probe.id, line = finding.line, "Probe matched");
            Some(finding)
        })
        .collect()
}
