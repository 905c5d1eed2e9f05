//! Pattern scanning use cases

use tracing::{info, instrument};

use crate::domain::entities::{CodeAnalysisReport, CodeFinding};
use crate::domain::value_objects::CodeRisk;
use crate::infrastructure::probes::scan;
use crate::infrastructure::secure_examples::secure_example_for;

/// Practices appended to every suggestion list
pub const GENERAL_SUGGESTIONS: [&str; 6] = [
    "Regularly update dependencies to patch security vulnerabilities",
    "Implement proper input validation and sanitization",
    "Use security headers and enable HTTPS",
    "Implement Content Security Policy (CSP)",
    "Use HTTPS-only cookies with appropriate flags",
    "Implement proper error handling without exposing sensitive details",
];

/// Use case for analyzing one source text
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeCodeUseCase;

impl AnalyzeCodeUseCase {
    pub fn new() -> Self {
        Self
    }

    /// `language` is recorded for tracing only; the probes are the same for all inputs
    #[instrument(skip(self, code), fields(code_len = code.len()))]
    pub fn execute(&self, code: &str, language: &str) -> CodeAnalysisReport {
        let vulnerabilities = scan(code);
        let overall_risk = CodeRisk::from_severities(vulnerabilities.iter().map(|v| v.severity));

        let secure_code_example = if vulnerabilities.is_empty() {
            None
        } else {
            secure_example_for(code).map(str::to_string)
        };

        info!(
            finding_count = vulnerabilities.len(),
            overall_risk = %overall_risk,
            "Code analysis completed"
        );

        CodeAnalysisReport {
            suggestions: suggestions_for(&vulnerabilities),
            vulnerabilities,
            overall_risk,
            secure_code_example,
        }
    }
}

/// Distinct recommendations in finding order, then the general practices
fn suggestions_for(findings: &[CodeFinding]) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();
    let candidates = findings
        .iter()
        .map(|f| f.recommendation.as_str())
        .filter(|r| !r.is_empty())
        .chain(GENERAL_SUGGESTIONS);

    for suggestion in candidates {
        if !suggestions.iter().any(|s| s == suggestion) {
            suggestions.push(suggestion.to_string());
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanlab_core::Severity;

    #[test]
    fn test_eval_on_third_line() {
        let report = AnalyzeCodeUseCase::new().execute(
            "const a = 1;\nconst b = 2;\neval(userInput);",
            "javascript",
        );

        assert_eq!(report.vulnerabilities.len(), 1);
        let finding = &report.vulnerabilities[0];
        assert_eq!(finding.severity, Severity::High);
        assert_eq!(finding.vulnerability_type.label(), "Command Injection");
        assert_eq!(finding.line, 3);
        assert_eq!(report.overall_risk, CodeRisk::High);
        assert!(
            report
                .secure_code_example
                .as_deref()
                .is_some_and(|e| e.starts_with("// Instead of eval"))
        );
    }

    #[test]
    fn test_clean_code_is_safe() {
        let report = AnalyzeCodeUseCase::new().execute("let total = a + b;", "javascript");

        assert!(report.vulnerabilities.is_empty());
        assert_eq!(report.overall_risk, CodeRisk::Safe);
        assert_eq!(report.secure_code_example, None);
        assert_eq!(report.suggestions, GENERAL_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_example_requires_a_finding() {
        // contains "innerHTML" but never assigns it, so no probe fires
        let report = AnalyzeCodeUseCase::new().execute("const html = el.innerHTML;", "javascript");
        assert!(report.vulnerabilities.is_empty());
        assert_eq!(report.secure_code_example, None);
    }

    #[test]
    fn test_example_can_come_from_unflagged_construct() {
        let report = AnalyzeCodeUseCase::new()
            .execute("console.log(x);\nconst html = el.innerHTML;", "javascript");
        assert_eq!(report.overall_risk, CodeRisk::Low);
        assert!(
            report
                .secure_code_example
                .as_deref()
                .is_some_and(|e| e.starts_with("// Instead of innerHTML"))
        );
    }

    #[test]
    fn test_suggestions_lead_with_recommendations() {
        let report = AnalyzeCodeUseCase::new().execute("debugger;\nalert('x');", "javascript");

        assert_eq!(report.overall_risk, CodeRisk::Medium);
        assert_eq!(report.suggestions.len(), 8);
        assert_eq!(
            report.suggestions[0],
            "Use custom modal dialogs instead of browser native popups"
        );
        assert_eq!(
            report.suggestions[1],
            "Remove all debugger statements before deployment"
        );
        assert_eq!(report.suggestions[2], GENERAL_SUGGESTIONS[0]);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = AnalyzeCodeUseCase::new().execute("document.write(x);", "javascript");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["overallRisk"], "medium");
        assert_eq!(json["vulnerabilities"][0]["type"], "Cross-Site Scripting (XSS)");
        assert_eq!(json["vulnerabilities"][0]["line"], 1);
        assert!(json["secureCodeExample"].is_string());
    }
}
