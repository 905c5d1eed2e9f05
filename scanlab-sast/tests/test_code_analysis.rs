//! Integration tests for pattern based code analysis

use scanlab_sast::{CodeRisk, CodeVulnerabilityType, GENERAL_SUGGESTIONS, analyze_source};

const VULNERABLE_SNIPPET: &str = r##"function render(user) {
  const greeting = "Hello " + user.name;
  document.getElementById("out").innerHTML = greeting;
  setTimeout("refresh()", 1000);
  console.log(user.token);
  if (window.debug) { debugger; }
  const filter = new RegExp("^" + user.query + "$");
  $("#list").html(user.bio);
}
"##;

#[test]
fn test_vulnerable_snippet_findings_and_lines() {
    let report = analyze_source(VULNERABLE_SNIPPET, "javascript");

    let summary: Vec<(CodeVulnerabilityType, usize)> = report
        .vulnerabilities
        .iter()
        .map(|v| (v.vulnerability_type, v.line))
        .collect();

    assert_eq!(
        summary,
        vec![
            (CodeVulnerabilityType::CrossSiteScripting, 3),
            (CodeVulnerabilityType::CommandInjection, 4),
            (CodeVulnerabilityType::InformationLeakage, 5),
            (CodeVulnerabilityType::DevelopmentArtifact, 6),
            (CodeVulnerabilityType::RegexInjection, 7),
            (CodeVulnerabilityType::CrossSiteScripting, 8),
        ]
    );
    assert_eq!(report.overall_risk, CodeRisk::High);
}

#[test]
fn test_vulnerable_snippet_gets_inner_html_example() {
    let report = analyze_source(VULNERABLE_SNIPPET, "javascript");
    let example = report.secure_code_example.unwrap();
    assert!(example.contains("element.textContent = sanitizedContent;"));
}

#[test]
fn test_suggestions_are_distinct_and_end_with_general_practices() {
    let report = analyze_source(VULNERABLE_SNIPPET, "javascript");

    let mut seen = std::collections::HashSet::new();
    assert!(report.suggestions.iter().all(|s| seen.insert(s.clone())));

    let tail = &report.suggestions[report.suggestions.len() - GENERAL_SUGGESTIONS.len()..];
    assert_eq!(tail, GENERAL_SUGGESTIONS);
}

#[test]
fn test_language_does_not_change_result() {
    let js = analyze_source(VULNERABLE_SNIPPET, "javascript");
    let py = analyze_source(VULNERABLE_SNIPPET, "python");
    assert_eq!(js, py);
}

#[test]
fn test_empty_input_is_safe() {
    let report = analyze_source("", "javascript");
    assert!(report.vulnerabilities.is_empty());
    assert_eq!(report.overall_risk, CodeRisk::Safe);
    assert!(report.secure_code_example.is_none());
}
