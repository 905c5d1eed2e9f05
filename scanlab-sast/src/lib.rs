//! Scanlab SAST - pattern based source code scanning
//!
//! Nine fixed regex probes flag common client-side JavaScript hazards
//! (`eval`, `innerHTML`, string timers, `document.write`, native popups,
//! console output, `debugger`, dynamic `RegExp`, jQuery `.html()`). Each probe
//! reports at most one finding, located at the first line that trips it.
//!
//! ```rust
//! use scanlab_sast::{CodeRisk, analyze_source};
//!
//! let report = analyze_source("const x = 1;\n\neval(userInput);", "javascript");
//! assert_eq!(report.overall_risk, CodeRisk::High);
//! assert_eq!(report.vulnerabilities[0].line, 3);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::{AnalyzeCodeUseCase, GENERAL_SUGGESTIONS};
pub use domain::{CodeAnalysisReport, CodeFinding, CodeRisk, CodeVulnerabilityType};
pub use infrastructure::probes::scan;

/// Analyze source text with the default probe table
pub fn analyze_source(code: &str, language: &str) -> CodeAnalysisReport {
    AnalyzeCodeUseCase::new().execute(code, language)
}
