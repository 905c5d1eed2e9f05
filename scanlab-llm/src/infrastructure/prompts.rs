//! Prompt templates for code review

pub const CODE_REVIEW_SYSTEM_PROMPT: &str = "You are a security-focused code analysis assistant. Analyze code for security issues and provide detailed, actionable feedback.";

pub const CODE_REVIEW_PROMPT: &str = r#"Analyze the following {language} code for security vulnerabilities, code quality issues, and potential bugs.
Focus on:
1. Security vulnerabilities (XSS, SQL injection, etc.)
2. Input validation issues
3. Authentication/Authorization concerns
4. Data exposure risks
5. Code quality and best practices
6. Performance considerations

Code to analyze:
{code}

Provide a detailed analysis including:
- Severity level for each issue (high/medium/low)
- Description of each vulnerability or issue
- Location in code (if applicable)
- Recommendations for fixing
- Secure code examples where relevant
- General best practices
"#;

/// Fill the review template. `{code}` is substituted last so placeholders
/// inside the submitted code stay untouched.
pub fn build_review_prompt(code: &str, language: &str) -> String {
    CODE_REVIEW_PROMPT
        .replace("{language}", language)
        .replace("{code}", code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_prompt_substitution() {
        let prompt = build_review_prompt("eval(x)", "javascript");
        assert!(prompt.starts_with("Analyze the following javascript code"));
        assert!(prompt.contains("Code to analyze:\neval(x)\n"));
        assert!(!prompt.contains("{code}"));
    }

    #[test]
    fn test_language_placeholder_in_code_is_preserved() {
        let prompt = build_review_prompt("const t = '{language}';", "python");
        assert!(prompt.contains("const t = '{language}';"));
    }
}
