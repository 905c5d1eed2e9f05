//! Canned secure-code snippets

/// Trigger over the raw source text
type Trigger = fn(&str) -> bool;

const EVAL_EXAMPLE: &str = r#"// Instead of eval, use safer alternatives:
const jsonData = JSON.parse(jsonString);

// For dynamic property access:
const obj = {
  prop1: 'value1',
  prop2: 'value2'
};
const prop = 'prop1';
const value = obj[prop]; // Safe way to access properties dynamically"#;

const INNER_HTML_EXAMPLE: &str = r#"// Instead of innerHTML, use safer alternatives:
// 1. For text content:
element.textContent = sanitizedContent;

// 2. For creating elements:
const newElement = document.createElement('div');
newElement.textContent = sanitizedContent;
parentElement.appendChild(newElement);"#;

const TIMER_EXAMPLE: &str = r#"// Instead of setTimeout with string:
// Bad:
setTimeout("doSomething()", 1000);

// Good:
setTimeout(() => {
  doSomething();
}, 1000);"#;

const DOCUMENT_WRITE_EXAMPLE: &str = r#"// Instead of document.write, use modern DOM manipulation:
// Bad:
document.write('<h1>Hello</h1>');

// Good:
const heading = document.createElement('h1');
heading.textContent = 'Hello';
document.body.appendChild(heading);"#;

const REGEXP_EXAMPLE: &str = r#"// Instead of dynamic RegExp, use static patterns:
// Bad:
const userInput = 'hello';
const regex = new RegExp(userInput + '.*');

// Good:
const regex = /^[a-zA-Z]+.*$/;
// Or if dynamic is necessary, validate the pattern:
if (/^[a-zA-Z]+$/.test(userInput)) {
  const regex = new RegExp(userInput + '.*');
}"#;

/// Snippets in priority order
const SECURE_EXAMPLES: [(Trigger, &str); 5] = [
    (|code: &str| code.contains("eval("), EVAL_EXAMPLE),
    (|code: &str| code.contains("innerHTML"), INNER_HTML_EXAMPLE),
    (
        |code: &str| code.contains("setTimeout") && code.contains('"'),
        TIMER_EXAMPLE,
    ),
    (|code: &str| code.contains("document.write"), DOCUMENT_WRITE_EXAMPLE),
    (
        |code: &str| code.contains("RegExp(") && code.contains('+'),
        REGEXP_EXAMPLE,
    ),
];

/// First snippet whose trigger matches `code`.
///
/// Triggers look at the raw text, not at which probes fired, so a snippet can
/// be chosen for a construct that produced no finding. Callers only ask when
/// there is at least one finding.
pub fn secure_example_for(code: &str) -> Option<&'static str> {
    SECURE_EXAMPLES
        .iter()
        .find(|(trigger, _)| trigger(code))
        .map(|(_, example)| *example)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_takes_priority() {
        let example = secure_example_for("el.innerHTML = x; eval(x);").unwrap();
        assert!(example.starts_with("// Instead of eval"));
    }

    #[test]
    fn test_timer_needs_double_quote() {
        assert!(secure_example_for("setTimeout('tick()', 10);").is_none());
        let example = secure_example_for("setTimeout(\"tick()\", 10);").unwrap();
        assert!(example.starts_with("// Instead of setTimeout"));
    }

    #[test]
    fn test_regexp_needs_concatenation() {
        assert!(secure_example_for("new RegExp(pattern)").is_none());
        assert!(secure_example_for("new RegExp(a + b)").is_some());
    }

    #[test]
    fn test_unrelated_code_has_no_example() {
        assert!(secure_example_for("console.log('hi');").is_none());
    }
}
