//! Tests for the code review use case

mod common;

use std::sync::Arc;

use common::MockLlmProvider;
use scanlab_core::Severity;
use scanlab_llm::domain::{CodeReviewReport, LlmError, Role};
use scanlab_llm::prompts::CODE_REVIEW_SYSTEM_PROMPT;
use scanlab_llm::ReviewCodeUseCase;

#[tokio::test]
async fn test_review_returns_demonstration_report() {
    let provider = Arc::new(MockLlmProvider::with_text_response(
        "1. HIGH: user input flows into eval",
    ));
    let use_case = ReviewCodeUseCase::new(provider.clone());

    let report = use_case.execute("eval(input)", "javascript").await.unwrap();

    assert_eq!(report, CodeReviewReport::demonstration());
    assert!(report.valid);
    assert_eq!(report.overall_risk, Severity::Medium);
    assert_eq!(report.issues.len(), 2);
    assert_eq!(report.issues[0].line, 15);
}

#[tokio::test]
async fn test_review_sends_system_and_user_prompt() {
    let provider = Arc::new(MockLlmProvider::with_text_response("ok"));
    let use_case = ReviewCodeUseCase::new(provider.clone());

    use_case
        .execute("print(user_input)", "python")
        .await
        .unwrap();

    let requests = provider.captured();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert_eq!(request.model.as_deref(), Some("test-model"));
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[0].content, CODE_REVIEW_SYSTEM_PROMPT);
    assert_eq!(request.messages[1].role, Role::User);
    assert!(request.messages[1].content.contains("following python code"));
    assert!(request.messages[1].content.contains("print(user_input)"));
}

#[tokio::test]
async fn test_review_report_ignores_model_output() {
    let first = ReviewCodeUseCase::new(Arc::new(MockLlmProvider::with_text_response("a")))
        .execute("x", "javascript")
        .await
        .unwrap();
    let second = ReviewCodeUseCase::new(Arc::new(MockLlmProvider::with_text_response(
        "something else entirely",
    )))
    .execute("y", "typescript")
    .await
    .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_provider_error_propagates_without_retry() {
    let provider =
        Arc::new(MockLlmProvider::new().with_error(LlmError::ServiceUnavailable("down".into())));
    let use_case = ReviewCodeUseCase::new(provider.clone());

    let err = use_case.execute("code", "javascript").await.unwrap_err();

    assert_eq!(err, LlmError::ServiceUnavailable("down".to_string()));
    assert_eq!(provider.captured().len(), 1);
}
