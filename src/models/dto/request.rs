use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{AnswerValue, QuizAnswerKey};

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]+$").expect("USERNAME_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 50),
        regex(
            path = *USERNAME_REGEX,
            message = "Username must be alphanumeric with underscores"
        )
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 100))]
    pub book_id: String,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub explanation: Option<String>,
    pub hint: Option<String>,

    // Carries the kind discriminator and the kind-specific answer key.
    #[serde(flatten)]
    pub answer: QuizAnswerKey,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub explanation: Option<String>,
    pub hint: Option<String>,

    #[serde(flatten)]
    pub answer: QuizAnswerKey,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvaluateAnswerRequest {
    #[serde(flatten)]
    pub answer: AnswerValue,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1))]
    pub quiz_id: String,

    #[serde(flatten)]
    pub answer: AnswerValue,

    /// Caller-supplied attempt number; computed from the stored attempt
    /// count when absent.
    pub attempt_number: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CorrectAnswerRequest {
    #[serde(flatten)]
    pub answer: AnswerValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizSearchParams {
    pub kind: Option<String>,
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_register_request() {
        let request = RegisterRequest {
            username: "reader_42".to_string(),
            email: "reader42@example.com".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email() {
        let request = RegisterRequest {
            username: "reader42".to_string(),
            email: "invalid-email".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_username_with_spaces_is_rejected() {
        let request = RegisterRequest {
            username: "reader 42".to_string(),
            email: "reader42@example.com".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_quiz_request_parses_tagged_payload() {
        let json = r#"{
            "book_id": "book-1",
            "title": "Capital of France",
            "type": "MULTIPLE_CHOICE",
            "options": ["Paris", "Rome", "Berlin"],
            "correct_index": 0
        }"#;

        let request: CreateQuizRequest = serde_json::from_str(json).expect("should parse");
        assert!(request.validate().is_ok());
        assert_eq!(
            request.answer,
            QuizAnswerKey::MultipleChoice {
                options: vec![
                    "Paris".to_string(),
                    "Rome".to_string(),
                    "Berlin".to_string()
                ],
                correct_index: 0,
            }
        );
    }

    #[test]
    fn test_create_quiz_request_rejects_unknown_kind_tag() {
        let json = r#"{
            "book_id": "book-1",
            "title": "Essay question",
            "type": "ESSAY",
            "prompt": "Discuss."
        }"#;

        assert!(serde_json::from_str::<CreateQuizRequest>(json).is_err());
    }

    #[test]
    fn test_submit_answer_request_parses_optional_attempt_number() {
        let json = r#"{
            "quiz_id": "quiz-1",
            "type": "TRUE_FALSE",
            "value": true,
            "attempt_number": 2
        }"#;

        let request: SubmitAnswerRequest = serde_json::from_str(json).expect("should parse");
        assert_eq!(request.attempt_number, Some(2));
        assert_eq!(request.answer, AnswerValue::Boolean { value: true });

        let json = r#"{
            "quiz_id": "quiz-1",
            "type": "SUBJECTIVE",
            "text": "Paris"
        }"#;

        let request: SubmitAnswerRequest = serde_json::from_str(json).expect("should parse");
        assert_eq!(request.attempt_number, None);
    }
}
