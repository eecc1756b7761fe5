use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz::QuizKind;

/// A submitted answer value. The `type` tag travels with the payload so a
/// shape mismatch is an explicit precondition failure, never a runtime cast.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum AnswerValue {
    #[serde(rename = "MULTIPLE_CHOICE")]
    Selection { selected_index: u32 },
    #[serde(rename = "SUBJECTIVE")]
    Text { text: String },
    #[serde(rename = "TRUE_FALSE")]
    Boolean { value: bool },
}

impl AnswerValue {
    pub fn kind(&self) -> QuizKind {
        match self {
            AnswerValue::Selection { .. } => QuizKind::MultipleChoice,
            AnswerValue::Text { .. } => QuizKind::Subjective,
            AnswerValue::Boolean { .. } => QuizKind::TrueFalse,
        }
    }
}

/// One recorded attempt. Immutable once stored; the correction path replaces
/// the submitted value but never the attempt number.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserAnswer {
    pub id: String,
    pub user_id: String,
    pub quiz_id: String,
    #[serde(flatten)]
    pub submitted: AnswerValue,
    pub attempt_number: u32, // sequential per (user, quiz), starting at 1
    pub is_correct: bool,    // computed at submission time
    pub submitted_at: DateTime<Utc>,
}

impl UserAnswer {
    pub fn new(
        user_id: &str,
        quiz_id: &str,
        submitted: AnswerValue,
        attempt_number: u32,
        is_correct: bool,
    ) -> Self {
        UserAnswer {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            quiz_id: quiz_id.to_string(),
            submitted,
            attempt_number,
            is_correct,
            submitted_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> QuizKind {
        self.submitted.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_answer(attempt_number: u32, is_correct: bool) -> UserAnswer {
        UserAnswer::new(
            "user-1",
            "quiz-1",
            AnswerValue::Selection { selected_index: 0 },
            attempt_number,
            is_correct,
        )
    }

    #[test]
    fn user_answer_round_trip_preserves_attempt_fields() {
        let answer = make_answer(3, true);

        let json = serde_json::to_string(&answer).expect("answer should serialize");
        let parsed: UserAnswer = serde_json::from_str(&json).expect("answer should deserialize");

        assert_eq!(parsed.attempt_number, 3);
        assert!(parsed.is_correct);
        assert_eq!(parsed.submitted, AnswerValue::Selection { selected_index: 0 });
    }

    #[test]
    fn answer_value_tag_selects_kind() {
        assert_eq!(
            AnswerValue::Selection { selected_index: 1 }.kind(),
            QuizKind::MultipleChoice
        );
        assert_eq!(
            AnswerValue::Text {
                text: "Paris".to_string()
            }
            .kind(),
            QuizKind::Subjective
        );
        assert_eq!(
            AnswerValue::Boolean { value: false }.kind(),
            QuizKind::TrueFalse
        );
    }

    #[test]
    fn answer_value_rejects_mismatched_payload() {
        // A boolean payload under the multiple-choice tag must not parse.
        let mismatched = r#"{"type":"MULTIPLE_CHOICE","value":true}"#;
        assert!(serde_json::from_str::<AnswerValue>(mismatched).is_err());

        let unknown_tag = r#"{"type":"ESSAY","text":"anything"}"#;
        assert!(serde_json::from_str::<AnswerValue>(unknown_tag).is_err());
    }

    #[test]
    fn user_answer_serializes_flat_with_value_tag() {
        let answer = UserAnswer::new(
            "user-1",
            "quiz-1",
            AnswerValue::Text {
                text: "Paris".to_string(),
            },
            1,
            true,
        );

        let json = serde_json::to_value(&answer).expect("answer should serialize");
        assert_eq!(json["type"], "SUBJECTIVE");
        assert_eq!(json["text"], "Paris");
        assert_eq!(json["attempt_number"], 1);
    }
}
