use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Closed set of quiz kinds. Adding a kind means touching the answer key,
/// the submitted-value enum, the strategies and the registry together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum QuizKind {
    #[serde(rename = "MULTIPLE_CHOICE")]
    MultipleChoice,
    #[serde(rename = "SUBJECTIVE")]
    Subjective,
    #[serde(rename = "TRUE_FALSE")]
    TrueFalse,
}

impl QuizKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizKind::MultipleChoice => "MULTIPLE_CHOICE",
            QuizKind::Subjective => "SUBJECTIVE",
            QuizKind::TrueFalse => "TRUE_FALSE",
        }
    }
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MULTIPLE_CHOICE" => Ok(QuizKind::MultipleChoice),
            "SUBJECTIVE" => Ok(QuizKind::Subjective),
            "TRUE_FALSE" => Ok(QuizKind::TrueFalse),
            other => Err(AppError::UnknownQuizKind(other.to_string())),
        }
    }
}

/// Authoritative correct-answer data per quiz kind. The `type` tag is the
/// kind discriminator and travels with the serialized form.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum QuizAnswerKey {
    #[serde(rename = "MULTIPLE_CHOICE")]
    MultipleChoice {
        options: Vec<String>,
        correct_index: u32,
    },
    #[serde(rename = "SUBJECTIVE")]
    Subjective {
        possible_answers: Vec<String>,
        case_sensitive: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_words: Option<u32>,
    },
    #[serde(rename = "TRUE_FALSE")]
    TrueFalse { correct_answer: bool },
}

impl QuizAnswerKey {
    pub fn kind(&self) -> QuizKind {
        match self {
            QuizAnswerKey::MultipleChoice { .. } => QuizKind::MultipleChoice,
            QuizAnswerKey::Subjective { .. } => QuizKind::Subjective,
            QuizAnswerKey::TrueFalse { .. } => QuizKind::TrueFalse,
        }
    }

    /// Structural invariants, checked at creation and at update, before any
    /// persistence is attempted.
    pub fn validate(&self) -> AppResult<()> {
        match self {
            QuizAnswerKey::MultipleChoice {
                options,
                correct_index,
            } => {
                if options.is_empty() {
                    return Err(AppError::ValidationError(
                        "Multiple-choice quiz must have at least one option".to_string(),
                    ));
                }
                if (*correct_index as usize) >= options.len() {
                    return Err(AppError::ValidationError(format!(
                        "Correct option index {} is out of bounds for {} options",
                        correct_index,
                        options.len()
                    )));
                }
                Ok(())
            }
            QuizAnswerKey::Subjective {
                possible_answers, ..
            } => {
                if possible_answers.is_empty() {
                    return Err(AppError::ValidationError(
                        "Subjective quiz must have at least one accepted answer".to_string(),
                    ));
                }
                Ok(())
            }
            QuizAnswerKey::TrueFalse { .. } => Ok(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub book_id: String, // owning book, immutable after creation
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(flatten)]
    pub answer: QuizAnswerKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(
        book_id: &str,
        title: &str,
        explanation: Option<String>,
        hint: Option<String>,
        answer: QuizAnswerKey,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            book_id: book_id.to_string(),
            title: title.to_string(),
            explanation,
            hint,
            answer,
            created_at: Some(Utc::now()),
        }
    }

    pub fn kind(&self) -> QuizKind {
        self.answer.kind()
    }
}
