use crate::errors::{AppError, AppResult};
use crate::evaluation::strategy::AnswerStrategy;
use crate::models::domain::{AnswerValue, QuizAnswerKey, QuizKind};

pub struct SubjectiveStrategy;

struct SubjectiveKey<'a> {
    possible_answers: &'a [String],
    case_sensitive: bool,
    max_words: Option<u32>,
}

fn expect_key(key: &QuizAnswerKey) -> AppResult<SubjectiveKey<'_>> {
    match key {
        QuizAnswerKey::Subjective {
            possible_answers,
            case_sensitive,
            max_words,
        } => Ok(SubjectiveKey {
            possible_answers,
            case_sensitive: *case_sensitive,
            max_words: *max_words,
        }),
        other => Err(AppError::InvalidAnswerType(format!(
            "Subjective strategy received a {} answer key",
            other.kind()
        ))),
    }
}

fn expect_text(submitted: &AnswerValue) -> AppResult<&str> {
    match submitted {
        AnswerValue::Text { text } => Ok(text),
        other => Err(AppError::InvalidAnswerType(format!(
            "Expected a free-text answer, got a {} answer",
            other.kind()
        ))),
    }
}

fn normalize(text: &str, case_sensitive: bool) -> String {
    let trimmed = text.trim();
    if case_sensitive {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

impl AnswerStrategy for SubjectiveStrategy {
    fn kind(&self) -> QuizKind {
        QuizKind::Subjective
    }

    /// Non-blank after trimming, and within the word limit when one is
    /// configured. Advisory: the result does not gate `is_correct`.
    fn validate(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<bool> {
        let key = expect_key(key)?;
        let trimmed = expect_text(submitted)?.trim();

        if trimmed.is_empty() {
            return Ok(false);
        }

        if let Some(max_words) = key.max_words {
            let word_count = trimmed.split_whitespace().count();
            if word_count > max_words as usize {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn is_correct(&self, key: &QuizAnswerKey, submitted: &AnswerValue) -> AppResult<bool> {
        let key = expect_key(key)?;
        let submitted = normalize(expect_text(submitted)?, key.case_sensitive);

        // Correct when it matches any accepted answer after normalization.
        Ok(key
            .possible_answers
            .iter()
            .any(|candidate| normalize(candidate, key.case_sensitive) == submitted))
    }

    fn feedback(
        &self,
        key: &QuizAnswerKey,
        _submitted: &AnswerValue,
        is_correct: bool,
    ) -> AppResult<String> {
        if is_correct {
            return Ok("Correct!".to_string());
        }

        let key = expect_key(key)?;
        let revealed = key
            .possible_answers
            .first()
            .map(|answer| answer.trim())
            .unwrap_or_default();
        Ok(format!("Incorrect. An accepted answer is \"{}\".", revealed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(possible_answers: &[&str], case_sensitive: bool, max_words: Option<u32>) -> QuizAnswerKey {
        QuizAnswerKey::Subjective {
            possible_answers: possible_answers.iter().map(|s| s.to_string()).collect(),
            case_sensitive,
            max_words,
        }
    }

    fn text(value: &str) -> AnswerValue {
        AnswerValue::Text {
            text: value.to_string(),
        }
    }

    #[test]
    fn case_insensitive_match_ignores_whitespace_and_case() {
        let strategy = SubjectiveStrategy;
        let key = key(&["Paris", "paris "], false, None);

        let eval = strategy.evaluate(&key, &text("  PARIS  ")).unwrap();
        assert!(eval.valid);
        assert!(eval.is_correct);
        assert_eq!(eval.score, 1.0);
        assert_eq!(eval.feedback, "Correct!");
    }

    #[test]
    fn case_sensitive_match_compares_trimmed_exactly() {
        let strategy = SubjectiveStrategy;
        let key = key(&["Paris"], true, None);

        assert!(strategy.is_correct(&key, &text("  Paris ")).unwrap());
        assert!(!strategy.is_correct(&key, &text("paris")).unwrap());
    }

    #[test]
    fn any_accepted_answer_matches() {
        let strategy = SubjectiveStrategy;
        let key = key(&["The Hobbit", "Hobbit"], false, None);

        assert!(strategy.is_correct(&key, &text("hobbit")).unwrap());
        assert!(strategy.is_correct(&key, &text("the hobbit")).unwrap());
        assert!(!strategy.is_correct(&key, &text("Bilbo")).unwrap());
    }

    #[test]
    fn word_count_limit_fails_validate_independently_of_correctness() {
        let strategy = SubjectiveStrategy;
        let key = key(&["The capital city"], false, Some(2));
        let submitted = text("The capital city");

        // Three words exceed the limit, yet the text still matches the key.
        assert!(!strategy.validate(&key, &submitted).unwrap());
        assert!(strategy.is_correct(&key, &submitted).unwrap());

        let eval = strategy.evaluate(&key, &submitted).unwrap();
        assert!(!eval.valid);
        assert!(eval.is_correct);
        assert_eq!(eval.score, 1.0);
    }

    #[test]
    fn blank_submission_fails_validate() {
        let strategy = SubjectiveStrategy;
        let key = key(&["Paris"], false, None);

        assert!(!strategy.validate(&key, &text("   ")).unwrap());
        assert!(!strategy.validate(&key, &text("")).unwrap());
    }

    #[test]
    fn word_count_uses_trimmed_whitespace_delimited_words() {
        let strategy = SubjectiveStrategy;
        let key = key(&["x"], false, Some(2));

        assert!(strategy.validate(&key, &text("  one two  ")).unwrap());
        assert!(!strategy.validate(&key, &text("one two three")).unwrap());
    }

    #[test]
    fn incorrect_feedback_reveals_an_accepted_answer() {
        let strategy = SubjectiveStrategy;
        let key = key(&["Paris", "City of Light"], false, None);

        let feedback = strategy.feedback(&key, &text("Rome"), false).unwrap();
        assert_eq!(feedback, "Incorrect. An accepted answer is \"Paris\".");
    }

    #[test]
    fn mismatched_submission_shape_is_rejected() {
        let strategy = SubjectiveStrategy;
        let key = key(&["Paris"], false, None);
        let submitted = AnswerValue::Selection { selected_index: 0 };

        assert!(matches!(
            strategy.is_correct(&key, &submitted),
            Err(AppError::InvalidAnswerType(_))
        ));
    }
}
