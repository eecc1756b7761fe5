use crate::models::domain::{Quiz, QuizAnswerKey, User};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn multiple_choice_quiz(book_id: &str) -> Quiz {
        Quiz::new(
            book_id,
            "Capital of France",
            None,
            None,
            QuizAnswerKey::MultipleChoice {
                options: vec![
                    "Paris".to_string(),
                    "Rome".to_string(),
                    "Berlin".to_string(),
                ],
                correct_index: 0,
            },
        )
    }

    pub fn subjective_quiz(book_id: &str) -> Quiz {
        Quiz::new(
            book_id,
            "Name the capital of France",
            Some("Paris has been the capital since 987".to_string()),
            None,
            QuizAnswerKey::Subjective {
                possible_answers: vec!["Paris".to_string(), "paris ".to_string()],
                case_sensitive: false,
                max_words: Some(2),
            },
        )
    }

    pub fn true_false_quiz(book_id: &str) -> Quiz {
        Quiz::new(
            book_id,
            "Paris is the capital of France",
            None,
            None,
            QuizAnswerKey::TrueFalse {
                correct_answer: true,
            },
        )
    }

    pub fn test_user(username: &str) -> User {
        User::new(username, &format!("{}@example.com", username))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuizKind;

    #[test]
    fn fixtures_cover_all_three_kinds() {
        assert_eq!(multiple_choice_quiz("b").kind(), QuizKind::MultipleChoice);
        assert_eq!(subjective_quiz("b").kind(), QuizKind::Subjective);
        assert_eq!(true_false_quiz("b").kind(), QuizKind::TrueFalse);
    }
}
