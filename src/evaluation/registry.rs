use crate::errors::AppResult;
use crate::evaluation::multiple_choice::MultipleChoiceStrategy;
use crate::evaluation::strategy::AnswerStrategy;
use crate::evaluation::subjective::SubjectiveStrategy;
use crate::evaluation::true_false::TrueFalseStrategy;
use crate::models::domain::QuizKind;

/// Resolves a quiz kind to its evaluation strategy. Constructed once at
/// startup, immutable afterwards, shared read-only across workers.
pub struct StrategyRegistry {
    multiple_choice: MultipleChoiceStrategy,
    subjective: SubjectiveStrategy,
    true_false: TrueFalseStrategy,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        StrategyRegistry {
            multiple_choice: MultipleChoiceStrategy,
            subjective: SubjectiveStrategy,
            true_false: TrueFalseStrategy,
        }
    }

    pub fn get(&self, kind: QuizKind) -> &dyn AnswerStrategy {
        match kind {
            QuizKind::MultipleChoice => &self.multiple_choice,
            QuizKind::Subjective => &self.subjective,
            QuizKind::TrueFalse => &self.true_false,
        }
    }

    /// Lookup by wire tag. Fails `UnknownQuizKind` for anything outside the
    /// closed set.
    pub fn get_by_tag(&self, tag: &str) -> AppResult<&dyn AnswerStrategy> {
        Ok(self.get(tag.parse::<QuizKind>()?))
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
