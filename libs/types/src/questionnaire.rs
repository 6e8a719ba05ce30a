//! Quiz questions and their answer scales

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::ids::QuestionId;

/// Inclusive integer answer scale for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseScale {
    pub min: i64,
    pub max: i64,
}

impl ResponseScale {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Human-readable description used in validation messages
    pub fn describe(&self) -> String {
        format!("an integer in {}..={}", self.min, self.max)
    }
}

impl Default for ResponseScale {
    fn default() -> Self {
        Self::new(1, 5)
    }
}

/// A single quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub scale: ResponseScale,
}

impl Question {
    pub fn new(id: QuestionId, prompt: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            scale: ResponseScale::default(),
        }
    }

    pub fn with_scale(mut self, scale: ResponseScale) -> Self {
        self.scale = scale;
        self
    }
}

/// Ordered, immutable list of quiz questions
///
/// Ids always run 1..N in order, so `questions[i].id.ordinal() == i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Result<Self, ConfigError> {
        if questions.is_empty() {
            return Err(ConfigError::EmptyQuestionnaire);
        }

        for (idx, question) in questions.iter().enumerate() {
            let expected = idx as u16 + 1;
            if question.id.ordinal() != expected {
                return Err(ConfigError::NonContiguousQuestionIds {
                    expected,
                    found: question.id,
                });
            }
            let ResponseScale { min, max } = question.scale;
            if min < 0 || min > max {
                return Err(ConfigError::InvalidScale {
                    question: question.id,
                    min,
                    max,
                });
            }
        }

        // Scores are reported as u32; every reachable total must fit
        let max_total: i128 = questions.iter().map(|q| i128::from(q.scale.max)).sum();
        if max_total > i128::from(u32::MAX) {
            return Err(ConfigError::TotalOutOfRange { max_total });
        }

        Ok(Self { questions })
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(usize::from(id.ordinal()) - 1)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|q| q.id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Lowest total reachable with every question answered
    pub fn min_total(&self) -> i64 {
        self.questions.iter().map(|q| q.scale.min).sum()
    }

    /// Highest total reachable with every question answered.
    ///
    /// Never exceeds `u32::MAX`.
    pub fn max_total(&self) -> i64 {
        self.questions.iter().map(|q| q.scale.max).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: u16) -> Question {
        Question::new(QuestionId::new(n).unwrap(), format!("Question {n}"))
    }

    #[test]
    fn test_scale_contains_bounds() {
        let scale = ResponseScale::default();
        assert!(scale.contains(1));
        assert!(scale.contains(5));
        assert!(!scale.contains(0));
        assert!(!scale.contains(6));
        assert!(!scale.contains(-1));
    }

    #[test]
    fn test_questionnaire_totals() {
        let questionnaire = Questionnaire::new((1..=10).map(q).collect()).unwrap();
        assert_eq!(questionnaire.len(), 10);
        assert_eq!(questionnaire.min_total(), 10);
        assert_eq!(questionnaire.max_total(), 50);
    }

    #[test]
    fn test_questionnaire_lookup() {
        let questionnaire = Questionnaire::new((1..=3).map(q).collect()).unwrap();
        let id = QuestionId::new(2).unwrap();
        assert_eq!(questionnaire.get(id).unwrap().prompt, "Question 2");
        assert!(!questionnaire.contains(QuestionId::new(4).unwrap()));
    }

    #[test]
    fn test_questionnaire_rejects_empty() {
        assert_eq!(Questionnaire::new(vec![]), Err(ConfigError::EmptyQuestionnaire));
    }

    #[test]
    fn test_questionnaire_rejects_gap() {
        let err = Questionnaire::new(vec![q(1), q(3)]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonContiguousQuestionIds { expected: 2, .. }
        ));
    }

    #[test]
    fn test_questionnaire_rejects_inverted_scale() {
        let bad = q(1).with_scale(ResponseScale::new(5, 1));
        assert!(matches!(
            Questionnaire::new(vec![bad]),
            Err(ConfigError::InvalidScale { min: 5, max: 1, .. })
        ));
    }

    #[test]
    fn test_questionnaire_rejects_negative_scale() {
        let bad = q(1).with_scale(ResponseScale::new(-2, 2));
        assert!(Questionnaire::new(vec![bad]).is_err());
    }

    #[test]
    fn test_questionnaire_rejects_unrepresentable_total() {
        let half = i64::from(u32::MAX / 2);
        let wide = |n| q(n).with_scale(ResponseScale::new(0, half));

        let questionnaire = Questionnaire::new(vec![wide(1), wide(2)]).unwrap();
        assert_eq!(questionnaire.max_total(), 2 * half);

        assert!(matches!(
            Questionnaire::new(vec![wide(1), wide(2), wide(3)]),
            Err(ConfigError::TotalOutOfRange { .. })
        ));
        let huge = |n| q(n).with_scale(ResponseScale::new(0, i64::MAX));
        assert!(matches!(
            Questionnaire::new(vec![huge(1), huge(2)]),
            Err(ConfigError::TotalOutOfRange { .. })
        ));
    }
}
