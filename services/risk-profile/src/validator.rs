//! Submission validation
//!
//! Two stages:
//! 1. `parse_submission` coerces raw key/value strings from the transport
//!    (form fields, JSON members) into a `ResponseSet`.
//! 2. `validate_responses` checks a `ResponseSet` against the questionnaire
//!    and returns only the answers that count toward the score.

use serde::{Deserialize, Serialize};
use types::errors::ScoringError;
use types::ids::QuestionId;
use types::questionnaire::Questionnaire;
use types::response::ResponseSet;

/// How unanswered questions are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Every question must be answered
    #[default]
    RequireAll,
    /// Score whatever is present; missing answers contribute nothing
    Partial,
}

/// How keys that are not questions of the questionnaire are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Ignore them
    #[default]
    Lenient,
    /// Reject the submission with `UnknownQuestionId`
    Strict,
}

/// Coerce raw key/value pairs into a response set.
///
/// Keys are parsed as question ids (`q3`, `Q3`, `3`). Blank values are
/// treated as unanswered. Non-integer values fail with
/// `InvalidResponseValue`; range checks happen in `validate_responses`.
pub fn parse_submission<I, K, V>(
    pairs: I,
    questionnaire: &Questionnaire,
    keys: KeyPolicy,
) -> Result<ResponseSet, ScoringError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut responses = ResponseSet::new();

    for (key, value) in pairs {
        let key = key.as_ref();
        let value = value.as_ref().trim();

        let question = match key.parse::<QuestionId>() {
            Ok(id) if questionnaire.contains(id) => id,
            _ => {
                if keys == KeyPolicy::Strict {
                    return Err(ScoringError::UnknownQuestionId {
                        key: key.to_string(),
                    });
                }
                tracing::debug!(key, "ignoring submission field that is not a question");
                continue;
            }
        };

        if value.is_empty() {
            continue;
        }

        let parsed = value
            .parse::<i64>()
            .map_err(|_| ScoringError::InvalidResponseValue {
                question: question.to_string(),
                value: value.to_string(),
                expected: expected_for(questionnaire, question),
            })?;

        if responses.insert(question, parsed).is_some() {
            return Err(ScoringError::DuplicateResponse { question });
        }
    }

    Ok(responses)
}

/// Check a response set and return the answers that count.
///
/// Checks, in order: unknown question ids (rejected under
/// `KeyPolicy::Strict`, dropped otherwise), values outside the question's
/// scale, an empty set, and completeness under
/// `CompletionPolicy::RequireAll`.
pub fn validate_responses(
    responses: &ResponseSet,
    questionnaire: &Questionnaire,
    completion: CompletionPolicy,
    keys: KeyPolicy,
) -> Result<ResponseSet, ScoringError> {
    let mut accepted = ResponseSet::new();

    for (question, value) in responses.iter() {
        let Some(asked) = questionnaire.get(question) else {
            if keys == KeyPolicy::Strict {
                return Err(ScoringError::UnknownQuestionId {
                    key: question.to_string(),
                });
            }
            continue;
        };

        if !asked.scale.contains(value) {
            return Err(ScoringError::InvalidResponseValue {
                question: question.to_string(),
                value: value.to_string(),
                expected: asked.scale.describe(),
            });
        }

        accepted.insert(question, value);
    }

    if accepted.is_empty() {
        return Err(ScoringError::EmptyResponseSet);
    }

    if completion == CompletionPolicy::RequireAll {
        let missing: Vec<QuestionId> = questionnaire
            .ids()
            .filter(|id| !accepted.contains(*id))
            .collect();
        if !missing.is_empty() {
            return Err(ScoringError::IncompleteResponseSet { missing });
        }
    }

    Ok(accepted)
}

fn expected_for(questionnaire: &Questionnaire, question: QuestionId) -> String {
    questionnaire
        .get(question)
        .map(|q| q.scale.describe())
        .unwrap_or_else(|| "an integer".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::questionnaire::{Question, ResponseScale};

    fn id(n: u16) -> QuestionId {
        QuestionId::new(n).unwrap()
    }

    fn questionnaire(n: u16) -> Questionnaire {
        Questionnaire::new(
            (1..=n)
                .map(|i| Question::new(id(i), format!("Question {i}")))
                .collect(),
        )
        .unwrap()
    }

    // ── parse_submission ──

    #[test]
    fn test_parse_accepts_key_forms() {
        let q = questionnaire(3);
        let set = parse_submission(
            [("q1", "2"), ("Q2", " 4 "), ("3", "5")],
            &q,
            KeyPolicy::Strict,
        )
        .unwrap();
        assert_eq!(set.get(id(1)), Some(2));
        assert_eq!(set.get(id(2)), Some(4));
        assert_eq!(set.get(id(3)), Some(5));
    }

    #[test]
    fn test_parse_lenient_ignores_foreign_keys() {
        let q = questionnaire(2);
        let set = parse_submission(
            [("q1", "3"), ("csrf_token", "abc"), ("q9", "1")],
            &q,
            KeyPolicy::Lenient,
        )
        .unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_strict_rejects_foreign_keys() {
        let q = questionnaire(2);
        let err = parse_submission([("q1", "3"), ("q9", "1")], &q, KeyPolicy::Strict).unwrap_err();
        assert_eq!(err, ScoringError::UnknownQuestionId { key: "q9".into() });

        let err = parse_submission([("submit", "go")], &q, KeyPolicy::Strict).unwrap_err();
        assert_eq!(err, ScoringError::UnknownQuestionId { key: "submit".into() });
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let q = questionnaire(2);
        for raw in ["three", "3.5", "1e2", "true"] {
            let err = parse_submission([("q1", raw)], &q, KeyPolicy::Lenient).unwrap_err();
            assert!(
                matches!(err, ScoringError::InvalidResponseValue { ref value, .. } if value == raw),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_keeps_negative_for_range_check() {
        let q = questionnaire(1);
        let set = parse_submission([("q1", "-2")], &q, KeyPolicy::Lenient).unwrap();
        assert_eq!(set.get(id(1)), Some(-2));
    }

    #[test]
    fn test_parse_blank_is_unanswered() {
        let q = questionnaire(2);
        let set = parse_submission([("q1", "4"), ("q2", "  ")], &q, KeyPolicy::Lenient).unwrap();
        assert!(!set.contains(id(2)));
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let q = questionnaire(2);
        let err = parse_submission([("q1", "4"), ("1", "2")], &q, KeyPolicy::Lenient).unwrap_err();
        assert_eq!(err, ScoringError::DuplicateResponse { question: id(1) });
    }

    // ── validate_responses ──

    #[test]
    fn test_validate_out_of_scale() {
        let q = questionnaire(2);
        for bad in [0, 6, -1] {
            let set: ResponseSet = [(id(1), 3), (id(2), bad)].into_iter().collect();
            let err = validate_responses(&set, &q, CompletionPolicy::Partial, KeyPolicy::Lenient)
                .unwrap_err();
            assert_eq!(
                err,
                ScoringError::InvalidResponseValue {
                    question: "q2".into(),
                    value: bad.to_string(),
                    expected: "an integer in 1..=5".into(),
                }
            );
        }
    }

    #[test]
    fn test_validate_empty() {
        let q = questionnaire(2);
        let err = validate_responses(
            &ResponseSet::new(),
            &q,
            CompletionPolicy::Partial,
            KeyPolicy::Lenient,
        )
        .unwrap_err();
        assert_eq!(err, ScoringError::EmptyResponseSet);
    }

    #[test]
    fn test_validate_only_unknown_is_empty() {
        let q = questionnaire(2);
        let set: ResponseSet = [(id(7), 3)].into_iter().collect();
        let err = validate_responses(&set, &q, CompletionPolicy::Partial, KeyPolicy::Lenient)
            .unwrap_err();
        assert_eq!(err, ScoringError::EmptyResponseSet);
    }

    #[test]
    fn test_validate_require_all_lists_missing() {
        let q = questionnaire(4);
        let set: ResponseSet = [(id(1), 3), (id(3), 3)].into_iter().collect();
        let err = validate_responses(&set, &q, CompletionPolicy::RequireAll, KeyPolicy::Lenient)
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::IncompleteResponseSet {
                missing: vec![id(2), id(4)],
            }
        );
    }

    #[test]
    fn test_validate_partial_accepts_subset() {
        let q = questionnaire(4);
        let set: ResponseSet = [(id(1), 3), (id(3), 2)].into_iter().collect();
        let accepted =
            validate_responses(&set, &q, CompletionPolicy::Partial, KeyPolicy::Lenient).unwrap();
        assert_eq!(accepted, set);
    }

    #[test]
    fn test_validate_strict_rejects_unknown_id() {
        let q = questionnaire(2);
        let set: ResponseSet = [(id(1), 3), (id(5), 3)].into_iter().collect();
        let err = validate_responses(&set, &q, CompletionPolicy::Partial, KeyPolicy::Strict)
            .unwrap_err();
        assert_eq!(err, ScoringError::UnknownQuestionId { key: "q5".into() });
    }

    #[test]
    fn test_validate_custom_scale() {
        let q = Questionnaire::new(vec![
            Question::new(id(1), "wide").with_scale(ResponseScale::new(0, 10)),
        ])
        .unwrap();
        let set: ResponseSet = [(id(1), 0)].into_iter().collect();
        assert!(validate_responses(&set, &q, CompletionPolicy::RequireAll, KeyPolicy::Strict).is_ok());
    }
}
