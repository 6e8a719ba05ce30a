use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use types::band::RiskBand;
use types::questionnaire::Question;
use types::topic::Topic;

/// JSON quiz submission: `{"q1": 3, "q2": "4", ...}`
///
/// Members are kept in document order and repeated keys are preserved,
/// so a question answered twice reaches the engine as two answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizSubmission(pub Vec<(String, Value)>);

impl QuizSubmission {
    /// Flatten JSON members into the raw key/value form the engine parses.
    ///
    /// Strings pass through; numbers keep their JSON spelling, so `3.5`
    /// or `3.0` fail integer parsing downstream. Other JSON types are
    /// rendered as JSON text and are rejected the same way.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
            .into_iter()
            .map(|(key, value)| {
                let raw = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, raw)
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for QuizSubmission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MembersVisitor;

        impl<'de> Visitor<'de> for MembersVisitor {
            type Value = QuizSubmission;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object of question answers")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    members.push((key, value));
                }
                Ok(QuizSubmission(members))
            }
        }

        deserializer.deserialize_map(MembersVisitor)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse<'a> {
    pub questions: &'a [Question],
    pub min_total: i64,
    pub max_total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BandsResponse<'a> {
    pub bands: &'a [RiskBand],
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse<'a> {
    pub topics: Vec<&'a Topic>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
