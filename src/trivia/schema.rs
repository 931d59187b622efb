use crate::{error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use entity::question::Difficulty;

/// Number of answer choices every question carries.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    questions: Vec<TriviaQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Free text in, questions with difficulty and category out.
    Detailed,
    /// Catalog fields in, question/options/answer only.
    Basic,
}

/// The JSON document the model is asked to produce. The prompt's FORMAT block
/// is rendered from the same types [`TriviaSchema::parse`] reads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaSchema {
    variant: Variant,
    question_count: usize,
}

impl TriviaSchema {
    pub const DETAILED: Self = Self {
        variant: Variant::Detailed,
        question_count: 5,
    };

    pub const BASIC: Self = Self {
        variant: Variant::Basic,
        question_count: 2,
    };

    pub const fn with_question_count(mut self, question_count: usize) -> Self {
        self.question_count = question_count;
        self
    }

    #[inline]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub const fn question_count(&self) -> usize {
        self.question_count
    }

    #[inline]
    pub fn is_detailed(&self) -> bool {
        self.variant == Variant::Detailed
    }

    pub fn example(&self) -> String {
        let detailed = self.is_detailed();

        let envelope = Envelope {
            source: detailed.then(|| "Short description of the source content".to_owned()),
            questions: vec![TriviaQuestion {
                question: "Clear, specific question text".to_owned(),
                options: (1..=OPTION_COUNT).map(|i| format!("Option {i}")).collect(),
                answer: "Correct option text".to_owned(),
                difficulty: detailed.then_some(Difficulty::Easy),
                category: detailed.then(|| "Category name".to_owned()),
            }],
        };

        let mut value = serde_json::to_value(&envelope).expect("failed to serialize example");

        if detailed {
            let labels: Vec<_> = Difficulty::ALL.iter().map(Difficulty::as_str).collect();
            value["questions"][0]["difficulty"] = Value::String(labels.join("|"));
        }

        serde_json::to_string_pretty(&value).expect("failed to serialize example")
    }

    /// Reads the model's answer. Tolerates a surrounding Markdown code fence.
    pub fn parse(&self, output: &str) -> Result<Vec<TriviaQuestion>> {
        let body = strip_code_fence(output.trim());

        match serde_json::from_str::<Envelope>(body) {
            Ok(envelope) => Ok(envelope.questions),
            Err(err) => {
                warn!(%err, "model response does not match the trivia schema");
                Err(error::STRUCTURED_OUTPUT
                    .with_message(format!("model response is not valid trivia json: {err}")))
            }
        }
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // skip the info string (`json`) on the opening line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);

    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
