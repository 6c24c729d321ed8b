//! Question and option value objects.
//!
//! Field names on the wire follow the catalog file format:
//! `{"id", "question", "type", "options": [{"code", "text"}]}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable question identifier; catalogs use either integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{}", n),
            QuestionId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(n: i64) -> Self {
        QuestionId::Number(n)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::Text(s.to_string())
    }
}

/// Short option token such as `A1`. Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionCode(String);

impl OptionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// How many options an answer may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    /// Exactly one option.
    #[serde(rename = "single_choice")]
    Single,
    /// Any non-zero number of options.
    #[serde(rename = "multiple_choice")]
    Multi,
}

/// One selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub code: OptionCode,
    #[serde(rename = "text")]
    pub label: String,
}

impl AnswerOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: OptionCode::new(code),
            label: label.into(),
        }
    }
}

/// A survey question with its closed option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(rename = "type")]
    pub cardinality: Cardinality,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        cardinality: Cardinality,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            cardinality,
            options,
        }
    }

    /// Returns true if `code` is one of this question's option codes.
    pub fn has_option(&self, code: &OptionCode) -> bool {
        self.options.iter().any(|o| &o.code == code)
    }

    /// Looks an option up by its code.
    pub fn option(&self, code: &OptionCode) -> Option<&AnswerOption> {
        self.options.iter().find(|o| &o.code == code)
    }

    pub fn is_single_choice(&self) -> bool {
        self.cardinality == Cardinality::Single
    }

    /// Option labels in catalog order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.label.as_str())
    }
}
