use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::QuestionKind;

/// A value submitted for (or expected by) a question.
///
/// The variant follows the question kind: a choice index for multiple-choice,
/// a boolean for true/false and free text otherwise. Nothing forces a submitted
/// answer to match the kind of its question; a mismatched variant simply never
/// scores as correct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Choice(usize),
    Boolean(bool),
    Text(String),
}

impl Answer {
    /// The question kind this answer shape belongs to.
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self {
            Answer::Choice(_) => QuestionKind::MultipleChoice,
            Answer::Boolean(_) => QuestionKind::TrueFalse,
            Answer::Text(_) => QuestionKind::FreeText,
        }
    }

    /// Returns true when this submitted answer equals `expected` under `text_match`.
    #[must_use]
    pub fn matches(&self, expected: &Answer, text_match: TextMatch) -> bool {
        match (self, expected) {
            (Answer::Choice(submitted), Answer::Choice(expected)) => submitted == expected,
            (Answer::Boolean(submitted), Answer::Boolean(expected)) => submitted == expected,
            (Answer::Text(submitted), Answer::Text(expected)) => {
                text_match.matches(submitted, expected)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Choice(index) => write!(f, "{}", choice_label(*index)),
            Answer::Boolean(true) => f.write_str("True"),
            Answer::Boolean(false) => f.write_str("False"),
            Answer::Text(text) => f.write_str(text),
        }
    }
}

/// Letter label for a choice index (`0 -> "A"`). Indices past `Z` fall back to a number.
#[must_use]
pub fn choice_label(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or_else(|| format!("#{}", index + 1), |i| char::from(b'A' + i).to_string())
}

/// How free-text answers are compared against the expected text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMatch {
    /// Byte-for-byte equality, case and whitespace sensitive.
    #[default]
    Exact,
    /// Trims, collapses inner whitespace and ignores case.
    Normalized,
}

impl TextMatch {
    #[must_use]
    pub fn matches(self, submitted: &str, expected: &str) -> bool {
        match self {
            TextMatch::Exact => submitted == expected,
            TextMatch::Normalized => normalize(submitted) == normalize(expected),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextMatch::Exact => "exact",
            TextMatch::Normalized => "normalized",
        }
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text match policy: {raw} (expected `exact` or `normalized`)")]
pub struct ParseTextMatchError {
    raw: String,
}

impl FromStr for TextMatch {
    type Err = ParseTextMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(TextMatch::Exact),
            "normalized" | "normalised" => Ok(TextMatch::Normalized),
            _ => Err(ParseTextMatchError { raw: s.to_string() }),
        }
    }
}
