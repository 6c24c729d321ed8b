//! Classification outcome value object.

use std::collections::HashSet;

use crate::domain::catalog::{OptionCode, Question};

/// Result of mapping one utterance onto a question's options.
///
/// `Matched` always carries at least one code. An empty match is
/// represented as `Unclear`, never as `Matched(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    Matched(Vec<OptionCode>),
    Unclear,
}

impl ClassificationOutcome {
    /// Builds an outcome from raw codes; no codes means unclear.
    pub fn from_codes(codes: Vec<OptionCode>) -> Self {
        if codes.is_empty() {
            ClassificationOutcome::Unclear
        } else {
            ClassificationOutcome::Matched(codes)
        }
    }

    pub fn is_unclear(&self) -> bool {
        matches!(self, ClassificationOutcome::Unclear)
    }

    pub fn codes(&self) -> &[OptionCode] {
        match self {
            ClassificationOutcome::Matched(codes) => codes,
            ClassificationOutcome::Unclear => &[],
        }
    }

    /// Narrows the outcome to what `question` can accept.
    ///
    /// Foreign codes are dropped and duplicates collapse onto their first
    /// occurrence. A single-choice question that still has more than one
    /// code left becomes `Unclear`.
    pub fn restrict_to(self, question: &Question) -> Self {
        let codes = match self {
            ClassificationOutcome::Matched(codes) => codes,
            ClassificationOutcome::Unclear => return ClassificationOutcome::Unclear,
        };

        let mut seen = HashSet::new();
        let kept: Vec<OptionCode> = codes
            .into_iter()
            .filter(|code| question.has_option(code))
            .filter(|code| seen.insert(code.clone()))
            .collect();

        if question.is_single_choice() && kept.len() > 1 {
            return ClassificationOutcome::Unclear;
        }
        Self::from_codes(kept)
    }
}
