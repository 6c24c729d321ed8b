//! Respondent-facing message texts.

use crate::domain::catalog::{Cardinality, Question};

use super::Finalization;

/// Acknowledgement used when no generated one is available.
pub const FALLBACK_ACKNOWLEDGEMENT: &str = "Got it, thank you!";

pub fn welcome(first: &Question) -> String {
    format!(
        "Good day! I'm a bot conducting a short opinion survey.\n\n\
         I'll ask you a few questions. Answer in your own words and I'll do my best \
         to understand you.\n\nLet's begin! {}",
        first.prompt
    )
}

pub fn resume(current: &Question) -> String {
    format!("Welcome back! Let's pick up where we left off.\n\n{}", current.prompt)
}

/// Re-prompt after an unclear answer, listing the option labels.
pub fn reprompt(question: &Question) -> String {
    let instruction = match question.cardinality {
        Cardinality::Single => "Please choose one of the following options:",
        Cardinality::Multi => "Please choose one or more of the following options:",
    };
    let options = question
        .labels()
        .map(|label| format!("- {}", label))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Sorry, I couldn't match your answer. {}\n\n{}",
        instruction, options
    )
}

pub fn next_question(acknowledgement: &str, next: &Question) -> String {
    let ack = acknowledgement.trim();
    let ack = if ack.is_empty() {
        FALLBACK_ACKNOWLEDGEMENT
    } else {
        ack
    };
    format!("{}\n\n{}", ack, next.prompt)
}

/// Completion message reflecting whether results reached storage.
pub fn completion(finalization: Option<&Finalization>, answered: usize) -> String {
    match finalization {
        Some(Finalization::Stored { .. }) => format!(
            "Thank you for taking part in the survey! Your answers have been saved.\n\n\
             Questions answered: {}",
            answered
        ),
        _ => format!(
            "Thank you for taking part in the survey! Your answers were recorded, \
             but we could not store them right now.\n\nQuestions answered: {}",
            answered
        ),
    }
}
