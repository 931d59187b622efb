use super::schema::{TriviaQuestion, TriviaSchema, OPTION_COUNT};
use crate::{error, Result};
use std::collections::HashSet;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Violation {
    #[error("expected {expected} questions, received {received}")]
    TooFewQuestions { expected: usize, received: usize },
    #[error("question {0}: question text is empty")]
    EmptyQuestion(usize),
    #[error("question {0}: an option is empty")]
    EmptyOption(usize),
    #[error("question {index}: expected {expected} options, received {received}", expected = OPTION_COUNT)]
    OptionCount { index: usize, received: usize },
    #[error("question {index}: option \"{option}\" appears more than once")]
    DuplicateOption { index: usize, option: String },
    #[error("question {index}: answer \"{answer}\" is not one of the options")]
    AnswerNotInOptions { index: usize, answer: String },
    #[error("question {0}: difficulty is missing")]
    MissingDifficulty(usize),
    #[error("question {0}: category is missing")]
    MissingCategory(usize),
}

/// Enforces the trivia contract on parsed model output.
///
/// An answer that matches an option only up to case is rewritten to the
/// option's text; surplus questions are dropped. Every other deviation
/// rejects the whole response.
pub fn validate(
    schema: &TriviaSchema,
    questions: Vec<TriviaQuestion>,
) -> Result<Vec<TriviaQuestion>> {
    check(schema, questions).map_err(|violation| {
        warn!(%violation, "rejected model output");
        error::INVALID_TRIVIA.with_message(violation.to_string())
    })
}

fn check(
    schema: &TriviaSchema,
    mut questions: Vec<TriviaQuestion>,
) -> std::result::Result<Vec<TriviaQuestion>, Violation> {
    let expected = schema.question_count();

    if questions.len() < expected {
        return Err(Violation::TooFewQuestions {
            expected,
            received: questions.len(),
        });
    }

    if questions.len() > expected {
        warn!(expected, received = questions.len(), "dropping surplus questions");
        questions.truncate(expected);
    }

    questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| {
            let mut question = check_question(schema.is_detailed(), index, question)?;

            // reduced questions never carry details, even if the model adds them
            if !schema.is_detailed() {
                question.difficulty = None;
                question.category = None;
            }

            Ok::<_, Violation>(question)
        })
        .collect()
}

/// Checks client-submitted questions before they are stored. Difficulty and
/// category stay optional here.
pub fn validate_submitted(questions: Vec<TriviaQuestion>) -> Result<Vec<TriviaQuestion>> {
    questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| check_question(false, index, question))
        .collect::<std::result::Result<_, _>>()
        .map_err(|violation: Violation| {
            debug!(%violation, "rejected submitted questions");
            error::JSON_VALIDATE_INVALID.with_message(violation.to_string())
        })
}

fn check_question(
    detailed: bool,
    index: usize,
    mut question: TriviaQuestion,
) -> std::result::Result<TriviaQuestion, Violation> {
    question.question = question.question.trim().to_owned();
    if question.question.is_empty() {
        return Err(Violation::EmptyQuestion(index));
    }

    for option in &mut question.options {
        *option = option.trim().to_owned();
        if option.is_empty() {
            return Err(Violation::EmptyOption(index));
        }
    }

    if question.options.len() != OPTION_COUNT {
        return Err(Violation::OptionCount {
            index,
            received: question.options.len(),
        });
    }

    let mut seen = HashSet::with_capacity(OPTION_COUNT);
    for option in &question.options {
        if !seen.insert(option.to_lowercase()) {
            return Err(Violation::DuplicateOption {
                index,
                option: option.clone(),
            });
        }
    }

    let answer = question.answer.trim().to_owned();
    question.answer = match question
        .options
        .iter()
        .find(|option| option.as_str() == answer.as_str())
    {
        Some(option) => option.clone(),
        None => question
            .options
            .iter()
            .find(|option| option.to_lowercase() == answer.to_lowercase())
            .cloned()
            .ok_or_else(|| Violation::AnswerNotInOptions {
                index,
                answer: answer.clone(),
            })?,
    };

    if detailed {
        if question.difficulty.is_none() {
            return Err(Violation::MissingDifficulty(index));
        }

        let category = question.category.as_deref().map(str::trim).unwrap_or_default();
        if category.is_empty() {
            return Err(Violation::MissingCategory(index));
        }
        question.category = Some(category.to_owned());
    }

    Ok(question)
}
