//! Trivia synthesis: builds the prompt contract, invokes the chat model once,
//! and turns its JSON answer into validated questions.

mod prompt;
mod schema;
mod validate;

pub use schema::*;
pub use validate::{validate_submitted, Violation};

use crate::{
    error,
    llm::{ChatModel, SamplingParams},
    Result,
};

/// Generates `schema.question_count()` questions grounded in `source_text`.
pub async fn synthesize<M>(
    model: &M,
    source_text: &str,
    schema: TriviaSchema,
    params: &SamplingParams,
) -> Result<Vec<TriviaQuestion>>
where
    M: ChatModel + ?Sized,
{
    if source_text.trim().is_empty() {
        return Err(error::EMPTY_SOURCE_TEXT);
    }

    let system = prompt::system_instruction(&schema);
    let user = prompt::text_message(source_text);

    generate(model, &system, &user, schema, params).await
}

/// Generates questions from a catalog entry's title, overview and release date.
pub async fn synthesize_from_movie<M>(
    model: &M,
    title: &str,
    overview: &str,
    release_date: &str,
    schema: TriviaSchema,
    params: &SamplingParams,
) -> Result<Vec<TriviaQuestion>>
where
    M: ChatModel + ?Sized,
{
    if title.trim().is_empty() && overview.trim().is_empty() {
        return Err(error::EMPTY_SOURCE_TEXT);
    }

    let system = prompt::system_instruction(&schema);
    let user = prompt::movie_message(schema.question_count(), title, release_date, overview);

    generate(model, &system, &user, schema, params).await
}

async fn generate<M>(
    model: &M,
    system: &str,
    user: &str,
    schema: TriviaSchema,
    params: &SamplingParams,
) -> Result<Vec<TriviaQuestion>>
where
    M: ChatModel + ?Sized,
{
    let output = model.invoke(system, user, params).await?;
    let questions = schema.parse(&output)?;

    validate::validate(&schema, questions)
}
