use crate::{
    error,
    llm::{ChatModel, SamplingParams},
    Json, Result, StateTrait,
};
use axum::extract::State;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Request {
    #[serde(default)]
    instruction: String,
    prompt: String,
}

/// Free-form text generation.
pub async fn generate_text<S: StateTrait>(
    State(state): State<S>,
    Json(request): Json<Request>,
) -> Result<Json<String>> {
    if request.prompt.trim().is_empty() {
        return Err(error::EMPTY_SOURCE_TEXT);
    }

    let text = state
        .llm()
        .invoke(&request.instruction, &request.prompt, &SamplingParams::FREE_TEXT)
        .await?;

    Ok(Json(text))
}
