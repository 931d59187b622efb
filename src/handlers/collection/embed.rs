use crate::{llm::EmbeddingModel, Json, Result, StateTrait, ValidatedJson};
use axum::extract::State;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(max = 256))]
    texts: Vec<String>,
}

/// One embedding vector per input text, in input order.
pub async fn embed<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<Json<Vec<Vec<f32>>>> {
    Ok(Json(state.embedder().embed(&request.texts).await?))
}
