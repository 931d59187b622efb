use crate::{extractors::Query, Json, Result, StateTrait};
use axum::extract::State;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Request {
    name: String,
}

/// Source text of the best matching encyclopedia page.
pub async fn get_wikipedia_info<S: StateTrait>(
    State(state): State<S>,
    Query(request): Query<Request>,
) -> Result<Json<String>> {
    let wikipedia = state.wikipedia();

    let key = wikipedia.search_page(&request.name).await?;
    let source = wikipedia.page_source(&key).await?;

    Ok(Json(source))
}
