use crate::{clients::VerifiedUser, Json, Result, StateTrait};
use axum::extract::{Path, State};

pub async fn verify_user<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<VerifiedUser>> {
    Ok(Json(state.identity().get_user(&id).await?))
}
