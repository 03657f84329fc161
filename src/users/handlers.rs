use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use crate::{errors::ApiError, state::AppState, users::repo_types::User};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(list_users))
        .route("/user/", get(list_users))
        .route("/user/:login", get(get_user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.find_all().await?;
    debug!(count = users.len(), "users listed");
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(login): Path<String>,
) -> Result<Json<User>, ApiError> {
    match state.users.find_by_login(&login).await? {
        Some(user) => Ok(Json(user)),
        None => {
            debug!(%login, "user not found");
            Err(ApiError::not_found(state.config.locale.user_not_found()))
        }
    }
}
