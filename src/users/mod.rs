use crate::state::AppState;
use axum::Router;

pub mod handlers;
pub mod repo;
pub mod repo_types;

pub use repo::{PgUserRepository, UserRepository};
pub use repo_types::{NewUser, User};

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::user_routes())
}
