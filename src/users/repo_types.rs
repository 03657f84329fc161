use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub login: String, // unique lookup key
    pub firstname: String,
    pub lastname: String,
    pub description: Option<String>,
}

/// Fields needed to insert a user; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: String,
    pub firstname: String,
    pub lastname: String,
    pub description: Option<String>,
}

impl NewUser {
    pub fn new(
        login: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            description: None,
        }
    }
}
