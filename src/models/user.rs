use serde::Serialize;

/// Credential pair. Declared for the schema; no login surface uses it yet.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: String,
}
