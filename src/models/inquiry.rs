use serde::{Deserialize, Serialize};

/// Contact-form submission. Write-once; there is no lifecycle beyond insert.
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub program: Option<String>,
    pub message: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub program: Option<String>,
    pub message: String,
}
