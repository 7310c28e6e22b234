use crate::models::{CreateInquiry, Inquiry};
use crate::Database;
use anyhow::Result;

const MAX_MESSAGE_LEN: usize = 10_000;

/// Field validation for the contact form. Returns the first problem as a
/// message the handler can surface as a 400.
pub fn validate(input: &CreateInquiry) -> Result<(), String> {
    if input.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if input.message.trim().is_empty() {
        return Err("message must not be empty".to_string());
    }
    if input.message.len() > MAX_MESSAGE_LEN {
        return Err("message is too long".to_string());
    }
    let email = input.email.trim();
    let plausible = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
    });
    if !plausible {
        return Err("email does not look valid".to_string());
    }
    Ok(())
}

pub fn create_inquiry(db: &Database, input: CreateInquiry) -> Result<Inquiry> {
    if let Err(msg) = validate(&input) {
        anyhow::bail!("Invalid inquiry: {}", msg);
    }

    let created_at = chrono::Utc::now().to_rfc3339();
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO inquiries (name, email, phone, program, message, created_at) VALUES (?, ?, ?, ?, ?, ?)",
        (
            input.name.trim(),
            input.email.trim(),
            &input.phone,
            &input.program,
            input.message.trim(),
            &created_at,
        ),
    )?;

    Ok(Inquiry {
        id: conn.last_insert_rowid(),
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: input.phone,
        program: input.program,
        message: input.message.trim().to_string(),
        created_at,
    })
}

pub fn list_inquiries(db: &Database, limit: usize, offset: usize) -> Result<Vec<Inquiry>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, name, email, phone, program, message, created_at FROM inquiries ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
    )?;
    let inquiries = stmt
        .query_map((limit, offset), |row| {
            Ok(Inquiry {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                phone: row.get(3)?,
                program: row.get(4)?,
                message: row.get(5)?,
                created_at: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(inquiries)
}
