use crate::models::{BlogPreview, Locale};
use crate::Database;
use anyhow::Result;

/// Published previews for one language, newest first. The language filter
/// is a plain pass-through: a language with no posts yields an empty list.
pub fn list_previews(db: &Database, language: Locale) -> Result<Vec<BlogPreview>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT slug, language, title, excerpt, cover_url, published_at
        FROM blog_posts
        WHERE language = ? AND published_at IS NOT NULL
        ORDER BY published_at DESC, id DESC
        "#,
    )?;
    let previews = stmt
        .query_map([language.as_str()], |row| {
            Ok(BlogPreview {
                slug: row.get(0)?,
                language: row
                    .get::<_, String>(1)?
                    .parse()
                    .unwrap_or_default(),
                title: row.get(2)?,
                excerpt: row.get(3)?,
                cover_url: row.get(4)?,
                published_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(previews)
}

pub fn create_post(
    db: &Database,
    slug: &str,
    language: Locale,
    title: &str,
    excerpt: &str,
    cover_url: Option<&str>,
    published_at: Option<&str>,
) -> Result<i64> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO blog_posts (slug, language, title, excerpt, cover_url, published_at, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        (
            slug,
            language.as_str(),
            title,
            excerpt,
            cover_url,
            published_at,
            chrono::Utc::now().to_rfc3339(),
        ),
    )?;
    Ok(conn.last_insert_rowid())
}
