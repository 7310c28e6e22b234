use crate::models::{
    AssetFormat, GalleryItem, GalleryPage, GalleryPageItem, Locale, Srcsets, TagWithCount,
};
use crate::Database;
use anyhow::Result;
use std::collections::HashMap;

/// `nextPage` per the pagination contract: `page + 1` unless the current
/// page already reaches the end of the result set. The product is taken in
/// u128 so an absurd `page` from the query string cannot overflow; past the
/// end the answer is `None`, so the `page + 1` branch never wraps.
pub fn next_page(page: usize, page_size: usize, total: i64) -> Option<usize> {
    if (page as u128) * (page_size as u128) >= total.max(0) as u128 {
        None
    } else {
        Some(page + 1)
    }
}

pub fn count_items(db: &Database, tag: Option<&str>) -> Result<i64> {
    let conn = db.get()?;
    let count = match tag {
        Some(tag_slug) => conn.query_row(
            r#"
            SELECT COUNT(DISTINCT i.id)
            FROM gallery_items i
            JOIN gallery_item_tags it ON it.item_id = i.id
            JOIN gallery_tags t ON t.id = it.tag_id
            WHERE t.slug = ?
            "#,
            [tag_slug],
            |row| row.get(0),
        )?,
        None => conn.query_row("SELECT COUNT(*) FROM gallery_items", [], |row| row.get(0))?,
    };
    Ok(count)
}

/// One page of gallery items with captions in the requested locale
/// (falling back to Polish), precomputed srcsets, and tag slugs.
pub fn list_page(
    db: &Database,
    locale: Locale,
    tag: Option<&str>,
    page: usize,
    page_size: usize,
) -> Result<GalleryPage> {
    let total = count_items(db, tag)?;
    let offset = page.saturating_sub(1).saturating_mul(page_size);

    let conn = db.get()?;

    let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<GalleryItem> {
        Ok(GalleryItem {
            id: row.get(0)?,
            slug: row.get(1)?,
            width: row.get(2)?,
            height: row.get(3)?,
            blur_data: row.get(4)?,
            created_at: row.get(5)?,
        })
    };

    let items: Vec<GalleryItem> = match tag {
        Some(tag_slug) => {
            let mut stmt = conn.prepare(
                r#"
                SELECT DISTINCT i.id, i.slug, i.width, i.height, i.blur_data, i.created_at
                FROM gallery_items i
                JOIN gallery_item_tags it ON it.item_id = i.id
                JOIN gallery_tags t ON t.id = it.tag_id
                WHERE t.slug = ?
                ORDER BY i.created_at DESC, i.id DESC
                LIMIT ? OFFSET ?
                "#,
            )?;
            let rows = stmt
                .query_map((tag_slug, page_size, offset), map_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        }
        None => {
            let mut stmt = conn.prepare(
                r#"
                SELECT id, slug, width, height, blur_data, created_at
                FROM gallery_items
                ORDER BY created_at DESC, id DESC
                LIMIT ? OFFSET ?
                "#,
            )?;
            let rows = stmt
                .query_map((page_size, offset), map_row)?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        }
    };

    if items.is_empty() {
        return Ok(GalleryPage {
            items: vec![],
            next_page: next_page(page, page_size, total),
            total_items: total,
            current_page: page,
            page_size,
        });
    }

    let item_ids: Vec<i64> = items.iter().map(|i| i.id).collect();
    let placeholders: String = item_ids.iter().map(|_| "?").collect::<Vec<_>>().join(",");
    let id_params: Vec<&dyn rusqlite::ToSql> = item_ids
        .iter()
        .map(|id| id as &dyn rusqlite::ToSql)
        .collect();

    // Captions: requested locale first, Polish as fallback. Ingest always
    // writes the Polish row, so anchoring on it covers every item.
    let mut captions: HashMap<i64, (String, String)> = HashMap::new();
    {
        let sql = format!(
            r#"
            SELECT g.item_id,
                   COALESCE(loc.title, g.title) AS title,
                   COALESCE(loc.alt, g.alt) AS alt
            FROM gallery_i18n g
            LEFT JOIN gallery_i18n loc
                   ON loc.item_id = g.item_id AND loc.locale = ?
            WHERE g.locale = 'pl' AND g.item_id IN ({})
            "#,
            placeholders
        );
        let locale_code = locale.as_str();
        let mut caption_params: Vec<&dyn rusqlite::ToSql> = vec![&locale_code];
        caption_params.extend(item_ids.iter().map(|id| id as &dyn rusqlite::ToSql));
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(caption_params.as_slice(), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;
        for row in rows.flatten() {
            captions.insert(row.0, (row.1, row.2));
        }
    }

    // Srcsets, ordered by ascending width within each format.
    let mut srcsets: HashMap<i64, Srcsets> = HashMap::new();
    {
        let sql = format!(
            "SELECT item_id, format, width, url FROM gallery_assets WHERE item_id IN ({}) ORDER BY width",
            placeholders
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(id_params.as_slice(), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?;
        for row in rows.flatten() {
            let (item_id, format, width, url) = row;
            let Ok(format) = format.parse::<AssetFormat>() else {
                continue;
            };
            let set = srcsets.entry(item_id).or_default();
            let target = match format {
                AssetFormat::Avif => &mut set.avif,
                AssetFormat::Webp => &mut set.webp,
                AssetFormat::Jpg => &mut set.jpg,
            };
            if !target.is_empty() {
                target.push_str(", ");
            }
            target.push_str(&format!("{} {}w", url, width));
        }
    }

    // Tag slugs per item.
    let mut tags_by_item: HashMap<i64, Vec<String>> = HashMap::new();
    {
        let sql = format!(
            r#"
            SELECT it.item_id, t.slug
            FROM gallery_item_tags it
            JOIN gallery_tags t ON t.id = it.tag_id
            WHERE it.item_id IN ({})
            ORDER BY t.slug
            "#,
            placeholders
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(id_params.as_slice(), |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;
        for row in rows.flatten() {
            tags_by_item.entry(row.0).or_default().push(row.1);
        }
    }

    let page_items = items
        .into_iter()
        .map(|item| {
            let (title, alt) = captions
                .remove(&item.id)
                .unwrap_or_else(|| (item.slug.replace('-', " "), String::new()));
            GalleryPageItem {
                title,
                alt,
                w: item.width,
                h: item.height,
                srcsets: srcsets.remove(&item.id).unwrap_or_default(),
                blur_data: item.blur_data,
                tags: tags_by_item.remove(&item.id).unwrap_or_default(),
                slug: item.slug,
            }
        })
        .collect();

    Ok(GalleryPage {
        items: page_items,
        next_page: next_page(page, page_size, total),
        total_items: total,
        current_page: page,
        page_size,
    })
}

/// Tag slugs with localized names and item counts, busiest first.
pub fn list_tags_with_counts(db: &Database, locale: Locale) -> Result<Vec<TagWithCount>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        r#"
        SELECT t.slug,
               COALESCE(loc.name, pl.name, t.slug) AS name,
               COUNT(it.item_id) AS count
        FROM gallery_tags t
        LEFT JOIN gallery_tag_i18n loc ON loc.tag_id = t.id AND loc.locale = ?
        LEFT JOIN gallery_tag_i18n pl ON pl.tag_id = t.id AND pl.locale = 'pl'
        LEFT JOIN gallery_item_tags it ON it.tag_id = t.id
        GROUP BY t.id
        ORDER BY count DESC, t.slug
        "#,
    )?;
    let tags = stmt
        .query_map([locale.as_str()], |row| {
            Ok(TagWithCount {
                slug: row.get(0)?,
                name: row.get(1)?,
                count: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(tags)
}

pub fn create_item(
    db: &Database,
    slug: &str,
    width: i64,
    height: i64,
    blur_data: &str,
) -> Result<i64> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO gallery_items (slug, width, height, blur_data, created_at) VALUES (?, ?, ?, ?, ?)",
        (slug, width, height, blur_data, chrono::Utc::now().to_rfc3339()),
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn item_id_by_slug(db: &Database, slug: &str) -> Result<Option<i64>> {
    let conn = db.get()?;
    let id = conn
        .query_row("SELECT id FROM gallery_items WHERE slug = ?", [slug], |row| {
            row.get(0)
        })
        .ok();
    Ok(id)
}

pub fn add_asset(
    db: &Database,
    item_id: i64,
    format: AssetFormat,
    width: i64,
    path: &str,
    url: &str,
) -> Result<i64> {
    let conn = db.get()?;
    conn.execute(
        "INSERT INTO gallery_assets (item_id, format, width, path, url) VALUES (?, ?, ?, ?, ?)",
        (item_id, format.as_str(), width, path, url),
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_i18n(db: &Database, item_id: i64, locale: Locale, title: &str, alt: &str) -> Result<()> {
    let conn = db.get()?;
    conn.execute(
        "INSERT OR REPLACE INTO gallery_i18n (item_id, locale, title, alt) VALUES (?, ?, ?, ?)",
        (item_id, locale.as_str(), title, alt),
    )?;
    Ok(())
}

pub fn ensure_tag(db: &Database, slug: &str) -> Result<i64> {
    let conn = db.get()?;
    conn.execute(
        "INSERT OR IGNORE INTO gallery_tags (slug, created_at) VALUES (?, ?)",
        (slug, chrono::Utc::now().to_rfc3339()),
    )?;
    let id = conn.query_row("SELECT id FROM gallery_tags WHERE slug = ?", [slug], |row| {
        row.get(0)
    })?;
    Ok(id)
}

pub fn set_tag_name(db: &Database, tag_id: i64, locale: Locale, name: &str) -> Result<()> {
    let conn = db.get()?;
    conn.execute(
        "INSERT OR REPLACE INTO gallery_tag_i18n (tag_id, locale, name) VALUES (?, ?, ?)",
        (tag_id, locale.as_str(), name),
    )?;
    Ok(())
}

pub fn tag_item(db: &Database, item_id: i64, tag_id: i64) -> Result<()> {
    let conn = db.get()?;
    conn.execute(
        "INSERT OR IGNORE INTO gallery_item_tags (item_id, tag_id) VALUES (?, ?)",
        (item_id, tag_id),
    )?;
    Ok(())
}
