use crate::Database;
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub assets_removed: usize,
    pub items_removed: usize,
    pub i18n_removed: usize,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        *self == CleanupReport::default()
    }
}

/// Drop asset rows whose backing file is missing under `media_root`, then
/// delete items left with no assets together with their localized rows.
/// Idempotent: a second run finds nothing to delete.
pub fn cleanup_broken_assets(db: &Database, media_root: &Path) -> Result<CleanupReport> {
    let conn = db.get()?;
    let mut report = CleanupReport::default();

    let assets: Vec<(i64, String)> = {
        let mut stmt = conn.prepare("SELECT id, path FROM gallery_assets")?;
        let assets = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        assets
    };

    for (id, path) in assets {
        if !media_root.join(&path).is_file() {
            conn.execute("DELETE FROM gallery_assets WHERE id = ?", [id])?;
            report.assets_removed += 1;
            tracing::info!("Dropped broken asset: {}", path);
        }
    }

    // Count the localized rows before the cascade removes them.
    report.i18n_removed = conn.query_row(
        r#"
        SELECT COUNT(*) FROM gallery_i18n
        WHERE item_id NOT IN (SELECT DISTINCT item_id FROM gallery_assets)
        "#,
        [],
        |row| row.get::<_, i64>(0),
    )? as usize;

    report.items_removed = conn.execute(
        "DELETE FROM gallery_items WHERE id NOT IN (SELECT DISTINCT item_id FROM gallery_assets)",
        [],
    )?;

    if report.is_clean() {
        tracing::info!("Gallery is consistent, nothing to clean");
    } else {
        tracing::info!(
            "Cleanup removed {} asset(s), {} item(s), {} i18n row(s)",
            report.assets_removed,
            report.items_removed,
            report.i18n_removed
        );
    }

    Ok(report)
}
