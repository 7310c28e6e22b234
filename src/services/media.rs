use crate::models::{MediaFile, MediaKind, MediaRoute};
use crate::Database;
use anyhow::Result;
use std::path::Path;
use std::str::FromStr;

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "avif", "heic", "heif", "tiff",
];

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "m4v"];

/// Classify a file by extension, with a mime lookup as the long tail.
/// Returns `None` for anything that is neither image nor video.
pub fn classify(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Some(MediaKind::Image);
    }
    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        return Some(MediaKind::Video);
    }
    match mime_guess::from_path(path).first() {
        Some(mime) if mime.type_() == mime_guess::mime::IMAGE => Some(MediaKind::Image),
        Some(mime) if mime.type_() == mime_guess::mime::VIDEO => Some(MediaKind::Video),
        _ => None,
    }
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub inserted: usize,
    pub removed: usize,
}

/// Scan one route folder and insert a row per recognizable file.
/// Re-running is a no-op thanks to the (route, filename) unique key.
/// A missing directory is logged and skipped, not an error.
pub fn seed_route(db: &Database, route: MediaRoute, dir: &Path) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    if !dir.is_dir() {
        tracing::warn!("Media directory not found, skipping: {}", dir.display());
        return Ok(report);
    }

    let conn = db.get()?;
    let mut entries: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    entries.sort();

    for path in entries {
        let Some(kind) = classify(&path) else {
            continue;
        };
        let Some(filename) = path.file_name().and_then(|f| f.to_str()) else {
            continue;
        };

        let url = format!("/media/{}/{}", route, filename);
        let changed = conn.execute(
            "INSERT OR IGNORE INTO media_files (route, filename, kind, url, created_at) VALUES (?, ?, ?, ?, ?)",
            (
                route.as_str(),
                filename,
                kind.as_str(),
                &url,
                chrono::Utc::now().to_rfc3339(),
            ),
        )?;

        if changed > 0 {
            report.inserted += 1;
        } else {
            report.skipped += 1;
        }
    }

    tracing::info!(
        "Seeded {}: {} inserted, {} already present",
        route,
        report.inserted,
        report.skipped
    );
    Ok(report)
}

/// Seed new files, then drop rows whose backing file disappeared.
pub fn sync_route(db: &Database, route: MediaRoute, dir: &Path) -> Result<SyncReport> {
    let seeded = seed_route(db, route, dir)?;
    let mut report = SyncReport {
        inserted: seeded.inserted,
        removed: 0,
    };

    let conn = db.get()?;
    let rows: Vec<(i64, String)> = {
        let mut stmt =
            conn.prepare("SELECT id, filename FROM media_files WHERE route = ?")?;
        let rows = stmt
            .query_map([route.as_str()], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        rows
    };

    for (id, filename) in rows {
        if !dir.join(&filename).is_file() {
            conn.execute("DELETE FROM media_files WHERE id = ?", [id])?;
            report.removed += 1;
            tracing::info!("Removed stale media record: {}/{}", route, filename);
        }
    }

    Ok(report)
}

// A row that fails this was written outside the application; report it
// instead of masking it with a default.
fn text_enum<T: FromStr>(idx: usize, value: &str) -> rusqlite::Result<T> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unrecognized value '{}'", value).into(),
        )
    })
}

pub fn list_media(db: &Database, route: MediaRoute) -> Result<Vec<MediaFile>> {
    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT id, route, filename, kind, url, created_at FROM media_files WHERE route = ? ORDER BY created_at DESC, id DESC",
    )?;
    let files = stmt
        .query_map([route.as_str()], |row| {
            let route: String = row.get(1)?;
            let kind: String = row.get(3)?;
            Ok(MediaFile {
                id: row.get(0)?,
                route: text_enum(1, &route)?,
                filename: row.get(2)?,
                kind: text_enum(3, &kind)?,
                url: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(files)
}
