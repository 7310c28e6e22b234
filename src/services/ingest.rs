use crate::models::{Locale, MediaKind};
use crate::services::{gallery, media, variants};
use crate::Database;
use anyhow::Result;
use sha2::{Digest, Sha256};
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct IngestReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Walk a directory of original photos and turn each into a gallery item:
/// responsive variants written under the processed media dir, a Polish
/// caption derived from the filename, and a tag from the parent folder.
///
/// Slugs that already exist are skipped, so re-running an ingest over the
/// same folder imports nothing new. Unreadable files are logged and
/// skipped rather than aborting the whole run.
pub fn ingest_dir(
    db: &Database,
    media_root: &Path,
    processed_dir: &str,
    source: &Path,
    tag: Option<&str>,
) -> Result<IngestReport> {
    let mut report = IngestReport::default();

    if !source.is_dir() {
        tracing::warn!("Ingest source not found, skipping: {}", source.display());
        return Ok(report);
    }

    let out_dir = media_root.join(processed_dir).join("gallery");
    std::fs::create_dir_all(&out_dir)?;

    for entry in WalkDir::new(source).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() || media::classify(path) != Some(MediaKind::Image) {
            continue;
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let item_slug = slug::slugify(stem);
        if item_slug.is_empty() {
            continue;
        }

        if gallery::item_id_by_slug(db, &item_slug)?.is_some() {
            tracing::info!("Skipping existing item: {}", item_slug);
            report.skipped += 1;
            continue;
        }

        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                report.skipped += 1;
                continue;
            }
        };

        let set = match variants::generate_variants(&data) {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!("Failed to process {}: {}", path.display(), e);
                report.skipped += 1;
                continue;
            }
        };

        // Content hash in the filename makes the URL safe for immutable
        // edge caching: a changed source produces a new URL.
        let digest = hex::encode(Sha256::digest(&data));
        let fingerprint = &digest[..8];

        let item_id = gallery::create_item(
            db,
            &item_slug,
            set.width as i64,
            set.height as i64,
            &set.blur_data,
        )?;

        for file in &set.files {
            let filename = format!(
                "{}-{}w-{}.{}",
                item_slug,
                file.width,
                fingerprint,
                file.format.extension()
            );
            std::fs::write(out_dir.join(&filename), &file.data)?;

            let rel_path = format!("{}/gallery/{}", processed_dir, filename);
            let url = format!("/media/{}", rel_path);
            gallery::add_asset(
                db,
                item_id,
                file.format,
                file.width as i64,
                &rel_path,
                &url,
            )?;
        }

        gallery::set_i18n(db, item_id, Locale::Pl, &item_slug.replace('-', " "), "")?;

        let folder_tag = tag.map(String::from).or_else(|| {
            path.parent()
                .filter(|p| *p != source)
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .map(slug::slugify)
        });
        if let Some(tag_slug) = folder_tag.filter(|t| !t.is_empty()) {
            let tag_id = gallery::ensure_tag(db, &tag_slug)?;
            gallery::tag_item(db, item_id, tag_id)?;
        }

        tracing::info!("Ingested {} ({} variants)", item_slug, set.files.len());
        report.imported += 1;
    }

    tracing::info!(
        "Ingest complete: {} imported, {} skipped",
        report.imported,
        report.skipped
    );
    Ok(report)
}
