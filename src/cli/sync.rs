use crate::models::MediaRoute;
use crate::services::media;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;
    db.migrate()?;

    let media_root = Path::new(&config.media.root);
    let mut inserted = 0;
    let mut removed = 0;

    for route in MediaRoute::ALL {
        let report = media::sync_route(&db, route, &media_root.join(route.as_str()))?;
        inserted += report.inserted;
        removed += report.removed;
    }

    tracing::info!("Sync complete: {} inserted, {} removed", inserted, removed);
    Ok(())
}
