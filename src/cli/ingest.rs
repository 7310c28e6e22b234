use crate::services::ingest;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path, source: &Path, tag: Option<String>) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;
    db.migrate()?;

    ingest::ingest_dir(
        &db,
        Path::new(&config.media.root),
        &config.media.processed_dir,
        source,
        tag.as_deref(),
    )?;
    Ok(())
}
