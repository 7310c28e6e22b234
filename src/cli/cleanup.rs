use crate::services::reconcile;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;
    db.migrate()?;

    reconcile::cleanup_broken_assets(&db, Path::new(&config.media.root))?;
    Ok(())
}
