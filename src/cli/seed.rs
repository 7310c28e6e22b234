use crate::models::MediaRoute;
use crate::services::media;
use crate::{Config, Database};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn run(config_path: &Path, route: &str, dir: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path)?;
    db.migrate()?;

    let route: MediaRoute = route
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown route '{}'", route))?;
    let dir = dir.unwrap_or_else(|| Path::new(&config.media.root).join(route.as_str()));

    media::seed_route(&db, route, &dir)?;
    Ok(())
}
