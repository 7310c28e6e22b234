use crate::{Config, Database};
use std::path::PathBuf;

pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub media_root: PathBuf,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Self {
        let media_root = PathBuf::from(&config.media.root);
        Self {
            config,
            db,
            media_root,
        }
    }
}
