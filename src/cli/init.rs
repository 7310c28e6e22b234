use crate::models::MediaRoute;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let name = name.unwrap_or_else(|| "Academy".to_string());
    std::fs::create_dir_all(&path)?;

    let config_path = path.join("clipper.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let config = format!(
        r#"[site]
title = "{name}"
description = "Barber training academy"
url = "http://localhost:4000"
language = "pl"

[seo.pl]
title = "{name}"
description = "Szkolenia barberskie"

[server]
host = "127.0.0.1"
port = 4000

[database]
path = "data/clipper.db"

[media]
root = "media"

[api]
default_page_size = 12
max_page_size = 100
"#
    );
    std::fs::write(&config_path, config)?;

    let media_root = path.join("media");
    for route in MediaRoute::ALL {
        std::fs::create_dir_all(media_root.join(route.as_str()))?;
    }
    std::fs::create_dir_all(media_root.join("processed").join("gallery"))?;

    tracing::info!("Initialized site at {}", path.display());
    tracing::info!("Next: edit clipper.toml, then run `clipper migrate`");
    Ok(())
}
