use anyhow::Result;
use lectern_config::LecternConfig;

use crate::config::open_resolver;

/// Apply server flag overrides and run until interrupted
pub async fn execute(
    mut config: LecternConfig,
    host: Option<String>,
    port: Option<u16>,
    no_cors: bool,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if no_cors {
        config.server.cors = false;
    }
    config.validate()?;

    let resolver = open_resolver(&config)?;
    if resolver.translation_count() == 0 {
        tracing::warn!(
            data_dir = %config.storage.data_dir.display(),
            "No translations discovered; every list endpoint will be empty"
        );
    }

    lectern_web::start_server(&config.server, resolver).await?;
    Ok(())
}
