use std::rc::Rc;

use anyhow::Result;

use plugin_settings::TracingSink;
use plugin_settings::model::config::{PluginConfig, log_dir};
use plugin_settings::observer::route_panics_to_tracing;
use plugin_settings::plugin::{LocalHost, Plugin};

fn main() -> Result<()> {
    let config = PluginConfig::load()?;

    // Initialize logging to file (never stdout)
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, &config.logging.file_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(config.logging.filter.as_str())
        .init();
    route_panics_to_tracing();

    tracing::info!("example plugin starting");

    let host = LocalHost::new(env!("CARGO_PKG_VERSION"), std::env::current_dir()?);
    host.expose_method(config.frontend.method.clone(), true);

    let mut plugin = Plugin::new(host, config, Rc::new(TracingSink))?;

    plugin.load()?;

    // The host mounts the front end after the backend reports ready.
    plugin.host().set_frontend_loaded(true);
    plugin.front_end_loaded();

    let accepted = plugin.receive_frontend_message("hello from the front end", true, 69);
    tracing::info!(accepted, "front end message handled");

    plugin.unload();
    Ok(())
}
