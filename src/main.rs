use anyhow::Context;
use inventario::config::{Config, ConfigStore};
use inventario::{logging, ui};

fn main() -> anyhow::Result<()> {
    let log_path = logging::init().context("failed to initialize logging")?;
    tracing::info!(log = %log_path.display(), "inventario starting");

    let path = Config::config_path();
    let config = Config::load_from(&path).context("failed to load configuration")?;
    let store = ConfigStore::new(config, path);

    ui::runtime::run(store).context("terminal session failed")?;
    Ok(())
}
