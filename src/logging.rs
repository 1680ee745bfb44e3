//! Tracing initialization.
//!
//! The TUI owns stdout, so diagnostics go to a log file under the user
//! data directory. Filtering follows the usual `RUST_LOG` conventions,
//! defaulting to `info`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber. Returns the log file path.
pub fn init() -> io::Result<PathBuf> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inventario");
    fs::create_dir_all(&dir)?;
    let path = dir.join("inventario.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();

    Ok(path)
}
