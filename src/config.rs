//! Startup configuration: definition files and log setup.

use std::fs;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::definition::{Definitions, demo_definitions};
use crate::error::ConfigError;

/// Environment variable naming a definition file.
pub const DEFS_ENV: &str = "TABLINE_DEFS";

pub fn load_definitions(path: &Path) -> Result<Definitions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Definitions::from_json(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the catalog from `path`, or from the demo hierarchy when no file
/// is given.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, ConfigError> {
    let defs = match path {
        Some(p) => {
            info!(path = %p.display(), "loading definitions");
            load_definitions(p)?
        }
        None => demo_definitions(),
    };
    Ok(Catalog::build(&defs)?)
}

// RUST_LOG wins over the command-line level; output goes to stderr so the
// completion listing on stdout stays clean.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
