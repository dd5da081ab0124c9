use std::path::PathBuf;

use crate::index::CollectionId;

/// Misuse of the search index. These are programming errors surfaced at the
/// point of misuse; nothing at the keystroke level recovers from them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("collection {collection} is already registered")]
    AlreadyRegistered { collection: String },

    #[error("collection {collection} was never registered")]
    NotRegistered { collection: CollectionId },

    #[error("duplicate unit name `{name}` in collection {collection}")]
    DuplicateName { collection: String, name: String },
}

/// Errors raised while flattening definitions into a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unit under `{parent}` has an empty name")]
    EmptyName { parent: String },

    #[error("unit `{name}` under `{parent}` contains whitespace")]
    InvalidName { parent: String, name: String },

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Errors raised while loading definition files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
