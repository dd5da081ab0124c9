//! tabline - hierarchical command-line autocompletion
//!
//! A sealed prefix index over command spaces, commands, arguments and
//! options, a keystroke-driven state machine that resolves a line against
//! it, and a small terminal shell hosting that machine.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod catalog;
pub mod config;
pub mod cursor;
pub mod definition;
pub mod error;
pub mod index;
pub mod key;
pub mod machine;
pub mod trie;
pub mod unit;

pub mod ui;

pub use catalog::{Catalog, Scope, Unit};
pub use cursor::ResultCursor;
pub use error::{CatalogError, ConfigError, IndexError};
pub use index::{CollectionId, Matches, SearchIndex, SearchIndexBuilder};
pub use key::{Key, KeyInput, Modifiers};
pub use machine::{InputStateMachine, State, Submission};
pub use trie::UnitTrie;
pub use unit::{SearchableUnit, UnitId, UnitKind};
