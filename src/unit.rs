use std::fmt;

/// Capability every indexable entity exposes to the engine.
///
/// Implemented by the catalog's units; the trie and the index only ever look
/// at the name and the hidden flag, the state machine also at `is_parameter`.
pub trait SearchableUnit {
    /// Match key. Never empty.
    fn name(&self) -> &str;

    /// Hidden units are indexed but never enumerated or completed.
    fn is_hidden(&self) -> bool;

    /// True only for argument and option leaves.
    fn is_parameter(&self) -> bool;

    /// Ordered children; empty for leaf parameters.
    fn sub_units(&self) -> &[UnitId];
}

/// Index of a unit inside a catalog arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub(crate) usize);

impl UnitId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    CommandSpace,
    Command,
    Argument,
    Option,
}

impl UnitKind {
    pub fn is_parameter(self) -> bool {
        matches!(self, UnitKind::Argument | UnitKind::Option)
    }

    pub fn label(self) -> &'static str {
        match self {
            UnitKind::CommandSpace => "space",
            UnitKind::Command => "cmd",
            UnitKind::Argument => "arg",
            UnitKind::Option => "opt",
        }
    }
}
