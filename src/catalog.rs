//! Flattened unit hierarchy plus its sealed search index.

use std::ops::Index;

use tracing::debug;

use crate::definition::{CommandDef, Definitions, ParamDef};
use crate::error::{CatalogError, IndexError};
use crate::index::{CollectionId, Matches, SearchIndex, SearchIndexBuilder};
use crate::unit::{SearchableUnit, UnitId, UnitKind};

/// Key under which a sibling collection is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Root,
    Children(UnitId),
}

#[derive(Debug, Clone)]
pub struct Unit {
    pub name: String,
    pub description: String,
    pub kind: UnitKind,
    pub hidden: bool,
    pub parent: Option<UnitId>,
    children: Vec<UnitId>,
    collection: CollectionId,
}

impl Unit {
    /// Collection holding this unit's children.
    pub fn collection(&self) -> CollectionId {
        self.collection
    }
}

impl SearchableUnit for Unit {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn is_parameter(&self) -> bool {
        self.kind.is_parameter()
    }

    fn sub_units(&self) -> &[UnitId] {
        &self.children
    }
}

// unit before its children collection is known
struct Draft {
    name: String,
    description: String,
    kind: UnitKind,
    hidden: bool,
    parent: Option<UnitId>,
    children: Vec<UnitId>,
}

impl SearchableUnit for Draft {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn is_parameter(&self) -> bool {
        self.kind.is_parameter()
    }

    fn sub_units(&self) -> &[UnitId] {
        &self.children
    }
}

#[derive(Debug)]
pub struct Catalog {
    units: Vec<Unit>,
    roots: Vec<UnitId>,
    root_collection: CollectionId,
    index: SearchIndex<Scope, UnitId>,
}

impl Catalog {
    /// Flattens `defs`, registers every sibling collection and seals the index.
    pub fn build(defs: &Definitions) -> Result<Catalog, CatalogError> {
        let mut drafts: Vec<Draft> = Vec::new();
        let mut roots = Vec::with_capacity(defs.spaces.len());

        for space in &defs.spaces {
            let id = push_draft(
                &mut drafts,
                None,
                "<root>",
                &space.name,
                &space.description,
                UnitKind::CommandSpace,
                space.hidden,
            )?;
            for cmd in &space.commands {
                let child = push_command(&mut drafts, id, cmd)?;
                drafts[id.0].children.push(child);
            }
            roots.push(id);
        }

        let mut builder: SearchIndexBuilder<Scope, UnitId> = SearchIndexBuilder::new();
        let root_collection = builder.register(Scope::Root, roots.iter().map(|&id| (&drafts[id.0], id)))?;
        let mut collections = Vec::with_capacity(drafts.len());
        for (i, draft) in drafts.iter().enumerate() {
            let members = draft.children.iter().map(|&c| (&drafts[c.0], c));
            collections.push(builder.register(Scope::Children(UnitId(i)), members)?);
        }
        let index = builder.seal();

        let units: Vec<Unit> = drafts
            .into_iter()
            .zip(collections)
            .map(|(d, collection)| Unit {
                name: d.name,
                description: d.description,
                kind: d.kind,
                hidden: d.hidden,
                parent: d.parent,
                children: d.children,
                collection,
            })
            .collect();

        debug!(units = units.len(), spaces = roots.len(), collections = index.collection_count(), "catalog built");
        Ok(Catalog {
            units,
            roots,
            root_collection,
            index,
        })
    }

    pub fn root_collection(&self) -> CollectionId {
        self.root_collection
    }

    pub fn roots(&self) -> &[UnitId] {
        &self.roots
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.0)
    }

    pub fn index(&self) -> &SearchIndex<Scope, UnitId> {
        &self.index
    }

    pub fn find_by_prefix(&self, collection: CollectionId, wildcard: &str) -> Result<Matches<UnitId>, IndexError> {
        self.index.find_by_prefix(collection, wildcard)
    }

    /// Names from the command space down to `id`.
    pub fn path(&self, id: UnitId) -> Vec<&str> {
        let mut out = Vec::new();
        let mut cur = self.get(id);
        while let Some(u) = cur {
            out.push(u.name.as_str());
            cur = u.parent.and_then(|p| self.get(p));
        }
        out.reverse();
        out
    }
}

impl Index<UnitId> for Catalog {
    type Output = Unit;

    fn index(&self, id: UnitId) -> &Unit {
        &self.units[id.0]
    }
}

fn push_draft(
    drafts: &mut Vec<Draft>,
    parent: Option<UnitId>,
    parent_name: &str,
    name: &str,
    description: &str,
    kind: UnitKind,
    hidden: bool,
) -> Result<UnitId, CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::EmptyName {
            parent: parent_name.to_string(),
        });
    }
    // names are single tokens
    if name.chars().any(char::is_whitespace) {
        return Err(CatalogError::InvalidName {
            parent: parent_name.to_string(),
            name: name.to_string(),
        });
    }
    let id = UnitId(drafts.len());
    drafts.push(Draft {
        name: name.to_string(),
        description: description.to_string(),
        kind,
        hidden,
        parent,
        children: Vec::new(),
    });
    Ok(id)
}

fn push_command(drafts: &mut Vec<Draft>, parent: UnitId, cmd: &CommandDef) -> Result<UnitId, CatalogError> {
    let parent_name = drafts[parent.0].name.clone();
    let id = push_draft(
        drafts,
        Some(parent),
        &parent_name,
        &cmd.name,
        &cmd.description,
        UnitKind::Command,
        cmd.hidden,
    )?;
    let mut children = Vec::new();
    for sub in &cmd.subcommands {
        children.push(push_command(drafts, id, sub)?);
    }
    for arg in &cmd.arguments {
        children.push(push_param(drafts, id, &cmd.name, arg, UnitKind::Argument)?);
    }
    for opt in &cmd.options {
        children.push(push_param(drafts, id, &cmd.name, opt, UnitKind::Option)?);
    }
    drafts[id.0].children = children;
    Ok(id)
}

fn push_param(
    drafts: &mut Vec<Draft>,
    parent: UnitId,
    parent_name: &str,
    param: &ParamDef,
    kind: UnitKind,
) -> Result<UnitId, CatalogError> {
    push_draft(
        drafts,
        Some(parent),
        parent_name,
        &param.name,
        &param.description,
        kind,
        param.hidden,
    )
}
