//! Prefix tree over unit names.
//!
//! Nodes live in a flat arena and refer to their children by index. Children
//! keep insertion order so enumeration follows declaration order, not
//! alphabetical order. Characters are folded to lower case on insertion and on
//! lookup.

use crate::unit::SearchableUnit;

/// Index of a node in a [`UnitTrie`] arena.
pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Terminal<T> {
    unit: T,
    hidden: bool,
}

#[derive(Clone, Debug)]
struct Node<T> {
    children: Vec<(char, NodeId)>,
    terminal: Option<Terminal<T>>,
}

impl<T> Node<T> {
    fn structural() -> Self {
        Node {
            children: Vec::new(),
            terminal: None,
        }
    }

    fn child(&self, ch: char) -> Option<NodeId> {
        self.children
            .iter()
            .find_map(|&(c, id)| if c == ch { Some(id) } else { None })
    }
}

/// One char in, one char out: multi-char lower-case expansions keep only
/// their first char, so folded and raw names have the same length.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lower-cased character stream used for both keys and lookups.
pub fn fold_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(fold)
}

/// Case-insensitive name equality under the trie's folding policy.
pub fn names_match(a: &str, b: &str) -> bool {
    fold_chars(a).eq(fold_chars(b))
}

/// Remainder of `name` once the typed `wildcard` is accounted for.
pub fn completion_suffix<'a>(name: &'a str, wildcard: &str) -> &'a str {
    let typed = wildcard.chars().count();
    match name.char_indices().nth(typed) {
        Some((at, _)) => &name[at..],
        None => "",
    }
}

#[derive(Clone, Debug)]
pub struct UnitTrie<T> {
    nodes: Vec<Node<T>>,
}

impl<T: Copy> Default for UnitTrie<T> {
    fn default() -> Self {
        Self::create_root()
    }
}

impl<T: Copy> UnitTrie<T> {
    /// Empty trie holding a single structural root.
    pub fn create_root() -> Self {
        UnitTrie {
            nodes: vec![Node::structural()],
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Inserts `unit` under its folded name and returns the handle previously
    /// stored at that path, if any (the new handle replaces it).
    pub fn populate<U>(&mut self, unit: &U, handle: T) -> Option<T>
    where
        U: SearchableUnit + ?Sized,
    {
        let mut cur = ROOT;
        for ch in fold_chars(unit.name()) {
            cur = match self.nodes[cur].child(ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::structural());
                    self.nodes[cur].children.push((ch, next));
                    next
                }
            };
        }
        let previous = self.nodes[cur].terminal.map(|t| t.unit);
        self.nodes[cur].terminal = Some(Terminal {
            unit: handle,
            hidden: unit.is_hidden(),
        });
        previous
    }

    /// Follows `prefix` from the root; `None` as soon as a character has no edge.
    pub fn descend(&self, prefix: &str) -> Option<NodeId> {
        let mut cur = ROOT;
        for ch in fold_chars(prefix) {
            cur = self.nodes[cur].child(ch)?;
        }
        Some(cur)
    }

    /// Depth-first, pre-order collection of every visible terminal below `node`.
    pub fn collect_terminals(&self, node: NodeId) -> Vec<T> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            let Some(n) = self.nodes.get(id) else {
                continue;
            };
            if let Some(t) = n.terminal {
                if !t.hidden {
                    out.push(t.unit);
                }
            }
            // reversed so the first-inserted child is visited first
            stack.extend(n.children.iter().rev().map(|&(_, child)| child));
        }
        out
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
