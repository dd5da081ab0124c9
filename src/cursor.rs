/// Circular view over the snapshot of one lookup.
///
/// The cursor starts unset; `next` from unset lands on the first element and
/// `previous` on the last one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCursor<T> {
    items: Vec<T>,
    pos: Option<usize>,
}

impl<T> Default for ResultCursor<T> {
    fn default() -> Self {
        ResultCursor {
            items: Vec::new(),
            pos: None,
        }
    }
}

impl<T> ResultCursor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the previous snapshot and wraps `items`.
    pub fn reset(&mut self, items: Vec<T>) {
        self.items = items;
        self.pos = None;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self) -> Option<usize> {
        self.pos
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Moves to index 0.
    pub fn first(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.pos = Some(0);
        self.items.first()
    }

    pub fn current(&self) -> Option<&T> {
        self.pos.and_then(|p| self.items.get(p))
    }

    pub fn next(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let next = match self.pos {
            Some(p) if p + 1 < self.items.len() => p + 1,
            _ => 0,
        };
        self.pos = Some(next);
        self.items.get(next)
    }

    pub fn previous(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let prev = match self.pos {
            Some(p) if p > 0 && p <= self.items.len() => p - 1,
            _ => self.items.len() - 1,
        };
        self.pos = Some(prev);
        self.items.get(prev)
    }
}
