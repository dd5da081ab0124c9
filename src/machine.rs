//! Keystroke-driven resolution of a command line against the catalog.
//!
//! The machine keeps the raw line, the start of the token being typed and the
//! sibling collection that token is matched against. Every edit re-runs the
//! prefix lookup; a unique exact match resolves the unit, descends into its
//! children and moves the machine one level deeper.

use std::ops::Range;

use tracing::trace;

use crate::catalog::Catalog;
use crate::cursor::ResultCursor;
use crate::error::IndexError;
use crate::index::{CollectionId, Matches};
use crate::key::{Key, KeyInput, Modifiers};
use crate::trie::{completion_suffix, names_match};
use crate::unit::{SearchableUnit, UnitId, UnitKind};

const SEPARATOR: char = ' ';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Started,
    CommandSpaceDefined,
    CommandDefined,
    OptionDefined,
    Completed,
    InputAborted,
    CancellationRequested,
}

impl State {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            State::Completed | State::InputAborted | State::CancellationRequested
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            State::Started => "started",
            State::CommandSpaceDefined => "space",
            State::CommandDefined => "command",
            State::OptionDefined => "option",
            State::Completed => "completed",
            State::InputAborted => "aborted",
            State::CancellationRequested => "cancel",
        }
    }
}

/// One resolved name and what the machine looked like before it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub unit: UnitId,
    /// Byte span of the name inside the buffer.
    pub span: Range<usize>,
    prev_state: State,
    prev_collection: CollectionId,
}

/// Raw text left over for parameter parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Range<usize>,
}

/// What a completed line resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub line: String,
    pub space: Option<UnitId>,
    pub commands: Vec<UnitId>,
    pub option: Option<UnitId>,
    pub tokens: Vec<Token>,
}

#[derive(Clone, Debug)]
pub struct InputStateMachine<'c> {
    catalog: &'c Catalog,
    buffer: String,
    token_start: usize,
    active: CollectionId,
    wildcard: String,
    prompt: String,
    guess: Option<UnitId>,
    state: State,
    found: ResultCursor<UnitId>,
    levels: Vec<Level>,
}

impl<'c> InputStateMachine<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        let mut m = InputStateMachine {
            catalog,
            buffer: String::new(),
            token_start: 0,
            active: catalog.root_collection(),
            wildcard: String::new(),
            prompt: String::new(),
            guess: None,
            state: State::Started,
            found: ResultCursor::new(),
            levels: Vec::new(),
        };
        m.seed_root();
        m
    }

    /// Back to the initial state; the catalog and its index are untouched.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.token_start = 0;
        self.wildcard.clear();
        self.prompt.clear();
        self.guess = None;
        self.levels.clear();
        self.active = self.catalog.root_collection();
        self.state = State::Started;
        self.seed_root();
    }

    // The root collection always exists, so an empty listing is the only
    // fallback needed here.
    fn seed_root(&mut self) {
        let all = self
            .catalog
            .find_by_prefix(self.active, "")
            .map(Matches::into_vec)
            .unwrap_or_default();
        self.found.reset(all);
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn active_collection(&self) -> CollectionId {
        self.active
    }

    pub fn guess(&self) -> Option<UnitId> {
        self.guess
    }

    pub fn match_count(&self) -> usize {
        self.found.len()
    }

    pub fn candidate_ids(&self) -> &[UnitId] {
        self.found.items()
    }

    pub fn candidates(&self) -> Vec<&'c str> {
        let catalog = self.catalog;
        self.found
            .items()
            .iter()
            .map(|&id| catalog[id].name.as_str())
            .collect()
    }

    pub fn cursor_position(&self) -> Option<usize> {
        self.found.position()
    }

    pub fn resolved(&self) -> &[Level] {
        &self.levels
    }

    /// Feeds one keystroke. Fails only when the catalog's index does not know
    /// a collection it handed out, which is a construction bug.
    pub fn process_key(&mut self, input: KeyInput) -> Result<(), IndexError> {
        if input.modifiers.intersects(Modifiers::CONTROL | Modifiers::ALT) {
            return Ok(());
        }

        match input.key {
            Key::Escape => self.stop(),
            _ if self.state.is_terminal() => {}
            Key::Enter => {
                if !input.modifiers.contains(Modifiers::SHIFT) {
                    self.complete();
                }
            }
            Key::Backspace => self.remove_last()?,
            Key::Tab => {
                if self.accept_prompt() {
                    self.update_resolution()?;
                }
            }
            Key::Up => self.cycle(false),
            Key::Down => self.cycle(true),
            Key::Char => match input.printable() {
                Some(SEPARATOR) => self.next_token()?,
                Some(ch) => {
                    self.buffer.push(ch);
                    self.update_resolution()?;
                }
                None => {}
            },
            Key::Other => {}
        }
        Ok(())
    }

    /// Feeds every character of `text` as a plain keystroke.
    pub fn type_str(&mut self, text: &str) -> Result<(), IndexError> {
        for ch in text.chars() {
            self.process_key(KeyInput::char(ch))?;
        }
        Ok(())
    }

    fn stop(&mut self) {
        let next = if self.state == State::Completed {
            State::CancellationRequested
        } else {
            State::InputAborted
        };
        trace!(from = self.state.label(), to = next.label(), "stop");
        self.state = next;
    }

    fn complete(&mut self) {
        trace!(from = self.state.label(), line = %self.buffer, "complete");
        self.state = State::Completed;
    }

    fn accept_prompt(&mut self) -> bool {
        if self.prompt.is_empty() {
            return false;
        }
        self.buffer.push_str(&self.prompt);
        true
    }

    fn next_token(&mut self) -> Result<(), IndexError> {
        self.buffer.push(SEPARATOR);
        self.token_start = self.buffer.len();
        self.guess = None;
        self.prompt.clear();
        self.wildcard.clear();
        let all = self.catalog.find_by_prefix(self.active, "")?;
        self.found.reset(all.into_vec());
        Ok(())
    }

    fn remove_last(&mut self) -> Result<(), IndexError> {
        if self.buffer.pop().is_none() {
            return Ok(());
        }
        let len = self.buffer.len();

        while self.levels.last().is_some_and(|l| l.span.end > len) {
            let Some(level) = self.levels.pop() else {
                break;
            };
            trace!(unit = %level.unit, to = level.prev_state.label(), "unresolved");
            self.state = level.prev_state;
            self.active = level.prev_collection;
            self.token_start = level.span.start;
        }

        if self.token_start > len {
            // a separator went away: rejoin the token in front of it
            let floor = self.levels.last().map_or(0, |l| l.span.end);
            self.token_start = self.buffer[floor..]
                .rfind(SEPARATOR)
                .map_or(floor, |i| floor + i + SEPARATOR.len_utf8());
        }
        self.update_resolution()
    }

    fn update_resolution(&mut self) -> Result<(), IndexError> {
        let catalog = self.catalog;
        self.wildcard = self.buffer.get(self.token_start..).unwrap_or("").to_string();
        let matches = catalog.find_by_prefix(self.active, &self.wildcard)?;
        let count = matches.count();
        self.found.reset(matches.into_vec());

        let first = self.found.first().copied();
        if let Some(id) = first {
            if count == 1 && names_match(&catalog[id].name, &self.wildcard) {
                return self.resolve(id);
            }
        }

        self.guess = first;
        self.prompt = match first {
            Some(id) => completion_suffix(&catalog[id].name, &self.wildcard).to_string(),
            None => String::new(),
        };
        Ok(())
    }

    fn resolve(&mut self, id: UnitId) -> Result<(), IndexError> {
        let catalog = self.catalog;
        let unit = &catalog[id];
        let prev_state = self.state;
        self.state = match self.state {
            State::Started => State::CommandSpaceDefined,
            State::CommandSpaceDefined => State::CommandDefined,
            State::CommandDefined if unit.is_parameter() => State::OptionDefined,
            other => other,
        };
        trace!(unit = %unit.name, from = prev_state.label(), to = self.state.label(), "resolved");

        self.levels.push(Level {
            unit: id,
            span: self.token_start..self.buffer.len(),
            prev_state,
            prev_collection: self.active,
        });
        self.active = unit.collection();
        self.token_start = self.buffer.len();
        self.wildcard.clear();
        self.prompt.clear();
        self.guess = None;

        let next = catalog.find_by_prefix(self.active, "")?;
        self.found.reset(next.into_vec());
        Ok(())
    }

    fn cycle(&mut self, forward: bool) {
        if self.found.len() <= 1 {
            return;
        }
        let picked = if forward {
            self.found.next().copied()
        } else {
            self.found.previous().copied()
        };
        if let Some(id) = picked {
            self.guess = Some(id);
            self.prompt = completion_suffix(&self.catalog[id].name, &self.wildcard).to_string();
        }
    }

    fn resolved_of<'a>(&'a self, pred: impl Fn(UnitKind) -> bool + 'a) -> impl Iterator<Item = UnitId> + 'a {
        let catalog = self.catalog;
        self.levels
            .iter()
            .map(|l| l.unit)
            .filter(move |&id| pred(catalog[id].kind))
    }

    pub fn command_space(&self) -> Option<UnitId> {
        self.resolved_of(|k| k == UnitKind::CommandSpace).next()
    }

    /// Command first, then each resolved subcommand.
    pub fn commands(&self) -> Vec<UnitId> {
        self.resolved_of(|k| k == UnitKind::Command).collect()
    }

    pub fn option(&self) -> Option<UnitId> {
        self.resolved_of(UnitKind::is_parameter).last()
    }

    /// Whitespace-separated spans of the buffer not taken by a resolved name.
    pub fn tokens(&self) -> Vec<Token> {
        let mut covered = vec![false; self.buffer.len()];
        for level in &self.levels {
            for flag in covered.iter_mut().take(level.span.end).skip(level.span.start) {
                *flag = true;
            }
        }

        let mut out = Vec::new();
        let mut start: Option<usize> = None;
        for (i, ch) in self.buffer.char_indices() {
            let free = ch != SEPARATOR && !covered[i];
            match (free, start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    out.push(self.token(s..i));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            out.push(self.token(s..self.buffer.len()));
        }
        out
    }

    fn token(&self, span: Range<usize>) -> Token {
        Token {
            text: self.buffer[span.clone()].to_string(),
            span,
        }
    }

    /// Resolved chain and leftover tokens; only available once completed.
    pub fn submission(&self) -> Option<Submission> {
        if self.state != State::Completed {
            return None;
        }
        Some(Submission {
            line: self.buffer.clone(),
            space: self.command_space(),
            commands: self.commands(),
            option: self.option(),
            tokens: self.tokens(),
        })
    }
}
