use tracing::debug;

use crate::catalog::Catalog;
use crate::error::IndexError;
use crate::machine::InputStateMachine;

/// Feeds `line` into a fresh machine and returns the names it would offer
/// next, in listing order.
pub fn complete_line(catalog: &Catalog, line: &str) -> Result<Vec<String>, IndexError> {
    let mut machine = InputStateMachine::new(catalog);
    machine.type_str(line)?;
    debug!(
        line,
        state = machine.state().label(),
        matches = machine.match_count(),
        "completed non-interactively"
    );
    Ok(machine.candidates().into_iter().map(str::to_string).collect())
}

// Shell words are joined with single spaces; a trailing empty word keeps the
// trailing separator so the next level is listed.
pub fn run(catalog: &Catalog, words: &[String]) -> Result<String, IndexError> {
    let line = words.join(" ");
    Ok(complete_line(catalog, &line)?.join("\n"))
}
