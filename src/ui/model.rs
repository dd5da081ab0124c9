use crate::catalog::Catalog;
use crate::machine::{InputStateMachine, Submission};

pub const MODELINE_LINES: usize = 1;
pub const INPUT_LINES: usize = 1;
pub const RESERVED_LINES: usize = MODELINE_LINES + INPUT_LINES;
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// Shell state: the machine plus what the screen needs around it.
#[derive(Clone, Debug)]
pub struct Model {
    pub machine: InputStateMachine<'static>,
    // summaries of completed lines, oldest first
    pub transcript: Vec<String>,
    pub err: String,
    pub quit: bool,
    pub screen_width: usize,
    pub screen_height: usize,
}

pub fn initial_model(catalog: &'static Catalog) -> Model {
    Model {
        machine: InputStateMachine::new(catalog),
        transcript: Vec::new(),
        err: String::new(),
        quit: false,
        screen_width: DEFAULT_WIDTH,
        screen_height: DEFAULT_HEIGHT,
    }
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    pub fn mode(&self) -> String {
        let state = self.machine.state().label();
        match self.machine.resolved().last() {
            Some(level) => format!("{state}: {}", self.machine.catalog()[level.unit].name),
            None => state.to_string(),
        }
    }

    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }

    /// Candidate rows: name, kind label, description, and whether it is the
    /// current guess.
    pub fn candidate_rows(&self) -> Vec<(String, &'static str, String, bool)> {
        let catalog = self.machine.catalog();
        let guess = self.machine.guess();
        self.machine
            .candidate_ids()
            .iter()
            .map(|&id| {
                let unit = &catalog[id];
                (
                    unit.name.clone(),
                    unit.kind.label(),
                    unit.description.clone(),
                    guess == Some(id),
                )
            })
            .collect()
    }
}

/// One transcript line for a completed command line.
pub fn describe_submission(catalog: &Catalog, sub: &Submission) -> String {
    // every resolved level is a child of the one before it
    let deepest = sub.option.or(sub.commands.last().copied()).or(sub.space);
    let chain = deepest.map(|id| catalog.path(id)).unwrap_or_default();
    let mut out = if chain.is_empty() {
        "(unresolved)".to_string()
    } else {
        chain.join(" › ")
    };
    if !sub.tokens.is_empty() {
        let values: Vec<&str> = sub.tokens.iter().map(|t| t.text.as_str()).collect();
        out.push_str(&format!("  [{}]", values.join(" ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::demo_definitions;
    use crate::key::{Key, KeyInput};
    use crate::ui::Msg;
    use once_cell::sync::Lazy;

    static CATALOG: Lazy<Catalog> =
        Lazy::new(|| Catalog::build(&demo_definitions()).expect("demo catalog"));

    #[test]
    fn mode_follows_resolution() {
        let mut m = initial_model(&CATALOG);
        assert_eq!(m.mode(), "started");
        for ch in "demo".chars() {
            m.update(Msg::Key(KeyInput::char(ch)));
        }
        assert_eq!(m.mode(), "space: demo");
    }

    #[test]
    fn candidate_rows_mark_the_guess() {
        let mut m = initial_model(&CATALOG);
        for ch in "te".chars() {
            m.update(Msg::Key(KeyInput::char(ch)));
        }
        m.update(Msg::Key(KeyInput::new(Key::Down)));
        let rows = m.candidate_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "test");
        assert!(!rows[0].3);
        assert_eq!(rows[1].0, "teck");
        assert!(rows[1].3);
        assert_eq!(rows[1].1, "space");
    }

    #[test]
    fn submission_summary_lists_chain_and_values() {
        let mut machine = InputStateMachine::new(&CATALOG);
        machine.type_str("demo main 13 --weight 70").unwrap();
        machine.process_key(KeyInput::new(Key::Enter)).unwrap();
        let sub = machine.submission().unwrap();
        assert_eq!(
            describe_submission(&CATALOG, &sub),
            "demo › main › --weight  [13 70]"
        );
    }
}
