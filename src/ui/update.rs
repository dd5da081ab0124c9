use tracing::{error, info};

use crate::key::KeyInput;
use crate::machine::State;
use crate::ui::model::{Model, describe_submission};

pub fn handle_update(m: &mut Model, msg: crate::ui::Msg) {
    match msg {
        crate::ui::Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        crate::ui::Msg::Key(input) => handle_key(m, input),
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.screen_height = height;
}

fn handle_key(m: &mut Model, input: KeyInput) {
    if let Err(e) = m.machine.process_key(input) {
        error!(error = %e, "keystroke rejected");
        m.err = e.to_string();
        return;
    }
    m.err.clear();

    match m.machine.state() {
        State::Completed => finish_line(m),
        State::InputAborted => m.quit = true,
        // the machine is reset on completion, so ESC never sees Completed here
        _ => {}
    }
}

// Completed lines are summarized into the transcript and the machine starts over.
fn finish_line(m: &mut Model) {
    if let Some(sub) = m.machine.submission() {
        let summary = describe_submission(m.machine.catalog(), &sub);
        info!(line = %sub.line, %summary, "line submitted");
        if !sub.line.trim().is_empty() {
            m.transcript.push(summary);
        }
    }
    m.machine.reset();
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::definition::demo_definitions;
    use crate::key::{Key, KeyInput};
    use crate::machine::State;
    use crate::ui::Msg;
    use crate::ui::model::initial_model;
    use once_cell::sync::Lazy;

    static CATALOG: Lazy<Catalog> =
        Lazy::new(|| Catalog::build(&demo_definitions()).expect("demo catalog"));

    fn type_line(m: &mut crate::ui::Model, s: &str) {
        for ch in s.chars() {
            m.update(Msg::Key(KeyInput::char(ch)));
        }
    }

    #[test]
    fn enter_records_the_line_and_resets() {
        let mut m = initial_model(&CATALOG);
        type_line(&mut m, "demo ping");
        m.update(Msg::Key(KeyInput::new(Key::Enter)));
        assert_eq!(m.transcript, vec!["demo › ping".to_string()]);
        assert_eq!(m.machine.state(), State::Started);
        assert_eq!(m.machine.buffer(), "");
        assert!(!m.quit);
    }

    #[test]
    fn empty_enter_is_not_recorded() {
        let mut m = initial_model(&CATALOG);
        m.update(Msg::Key(KeyInput::new(Key::Enter)));
        assert!(m.transcript.is_empty());
        assert_eq!(m.machine.state(), State::Started);
    }

    #[test]
    fn escape_requests_quit() {
        let mut m = initial_model(&CATALOG);
        type_line(&mut m, "de");
        m.update(Msg::Key(KeyInput::new(Key::Escape)));
        assert!(m.quit);
        assert_eq!(m.machine.state(), State::InputAborted);
    }

    #[test]
    fn escape_after_a_submitted_line_quits() {
        let mut m = initial_model(&CATALOG);
        type_line(&mut m, "demo ping");
        m.update(Msg::Key(KeyInput::new(Key::Enter)));
        m.update(Msg::Key(KeyInput::new(Key::Escape)));
        assert!(m.quit);
        assert_eq!(m.machine.state(), State::InputAborted);
        assert_eq!(m.transcript, vec!["demo › ping".to_string()]);
    }

    #[test]
    fn window_size_is_tracked() {
        let mut m = initial_model(&CATALOG);
        m.update(Msg::WindowSize {
            width: 100,
            height: 10,
        });
        assert_eq!((m.screen_width, m.screen_height), (100, 10));
    }
}
