use crate::ui::model::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Model, RESERVED_LINES};
use crate::ui::render::styles::{STYLE_ERROR, STYLE_TRANSCRIPT};
use crate::ui::render::util::{clip, normalize_and_pad};

/// Transcript, input line, candidates, then the modeline on the last row.
pub fn render_full(m: &Model) -> String {
    let width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let height = if m.screen_height > 0 {
        m.screen_height
    } else {
        DEFAULT_HEIGHT
    };
    let body_rows = height.saturating_sub(RESERVED_LINES);

    let mut notes: Vec<String> = Vec::new();
    if !m.err.is_empty() {
        notes.push(STYLE_ERROR.render(&clip(&m.err, width)));
    }
    let candidates = crate::ui::render::list::render_candidates(m, width, body_rows.saturating_sub(notes.len()));
    // transcript takes whatever rows the candidates leave, newest last
    let room = body_rows.saturating_sub(candidates.len() + notes.len());
    let history: Vec<String> = m
        .transcript
        .iter()
        .skip(m.transcript.len().saturating_sub(room))
        .map(|l| STYLE_TRANSCRIPT.render(&clip(l, width)))
        .collect();

    let mut lines = history;
    lines.push(crate::ui::render::input::render_input_line(m, width));
    lines.extend(notes);
    lines.extend(candidates);
    let mut out = normalize_and_pad(lines, width, height.saturating_sub(1));
    let modeline = crate::ui::render::modeline::render_modeline(m);
    out.push(modeline.lines().next().unwrap_or("").to_string());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::definition::demo_definitions;
    use crate::key::{Key, KeyInput};
    use crate::ui::Msg;
    use once_cell::sync::Lazy;
    use regex::Regex;

    static CATALOG: Lazy<Catalog> =
        Lazy::new(|| Catalog::build(&demo_definitions()).expect("demo catalog"));

    // helper to strip ANSI CSI sequences from rendered output for assertions
    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn sized(w: usize, h: usize) -> crate::ui::Model {
        let mut m = crate::ui::initial_model(&CATALOG);
        m.update(Msg::WindowSize {
            width: w,
            height: h,
        });
        m
    }

    #[test]
    fn render_full_matches_height() {
        let sizes = [(80usize, 24usize), (100usize, 10usize), (40usize, 6usize)];
        for (w, h) in sizes.iter().cloned() {
            let m = sized(w, h);
            let stripped = strip_ansi(&m.render_full());
            let lines: Vec<&str> = stripped.lines().collect();
            assert_eq!(
                lines.len(),
                h,
                "height mismatch for {w}x{h}: got {} lines\n<<output>>\n{stripped}",
                lines.len()
            );
        }
    }

    #[test]
    fn modeline_is_last_line() {
        let m = sized(80, 24);
        let stripped = strip_ansi(&m.render_full());
        let last = stripped.lines().last().unwrap_or("").to_string();
        let modeline = strip_ansi(&crate::ui::render_modeline(&m));
        assert_eq!(last, modeline.lines().next().unwrap_or(""));
    }

    #[test]
    fn fresh_screen_lists_command_spaces_under_the_input() {
        let m = sized(80, 24);
        let stripped = strip_ansi(&m.render_full());
        let lines: Vec<&str> = stripped.lines().collect();
        assert!(lines[0].starts_with("> "), "got `{}`", lines[0]);
        assert!(lines[1].trim_start().starts_with("demo"));
        assert!(stripped.contains("slick"));
    }

    #[test]
    fn transcript_appears_above_the_input() {
        let mut m = sized(80, 24);
        for ch in "demo ping".chars() {
            m.update(Msg::Key(KeyInput::char(ch)));
        }
        m.update(Msg::Key(KeyInput::new(Key::Enter)));
        let stripped = strip_ansi(&m.render_full());
        let lines: Vec<&str> = stripped.lines().collect();
        assert!(lines[0].starts_with("demo › ping"), "got `{}`", lines[0]);
        assert!(lines[1].starts_with("> "));
    }
}
