use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_CARET, STYLE_PROMPT, STYLE_TYPED};

const CARET: &str = "> ";

/// `> ` followed by the typed buffer and the faint completion prompt.
pub fn render_input_line(m: &Model, width: usize) -> String {
    let room = width.saturating_sub(CARET.chars().count());
    let buffer = m.machine.buffer();
    let typed_len = buffer.chars().count();
    // keep the tail of the buffer visible when it outgrows the line
    let typed: String = buffer.chars().skip(typed_len.saturating_sub(room)).collect();
    let left = room.saturating_sub(typed.chars().count());
    let prompt: String = m.machine.prompt().chars().take(left).collect();
    format!(
        "{}{}{}",
        STYLE_CARET.render(CARET),
        STYLE_TYPED.render(&typed),
        STYLE_PROMPT.render(&prompt)
    )
}
