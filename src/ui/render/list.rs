use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_DESC, STYLE_GUESS, STYLE_KIND, STYLE_LABEL};
use crate::ui::render::util::clip;

const KIND_WIDTH: usize = 5;

/// One line per candidate, at most `rows` of them, scrolled so the guess
/// stays visible.
pub fn render_candidates(m: &Model, width: usize, rows: usize) -> Vec<String> {
    let items = m.candidate_rows();
    if rows == 0 || items.is_empty() {
        return Vec::new();
    }
    let start = match m.machine.cursor_position() {
        Some(pos) if pos >= rows => pos + 1 - rows,
        _ => 0,
    };
    let name_width = items.iter().map(|(n, ..)| n.chars().count()).max().unwrap_or(0);
    let kind_width = KIND_WIDTH;

    items
        .iter()
        .skip(start)
        .take(rows)
        .map(|(name, kind, desc, is_guess)| {
            let marker = if *is_guess { "› " } else { "  " };
            let name_style = if *is_guess { &*STYLE_GUESS } else { &*STYLE_LABEL };
            let used = 2 + name_width + 2 + kind_width + 1;
            if used > width {
                // too narrow for the side columns
                return format!(
                    "{}{}",
                    name_style.render(marker),
                    name_style.render(&clip(name, width.saturating_sub(2)))
                );
            }
            let padded = format!("{name:<name_width$}");
            let kind = format!("{kind:<kind_width$}");
            let desc = clip(desc, width - used);
            format!(
                "{}{}  {} {}",
                name_style.render(marker),
                name_style.render(&padded),
                STYLE_KIND.render(&kind),
                STYLE_DESC.render(&desc)
            )
        })
        .collect()
}
