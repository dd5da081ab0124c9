use crate::ui::model::{DEFAULT_WIDTH, Model};
use crate::ui::render::styles::STYLE_MODELINE;
use lipgloss::Color;

// key/description pairs, dropped from the right when space runs out
const PAIRS: [(&str, &str); 5] = [
    ("⇥", "accept"),
    ("↑↓", "cycle"),
    ("⌫", "undo"),
    ("⏎", "run"),
    ("⎋", "quit"),
];

fn plain_width(pairs: &[(&str, &str)]) -> usize {
    let sep = 2 * pairs.len().saturating_sub(1);
    pairs
        .iter()
        .map(|(k, d)| d.chars().count() + 1 + k.chars().count())
        .sum::<usize>()
        + sep
}

/// Mode block, key hints and the match count, padded to the screen width.
pub fn render_modeline(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = inner_style
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true);
    let mode_style = inner_style.clone().bold(true);
    let count_style = inner_style.clone().faint(true);

    let mode = m.mode();
    let count = match m.machine.match_count() {
        1 => "1 match".to_string(),
        n => format!("{n} matches"),
    };
    // one cell of padding each side plus " | " and a gap before the count
    let fixed = 2 + mode.chars().count() + 3 + 1 + count.chars().count();
    let avail = total_width.saturating_sub(fixed);

    let mut keep = PAIRS.len();
    while keep > 0 && plain_width(&PAIRS[..keep]) > avail {
        keep -= 1;
    }
    let hints = PAIRS[..keep]
        .iter()
        .map(|(k, d)| format!("{}{}{}", inner_style.render(d), inner_style.render(":"), key_style.render(k)))
        .collect::<Vec<_>>()
        .join(&inner_style.render("  "));
    let filler = avail.saturating_sub(plain_width(&PAIRS[..keep])) + 1;

    let line = if fixed > total_width {
        // too narrow for anything but the mode
        mode_style.render(&mode.chars().take(total_width.saturating_sub(2)).collect::<String>())
    } else {
        format!(
            "{}{}{}{}{}",
            mode_style.render(&mode),
            inner_style.render(" | "),
            hints,
            inner_style.render(&" ".repeat(filler)),
            count_style.render(&count)
        )
    };
    STYLE_MODELINE.clone().width(total_width as i32).render(&line)
}
