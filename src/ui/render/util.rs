use lipgloss::Style;

/// Cuts `s` to at most `width` chars.
pub fn clip(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

// lines are already clipped; pad each to `total_width` and the block to `rows`
pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, rows: usize) -> Vec<String> {
    let line_style = Style::new().width(total_width as i32);
    let mut normalized: Vec<String> = lines.into_iter().map(|l| line_style.render(&l)).collect();
    if normalized.len() > rows {
        normalized.truncate(rows);
    } else {
        while normalized.len() < rows {
            normalized.push(line_style.render(""));
        }
    }
    normalized
}
