// Render module: input line, candidate list and modeline composed by `full`.

pub mod full;
pub mod input;
pub mod list;
pub mod modeline;
pub mod styles;
pub mod util;

pub use full::render_full;
pub use input::render_input_line;
pub use list::render_candidates;
pub use modeline::render_modeline;
