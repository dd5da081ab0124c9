// UI module root: the interactive shell hosting the input state machine

pub mod model;
pub mod render;
pub mod run;
pub mod update;

pub use model::{Model, describe_submission, initial_model};
pub use render::{render_candidates, render_full, render_input_line, render_modeline};
pub use run::{complete_line, run};
pub use update::handle_update;

use crate::key::KeyInput;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    Key(KeyInput),
}
