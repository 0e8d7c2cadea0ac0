//! TUI screen implementations.

pub mod functionality;
pub mod help;
pub mod prompt_form;

pub use functionality::{FunctionalityFormState, draw_functionality};
pub use help::{HelpState, draw_help};
pub use prompt_form::{PromptFormState, draw_prompt_form};
