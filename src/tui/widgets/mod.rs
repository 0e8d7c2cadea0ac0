//! Reusable TUI widgets.

pub mod field;
pub mod output;
pub mod status_bar;
pub mod tab_bar;

pub use field::{FieldView, draw_field};
pub use output::{OutputEditor, draw_output};
pub use status_bar::{StatusBarContext, draw_status_bar};
pub use tab_bar::draw_tab_bar;
