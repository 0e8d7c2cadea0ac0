//! Editable generated-prompt area backed by `tui-textarea`.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

/// Shown while the buffer is empty.
pub const OUTPUT_PLACEHOLDER: &str = "Fill in the fields above to generate your prompt...";

/// The output buffer as the user sees and edits it.
#[derive(Debug, Clone)]
pub struct OutputEditor {
    textarea: TextArea<'static>,
    focused: bool,
}

impl Default for OutputEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputEditor {
    /// Creates an empty, unfocused editor.
    pub fn new() -> Self {
        let mut editor = Self {
            textarea: TextArea::default(),
            focused: false,
        };
        editor.style_textarea();
        editor
    }

    /// Replaces the whole text and puts the cursor at its end.
    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        self.textarea = TextArea::new(lines);
        self.style_textarea();
        self.move_to_end();
    }

    /// Returns the text with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Forwards a key to the textarea. Returns `true` if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    /// Moves the cursor after the last character.
    pub fn move_to_end(&mut self) {
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Returns the cursor as `(row, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.style_textarea();
    }

    fn style_textarea(&mut self) {
        self.textarea.set_placeholder_text(OUTPUT_PLACEHOLDER);
        self.textarea
            .set_placeholder_style(Style::default().fg(Color::DarkGray));
        self.textarea.set_cursor_line_style(Style::default());
        let cursor_style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
    }
}

/// Renders the editor with its title and the copy indicator.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_output(editor: &OutputEditor, copied: bool, frame: &mut Frame, area: Rect) {
    let border_color = if editor.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let indicator = if copied {
        Line::styled(" \u{2714} Copied! ", Style::default().fg(Color::Green))
    } else {
        Line::styled(" Copy: Ctrl+Y  Reset: Ctrl+R ", Style::default().fg(Color::DarkGray))
    };
    let block = Block::default()
        .title(" Generated Prompt ")
        .title_top(indicator.right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&editor.textarea, inner);
}
