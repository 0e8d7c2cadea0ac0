//! Sentence form shared by the UI, Logic and Database tabs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tui_textarea::{CursorMove, TextArea};

use crate::model::{Event, FormField, Session};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::field::{FieldView, draw_field};

/// Focus state for the sentence form, plus an editor for the focused slot.
#[derive(Debug, Clone, Default)]
pub struct PromptFormState {
    focus: usize,
    editor: TextArea<'static>,
    /// Slot the editor was last loaded from.
    editing: Option<FormField>,
}

impl PromptFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the field that has focus.
    pub fn focused_field(&self) -> FormField {
        FormField::all()[self.focus]
    }

    pub fn focus_first(&mut self) {
        self.focus = 0;
    }

    pub fn focus_last(&mut self) {
        self.focus = FormField::all().len() - 1;
    }

    /// Picks the next or previous catalog option for the focused field.
    fn pick(&self, session: &Session, forward: bool) -> Action {
        let Some(catalog) = session.tab().form_catalog() else {
            return Action::None;
        };
        let field = self.focused_field();
        let options = catalog.options(field);
        match cycle_option(options, session.form().get(field), forward) {
            Some(option) => Action::Apply(Event::SetField(field, option.to_string())),
            None => Action::None,
        }
    }

    /// Reloads the editor if focus moved or the slot changed outside it.
    ///
    /// The cursor goes to the end of the reloaded text.
    pub fn sync(&mut self, session: &Session) {
        let field = self.focused_field();
        let value = session.form().get(field);
        if self.is_editing(field, value) {
            return;
        }
        self.editor = slot_editor(field, value);
        self.editing = Some(field);
    }

    /// Returns `true` if the editor holds `field` with exactly `value`.
    fn is_editing(&self, field: FormField, value: &str) -> bool {
        self.editing == Some(field) && self.editor_text() == value
    }

    fn editor_text(&self) -> String {
        self.editor.lines().join("\n")
    }

    /// Returns the editor cursor as `(row, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.editor.cursor()
    }

    /// Forwards a key to the focused slot's editor.
    fn edit(&mut self, session: &Session, key: KeyEvent) -> Action {
        self.sync(session);
        if self.editor.input(key) {
            Action::Apply(Event::SetField(self.focused_field(), self.editor_text()))
        } else {
            Action::None
        }
    }
}

/// Builds the editor for one slot with the cursor at the end.
fn slot_editor(field: FormField, value: &str) -> TextArea<'static> {
    let mut editor = TextArea::new(value.split('\n').map(str::to_string).collect());
    editor.set_placeholder_text(field.placeholder());
    editor.set_placeholder_style(Style::default().fg(Color::DarkGray));
    editor.set_cursor_line_style(Style::default());
    editor.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    editor.move_cursor(CursorMove::Bottom);
    editor.move_cursor(CursorMove::End);
    editor
}

impl ScreenState for PromptFormState {
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Action {
        match key.code {
            KeyCode::Tab => {
                if self.focus + 1 == FormField::all().len() {
                    return Action::FocusOutput;
                }
                self.focus += 1;
                Action::None
            }
            KeyCode::BackTab => {
                if self.focus == 0 {
                    return Action::FocusOutput;
                }
                self.focus -= 1;
                Action::None
            }
            KeyCode::Down => self.pick(session, true),
            KeyCode::Up => self.pick(session, false),
            _ if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::None
            }
            // Only the Additional slot spans lines.
            KeyCode::Enter if self.focused_field() == FormField::Additional => {
                self.edit(session, key)
            }
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End => self.edit(session, key),
            _ => Action::None,
        }
    }
}

/// Steps through `options` starting from `current`, wrapping around.
///
/// A value that is not in the catalog (free text or unset) starts from the
/// first option going forward, or the last going backward.
fn cycle_option(options: &[&'static str], current: &str, forward: bool) -> Option<&'static str> {
    if options.is_empty() {
        return None;
    }
    let len = options.len();
    let next = match options.iter().position(|&o| o == current) {
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(options[next])
}

/// Renders the six sentence slots and the focused slot's catalog.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_prompt_form(
    state: &PromptFormState,
    session: &Session,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let tab = session.tab();
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" [{}] ", tab.badge()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(format!(" {} ", tab.heading())),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [fields_area, options_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(inner);

    let rows = Layout::vertical(FormField::all().iter().map(|field| match field {
        FormField::Additional => Constraint::Length(4),
        _ => Constraint::Length(3),
    }))
    .split(fields_area);
    for (i, field) in FormField::all().iter().enumerate() {
        let value = session.form().get(*field);
        let view = FieldView {
            label: field.label(),
            value,
            placeholder: field.placeholder(),
            focused: focused && i == state.focus,
        };
        if view.focused && state.is_editing(*field, value) {
            let block = Block::default()
                .title(view.label)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(view.border_color()));
            let inner = block.inner(rows[i]);
            frame.render_widget(block, rows[i]);
            frame.render_widget(&state.editor, inner);
        } else {
            let flattened = value.replace('\n', " \u{21b5} ");
            draw_field(
                &FieldView {
                    value: &flattened,
                    ..view
                },
                frame,
                rows[i],
            );
        }
    }

    let field = state.focused_field();
    let current = session.form().get(field);
    let options = session
        .tab()
        .form_catalog()
        .map(|c| c.options(field))
        .unwrap_or_default();
    let lines: Vec<Line> = options
        .iter()
        .map(|&option| {
            if option == current {
                Line::from(Span::styled(
                    format!("\u{25b8} {option}"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {option}"))
            }
        })
        .collect();
    let options_block = Block::default()
        .title(format!(" {} (\u{2191}/\u{2193}) ", field.select_hint()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .block(options_block)
            .wrap(Wrap { trim: false }),
        options_area,
    );
}
