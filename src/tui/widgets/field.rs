//! Boxed single-value field with a label, placeholder and focus cursor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What a field box shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Dimmed text shown while `value` is empty.
    pub placeholder: &'a str,
    pub focused: bool,
}

impl<'a> FieldView<'a> {
    /// Border colour: yellow when focused, otherwise dark gray.
    pub fn border_color(&self) -> Color {
        if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        }
    }

    /// The spans making up the single content line.
    pub fn content(&self) -> Line<'a> {
        let mut spans = if self.value.is_empty() {
            vec![Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::raw(self.value)]
        };
        if self.focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }
}

/// Renders one field box in `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_field(field: &FieldView, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(field.label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(field.border_color()));
    frame.render_widget(Paragraph::new(field.content()).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view<'a>(value: &'a str, focused: bool) -> FieldView<'a> {
        FieldView {
            label: "1. Do",
            value,
            placeholder: "Or type custom action...",
            focused,
        }
    }

    #[test]
    fn empty_value_shows_placeholder() {
        let line = view("", false).content();
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, "Or type custom action...");
    }

    #[test]
    fn value_replaces_placeholder() {
        let line = view("Make", false).content();
        assert_eq!(line.spans[0].content, "Make");
    }

    #[test]
    fn focused_appends_cursor() {
        let line = view("Make", true).content();
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, "\u{2588}");
    }

    #[test]
    fn content_outlives_the_view() {
        let value = String::from("Card");
        let line = {
            let view = view(&value, false);
            view.content()
        };
        assert_eq!(line.spans[0].content, "Card");
    }

    #[test]
    fn border_color_follows_focus() {
        assert_eq!(view("", true).border_color(), Color::Yellow);
        assert_eq!(view("", false).border_color(), Color::DarkGray);
    }
}
