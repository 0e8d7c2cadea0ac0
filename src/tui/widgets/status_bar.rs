//! Status bar widget: the active notification, or key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Notification, NotificationKind};

/// Hints shown while no notification is active.
const KEY_HINTS: &str = "F1: help  Ctrl+Y: copy  Ctrl+R: reset  Alt+1-4: tabs  Ctrl+Q: quit";

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Notification still within its display window, if any.
    pub notification: Option<Notification>,
}

/// Renders a one-line status bar.
///
/// - Success: `✔ Copied to clipboard! Your prompt has been copied successfully.` (Green)
/// - Failure: `✘ Failed to copy Please try again.` (Red, bold title)
/// - Otherwise the key hints in dark gray.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let line = match &ctx.notification {
        Some(n) => {
            let (icon, color) = match n.kind {
                NotificationKind::Success => ("\u{2714}", Color::Green),
                NotificationKind::Failure => ("\u{2718}", Color::Red),
            };
            let style = Style::default().fg(color);
            Line::from(vec![
                Span::styled(format!("{icon} "), style),
                Span::styled(n.title, style.add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}", n.description), style),
            ])
        }
        None => Line::from(Span::styled(
            KEY_HINTS,
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}
