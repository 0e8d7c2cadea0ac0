//! Help overlay: scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Session;
use crate::tui::action::{Action, ScreenState};

static GLOBAL_KEYS: &[(&str, &str)] = &[
    ("Alt+1..4", "switch to UI / Functionality / Logic / Database"),
    ("Alt+\u{2190} / Alt+\u{2192}", "previous / next tab"),
    ("Tab / Shift-Tab", "next / prev field (the prompt is the last stop)"),
    ("Ctrl+Y", "copy the generated prompt"),
    ("Ctrl+R", "reset this tab's fields, keep the prompt"),
    ("F1", "help"),
    ("Ctrl+Q / Ctrl+C", "quit"),
];

static FORM_KEYS: &[(&str, &str)] = &[
    ("\u{2191}/\u{2193}", "pick previous / next suggestion"),
    ("type", "enter custom text (replaces the pick)"),
    ("\u{2190}/\u{2192} Home/End", "move within the text"),
    ("Backspace / Delete", "delete before / after the cursor"),
    ("Enter", "new line (Additional only)"),
];

static FUNCTIONALITY_KEYS: &[(&str, &str)] = &[
    ("\u{2191}/\u{2193}", "move between options"),
    ("Home / End", "first / last option"),
    ("Space / Enter", "toggle checkbox or choose option"),
];

static OUTPUT_KEYS: &[(&str, &str)] = &[
    ("type", "edit the prompt freely"),
    ("Esc", "back to the fields"),
];

static HELP_KEYS: &[(&str, &str)] = &[("\u{2191}/\u{2193}", "scroll"), ("q / Esc / F1", "close")];

/// State for the help overlay.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    /// Creates a new [`HelpState`] scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1).min(max_scroll());
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::F(1) => Action::CloseHelp,
            _ => Action::None,
        }
    }
}

/// Last scroll offset that still shows a line of help.
fn max_scroll() -> u16 {
    u16::try_from(help_lines().len().saturating_sub(1)).unwrap_or(u16::MAX)
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<22}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

/// All help lines, in display order.
pub fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(build_section("Everywhere", GLOBAL_KEYS));
    lines.extend(build_section("UI / Logic / Database", FORM_KEYS));
    lines.extend(build_section("Functionality", FUNCTIONALITY_KEYS));
    lines.extend(build_section("Generated Prompt", OUTPUT_KEYS));
    lines.extend(build_section("Help", HELP_KEYS));
    lines
}

/// Renders the help overlay centred in `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let [popup] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(popup);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(help_lines())
            .block(block)
            .scroll((state.scroll, 0)),
        popup,
    );
}
