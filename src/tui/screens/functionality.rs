//! Functionality tab: checkbox groups and two single-choice pickers.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::model::{
    ChoiceField, Event, FunctionalityField, FunctionalityState, Session, functionality_options,
};
use crate::tui::action::{Action, ScreenState};

/// Focused field and option cursor on the Functionality tab.
#[derive(Debug, Clone, Default)]
pub struct FunctionalityFormState {
    focus: usize,
    cursor: usize,
}

impl FunctionalityFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_field(&self) -> FunctionalityField {
        FunctionalityField::all()[self.focus]
    }

    /// Index of the highlighted option within the focused field's catalog.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus_first(&mut self) {
        self.focus = 0;
        self.cursor = 0;
    }

    pub fn focus_last(&mut self) {
        self.focus = FunctionalityField::all().len() - 1;
        self.cursor = 0;
    }

    fn options(&self) -> &'static [&'static str] {
        functionality_options(self.focused_field())
    }

    /// Checks/unchecks or chooses the highlighted option.
    fn select(&self, functionality: &FunctionalityState) -> Action {
        let Some(&option) = self.options().get(self.cursor) else {
            return Action::None;
        };
        let event = match self.focused_field() {
            FunctionalityField::Single(field) => Event::Choose(field, option.to_string()),
            FunctionalityField::Multi(field) => Event::SetChecked {
                field,
                option: option.to_string(),
                checked: !functionality.multi(field).contains(option),
            },
        };
        Action::Apply(event)
    }
}

impl ScreenState for FunctionalityFormState {
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Action {
        match key.code {
            KeyCode::Tab => {
                if self.focus + 1 == FunctionalityField::all().len() {
                    return Action::FocusOutput;
                }
                self.focus += 1;
                self.cursor = 0;
                Action::None
            }
            KeyCode::BackTab => {
                if self.focus == 0 {
                    return Action::FocusOutput;
                }
                self.focus -= 1;
                self.cursor = 0;
                Action::None
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.options().len() {
                    self.cursor += 1;
                }
                Action::None
            }
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Home => {
                self.cursor = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor = self.options().len().saturating_sub(1);
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.select(session.functionality()),
            _ => Action::None,
        }
    }
}

fn choice_hint(field: ChoiceField) -> &'static str {
    match field {
        ChoiceField::OrganizeBy => "Select organization type...",
        ChoiceField::DetailsFor => "Select page type...",
    }
}

/// One-line summary of a field's current selection.
fn summary(state: &FunctionalityState, field: FunctionalityField) -> (String, bool) {
    match field {
        FunctionalityField::Single(f) => match state.choice(f) {
            "" => (choice_hint(f).to_string(), false),
            value => (value.to_string(), true),
        },
        FunctionalityField::Multi(f) => {
            let choice = state.multi(f);
            if choice.is_empty() {
                ("none selected".to_string(), false)
            } else {
                (choice.joined(), true)
            }
        }
    }
}

/// Renders the field list, the focused field's options and the highlighted
/// option in full.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_functionality(
    state: &FunctionalityFormState,
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
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);

    let functionality = session.functionality();
    let mut lines = Vec::new();
    for (i, field) in FunctionalityField::all().iter().enumerate() {
        let is_focused = i == state.focus;
        let label_style = if is_focused && focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let (text, selected) = summary(functionality, *field);
        let value_style = if selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if is_focused { "\u{25b8} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label(), label_style),
        ]));
        lines.push(Line::from(Span::styled(format!("    {text}"), value_style)));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        fields_area,
    );

    let field = state.focused_field();
    let items: Vec<ListItem> = functionality_options(field)
        .iter()
        .map(|&option| {
            let checked = functionality.is_selected(field, option);
            let mark = match (field, checked) {
                (FunctionalityField::Single(_), true) => "(\u{2022}) ",
                (FunctionalityField::Single(_), false) => "( ) ",
                (FunctionalityField::Multi(_), true) => "[x] ",
                (FunctionalityField::Multi(_), false) => "[ ] ",
            };
            ListItem::new(format!("{mark}{option}"))
        })
        .collect();

    let [list_area, detail_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(4)]).areas(options_area);

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Space: select  \u{2191}/\u{2193}: move ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    let detail = functionality_options(field)
        .get(state.cursor)
        .copied()
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Span::styled(detail, Style::default().fg(Color::Gray)))
            .wrap(Wrap { trim: true }),
        detail_area,
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::model::{MultiField, Tab};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn send(state: &mut FunctionalityFormState, session: &mut Session, code: KeyCode) -> Action {
        let action = state.handle_key(press(code), session);
        if let Action::Apply(event) = &action {
            session.apply(event.clone());
        }
        action
    }

    /// Tabs forward until `field` has focus.
    fn focus_on(state: &mut FunctionalityFormState, session: &mut Session, field: FunctionalityField) {
        while state.focused_field() != field {
            send(state, session, KeyCode::Tab);
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn starts_on_listings() {
            let state = FunctionalityFormState::new();
            assert_eq!(
                state.focused_field(),
                FunctionalityField::Multi(MultiField::Listings)
            );
            assert_eq!(state.cursor(), 0);
        }

        #[test]
        fn tab_walks_all_fields_then_hands_off() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            for _ in 1..FunctionalityField::all().len() {
                assert_eq!(send(&mut state, &mut session, KeyCode::Tab), Action::None);
            }
            assert_eq!(
                state.focused_field(),
                FunctionalityField::Multi(MultiField::Additional)
            );
            assert_eq!(
                send(&mut state, &mut session, KeyCode::Tab),
                Action::FocusOutput
            );
        }

        #[test]
        fn tab_resets_cursor() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            send(&mut state, &mut session, KeyCode::Down);
            send(&mut state, &mut session, KeyCode::Tab);
            assert_eq!(state.cursor(), 0);
        }

        #[test]
        fn backtab_on_first_hands_off() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            assert_eq!(
                send(&mut state, &mut session, KeyCode::BackTab),
                Action::FocusOutput
            );
        }

        #[test]
        fn cursor_clamps_at_both_ends() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            send(&mut state, &mut session, KeyCode::Up);
            assert_eq!(state.cursor(), 0);
            for _ in 0..20 {
                send(&mut state, &mut session, KeyCode::Down);
            }
            assert_eq!(state.cursor(), 4);
            send(&mut state, &mut session, KeyCode::Home);
            assert_eq!(state.cursor(), 0);
            send(&mut state, &mut session, KeyCode::End);
            assert_eq!(state.cursor(), 4);
        }

        #[test]
        fn focus_last_targets_additional() {
            let mut state = FunctionalityFormState::new();
            state.focus_last();
            assert_eq!(
                state.focused_field(),
                FunctionalityField::Multi(MultiField::Additional)
            );
            state.focus_first();
            assert_eq!(
                state.focused_field(),
                FunctionalityField::Multi(MultiField::Listings)
            );
        }
    }

    mod selecting {
        use super::*;

        #[test]
        fn space_toggles_checkbox() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            send(&mut state, &mut session, KeyCode::Down);
            send(&mut state, &mut session, KeyCode::Char(' '));
            assert!(session.functionality().listings.contains("description"));

            send(&mut state, &mut session, KeyCode::Char(' '));
            assert!(session.functionality().listings.is_empty());
        }

        #[test]
        fn checkbox_order_follows_toggle_order() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            send(&mut state, &mut session, KeyCode::End);
            send(&mut state, &mut session, KeyCode::Char(' '));
            send(&mut state, &mut session, KeyCode::Home);
            send(&mut state, &mut session, KeyCode::Enter);
            assert_eq!(
                session.output(),
                "I need the website to have all these features and functionalities:\n- Listing with hours, Company profiles with name"
            );
        }

        #[test]
        fn enter_chooses_single_option() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            let organize = FunctionalityField::Single(ChoiceField::OrganizeBy);
            focus_on(&mut state, &mut session, organize);
            send(&mut state, &mut session, KeyCode::Down);
            send(&mut state, &mut session, KeyCode::Enter);
            assert_eq!(session.functionality().organize_by, "services");

            send(&mut state, &mut session, KeyCode::Down);
            send(&mut state, &mut session, KeyCode::Char(' '));
            assert_eq!(session.functionality().organize_by, "candidates");
        }

        #[test]
        fn organize_line_needs_categories() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            focus_on(
                &mut state,
                &mut session,
                FunctionalityField::Single(ChoiceField::OrganizeBy),
            );
            send(&mut state, &mut session, KeyCode::Enter);
            assert!(!session.output().contains("Organize"));

            send(&mut state, &mut session, KeyCode::Tab);
            send(&mut state, &mut session, KeyCode::Down);
            send(&mut state, &mut session, KeyCode::Char(' '));
            assert!(session.output().ends_with("\n- Organize businesses by All"));
        }

        #[test]
        fn other_keys_are_ignored() {
            let mut state = FunctionalityFormState::new();
            let mut session = Session::new(Tab::Functionality);
            assert_eq!(
                send(&mut state, &mut session, KeyCode::Char('x')),
                Action::None
            );
            assert!(session.functionality().is_empty());
        }
    }

    #[test]
    fn summary_describes_selection() {
        let mut functionality = FunctionalityState::default();
        let organize = FunctionalityField::Single(ChoiceField::OrganizeBy);
        let listings = FunctionalityField::Multi(MultiField::Listings);
        assert_eq!(
            summary(&functionality, organize),
            ("Select organization type...".to_string(), false)
        );
        assert_eq!(
            summary(&functionality, listings),
            ("none selected".to_string(), false)
        );
        functionality.set_choice(ChoiceField::OrganizeBy, "courses");
        functionality.set_checked(MultiField::Listings, "website", true);
        functionality.set_checked(MultiField::Listings, "hours", true);
        assert_eq!(
            summary(&functionality, organize),
            ("courses".to_string(), true)
        );
        assert_eq!(
            summary(&functionality, listings),
            ("website, hours".to_string(), true)
        );
    }

    #[test]
    fn draw_marks_checked_options() {
        let mut state = FunctionalityFormState::new();
        let mut session = Session::new(Tab::Functionality);
        send(&mut state, &mut session, KeyCode::Char(' '));

        let mut terminal = Terminal::new(TestBackend::new(120, 26)).unwrap();
        terminal
            .draw(|frame| draw_functionality(&state, &session, true, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut output = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                output.push_str(buf[(x, y)].symbol());
            }
            output.push('\n');
        }
        assert!(output.contains("Functionality & Features"));
        assert!(output.contains("1. Listings (Multiple Selection)"));
        assert!(output.contains("[x] Company profiles with name"));
        assert!(output.contains("[ ] description"));
    }
}
