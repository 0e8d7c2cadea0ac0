use std::time::Duration;

use chrono::{DateTime, Utc};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::clipboard::{Clipboard, SystemClipboard, copy_prompt};
use crate::config::Config;
use crate::logging;
use crate::model::{Event, Notification, Session, Tab};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    FunctionalityFormState, HelpState, PromptFormState, draw_functionality, draw_help,
    draw_prompt_form,
};
use super::widgets::{OutputEditor, StatusBarContext, draw_output, draw_status_bar, draw_tab_bar};

/// How long the event loop waits for input before re-checking timers.
const TICK: Duration = Duration::from_millis(250);

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// The active tab's fields.
    Fields,
    /// The generated-prompt editor.
    Output,
}

/// A notification and when it was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ShownNotification {
    notification: Notification,
    shown_at: DateTime<Utc>,
}

/// Top-level application state.
pub struct App {
    session: Session,
    config: Config,
    clipboard: Box<dyn Clipboard>,
    focus: Focus,
    prompt_form: PromptFormState,
    functionality_form: FunctionalityFormState,
    output: OutputEditor,
    help: Option<HelpState>,
    notification: Option<ShownNotification>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the configured start tab with empty state.
    pub fn new(config: Config, clipboard: Box<dyn Clipboard>) -> Self {
        let session = Session::new(config.start_tab);
        let mut prompt_form = PromptFormState::new();
        prompt_form.sync(&session);
        Self {
            session,
            config,
            clipboard,
            focus: Focus::Fields,
            prompt_form,
            functionality_form: FunctionalityFormState::new(),
            output: OutputEditor::new(),
            help: None,
            notification: None,
            should_quit: false,
        }
    }

    /// Loads config, installs file logging if it can and builds an `App` on
    /// the system clipboard.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn bootstrap() -> Result<Self, AppError> {
        let config = Config::load()?;
        let log_path = logging::init_or_warn(&config);
        tracing::info!(
            log = ?log_path,
            config = ?Config::default_path(),
            start_tab = %config.start_tab,
            "promptgen starting"
        );
        Ok(Self::new(config, Box::new(SystemClipboard::new())))
    }

    /// Main event loop: draw → poll event → dispatch → expire timers → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)? {
                if let TermEvent::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            self.tick(Utc::now());
        }
        tracing::info!("promptgen exiting");
        Ok(())
    }

    /// Renders tab bar, active form, output editor, status bar and help.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [tabs_area, form_area, output_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(9),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let now = Utc::now();
        let fields_focused = self.focus == Focus::Fields;

        draw_tab_bar(self.session.tab(), frame, tabs_area);
        if self.session.tab().is_form() {
            draw_prompt_form(
                &self.prompt_form,
                &self.session,
                fields_focused,
                frame,
                form_area,
            );
        } else {
            draw_functionality(
                &self.functionality_form,
                &self.session,
                fields_focused,
                frame,
                form_area,
            );
        }
        draw_output(&self.output, self.copied(now), frame, output_area);
        draw_status_bar(&self.status_bar_context(now), frame, status_area);

        if let Some(help) = &self.help {
            draw_help(help, frame, frame.area());
        }
    }

    /// Handles a key event at the current time.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Utc::now());
    }

    /// Handles a key event: global keys first, then help, then the focused area.
    pub fn handle_key_at(&mut self, key: KeyEvent, now: DateTime<Utc>) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = match self.global_action(key) {
            Some(action) => action,
            None => self.dispatch(key),
        };
        self.perform(action, now);
        self.prompt_form.sync(&self.session);
    }

    /// Keys that work regardless of focus.
    fn global_action(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers == KeyModifiers::CONTROL {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('c') => return Some(Action::Quit),
                KeyCode::Char('r') if self.help.is_none() => return Some(Action::Reset),
                KeyCode::Char('y') if self.help.is_none() => return Some(Action::Copy),
                _ => {}
            }
        }
        if self.help.is_some() {
            return None;
        }
        if key.modifiers == KeyModifiers::ALT {
            match key.code {
                KeyCode::Char(ch @ '1'..='4') => {
                    let index = ch as usize - '1' as usize;
                    return Tab::all().get(index).copied().map(Action::SwitchTab);
                }
                KeyCode::Right => {
                    return Some(Action::SwitchTab(cycle(Tab::all(), self.session.tab(), true)));
                }
                KeyCode::Left => {
                    return Some(Action::SwitchTab(cycle(Tab::all(), self.session.tab(), false)));
                }
                _ => {}
            }
        }
        match key.code {
            KeyCode::F(1) => Some(Action::ShowHelp),
            _ => None,
        }
    }

    /// Routes a key to the help overlay, the output editor or the active form.
    fn dispatch(&mut self, key: KeyEvent) -> Action {
        if let Some(help) = self.help.as_mut() {
            return help.handle_key(key, &self.session);
        }
        match self.focus {
            Focus::Output => match key.code {
                KeyCode::Tab => Action::FocusFirstField,
                KeyCode::BackTab => Action::FocusLastField,
                KeyCode::Esc => Action::FocusLastField,
                _ => {
                    if self.output.input(key) {
                        Action::Apply(Event::EditOutput(self.output.text()))
                    } else {
                        Action::None
                    }
                }
            },
            Focus::Fields => {
                if self.session.tab().is_form() {
                    self.prompt_form.handle_key(key, &self.session)
                } else {
                    self.functionality_form.handle_key(key, &self.session)
                }
            }
        }
    }

    /// Applies an action to global state.
    fn perform(&mut self, action: Action, now: DateTime<Utc>) {
        match action {
            Action::None => {}
            Action::Apply(event) => self.apply(event),
            Action::SwitchTab(tab) => {
                tracing::debug!(from = %self.session.tab(), to = %tab, "switching tab");
                self.apply(Event::SwitchTab(tab));
            }
            Action::FocusOutput => self.set_focus(Focus::Output),
            Action::FocusFirstField => {
                self.prompt_form.focus_first();
                self.functionality_form.focus_first();
                self.set_focus(Focus::Fields);
            }
            Action::FocusLastField => {
                self.prompt_form.focus_last();
                self.functionality_form.focus_last();
                self.set_focus(Focus::Fields);
            }
            Action::Reset => {
                tracing::info!(tab = %self.session.tab(), "resetting fields");
                self.session.apply(Event::Reset);
                self.output.set_text(self.session.output());
                self.set_focus(Focus::Output);
                self.output.move_to_end();
            }
            Action::Copy => {
                let notification = copy_prompt(self.clipboard.as_mut(), self.session.output());
                self.notification = Some(ShownNotification {
                    notification,
                    shown_at: now,
                });
            }
            Action::ShowHelp => self.help = Some(HelpState::new()),
            Action::CloseHelp => self.help = None,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Feeds `event` to the session and mirrors a refreshed buffer into the editor.
    fn apply(&mut self, event: Event) {
        if self.session.apply(event) {
            tracing::debug!(prompt = self.session.output(), "prompt regenerated");
            self.output.set_text(self.session.output());
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.output.set_focused(focus == Focus::Output);
    }

    /// Drops the notification once its display window has passed.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        let expired = self.notification.as_ref().is_some_and(|shown| {
            now - shown.shown_at >= self.config.notification_duration()
        });
        if expired {
            self.notification = None;
        }
    }

    /// Returns `true` while the "Copied!" indicator should show.
    pub fn copied(&self, now: DateTime<Utc>) -> bool {
        self.notification.as_ref().is_some_and(|shown| {
            shown.notification.is_success()
                && now - shown.shown_at < self.config.copied_indicator_duration()
        })
    }

    /// Builds the status bar context at `now`.
    pub fn status_bar_context(&self, now: DateTime<Utc>) -> StatusBarContext {
        let notification = self
            .notification
            .as_ref()
            .filter(|shown| now - shown.shown_at < self.config.notification_duration())
            .map(|shown| shown.notification.clone());
        StatusBarContext { notification }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the output editor.
    pub fn output(&self) -> &OutputEditor {
        &self.output
    }

    /// Returns the focused area.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the active notification, if any.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().map(|shown| &shown.notification)
    }

    /// Returns `true` if the help overlay is open.
    pub fn help_open(&self) -> bool {
        self.help.is_some()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Cycles through a slice to find the next or previous element.
fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}
