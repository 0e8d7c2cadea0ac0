//! Tab bar listing the four prompt-building tabs.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};

use crate::model::Tab;

/// Renders the tab bar with `active` highlighted.
///
/// Titles are prefixed with their Alt+digit shortcut.
#[mutants::skip]
pub fn draw_tab_bar(active: Tab, frame: &mut Frame, area: Rect) {
    let titles = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()));

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" AI Prompt Generator ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(active: Tab) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| draw_tab_bar(active, frame, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push_str(buf[(x, y)].symbol());
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn shows_all_tab_titles() {
        let output = render(Tab::Ui);
        for tab in Tab::all() {
            assert!(output.contains(tab.title()), "missing {}", tab.title());
        }
    }

    #[test]
    fn shows_shortcut_digits() {
        let output = render(Tab::Logic);
        assert!(output.contains("1 UI"));
        assert!(output.contains("4 Database"));
    }
}
