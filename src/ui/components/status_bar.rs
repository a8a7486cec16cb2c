//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let (status_text, status_color) = if app.loading {
            ("Loading tickets...".to_string(), Color::Yellow)
        } else if let Some(notice) = app.collection.notice() {
            (notice.text.clone(), Color::Green)
        } else if app.searching {
            (
                format!("/{}█  Enter: apply • Esc: close", app.collection.search_term()),
                Color::Cyan,
            )
        } else {
            let search = app.collection.search_term();
            let search_part = if search.is_empty() {
                String::new()
            } else {
                format!(" • search: \"{search}\"")
            };
            (
                format!(
                    "filter: {} • sort: {}{} • a: add • e: edit • d: delete • /: search • ?: help • q: quit",
                    app.collection.filter().status.label(),
                    app.collection.sort().label(),
                    search_part,
                ),
                Color::Gray,
            )
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
