//! Delete confirmation dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Delete confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    /// Render the delete confirmation dialog
    pub fn render(f: &mut Frame, app: &App) {
        let Some(id) = app.collection.pending_delete() else {
            return;
        };

        let confirm_area = LayoutManager::centered_rect(60, 25, f.area());
        f.render_widget(Clear, confirm_area);

        let ticket_preview = match app.collection.ticket_by_id(id) {
            Some(ticket) if ticket.description.chars().count() > 40 => {
                let truncated: String = ticket.description.chars().take(37).collect();
                format!("#{id} \"{truncated}...\"")
            }
            Some(ticket) => format!("#{} \"{}\"", id, ticket.description),
            None => format!("#{id}"),
        };

        let confirm_text = format!(
            "Delete ticket?\n\n{ticket_preview}\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel",
        );

        let confirm_paragraph = Paragraph::new(confirm_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("⚠️  Confirm Delete")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(confirm_paragraph, confirm_area);
    }
}
