//! Ticket edit dialog component

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use super::common::{self, shortcuts};

/// Ticket edit dialog component
pub struct TicketEditDialog;

impl TicketEditDialog {
    /// Render the ticket edit dialog
    pub fn render(f: &mut Frame, app: &App) {
        let Some(draft) = &app.edit_dialog else {
            return;
        };

        let dialog_area = LayoutManager::centered_rect_lines(60, 12, f.area());
        f.render_widget(Clear, dialog_area);

        let title = format!(" Update Ticket #{} ", draft.id);
        let dialog_block = common::create_dialog_block(&title, Color::Blue);
        f.render_widget(dialog_block, dialog_area);

        // Description input
        let description_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 1,
            dialog_area.width.saturating_sub(4),
            3,
        );
        let description = common::create_input_paragraph(&draft.description, "Description");
        f.render_widget(description, description_rect);

        // Status selection; the creation date is not editable and not shown
        let status_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + 4,
            dialog_area.width.saturating_sub(4),
            3,
        );
        let status_label = if draft.status { "Open" } else { "Closed" };
        let status = common::create_selection_paragraph(status_label.to_string(), "Status");
        f.render_widget(status, status_rect);

        // Error line, shown while the dialog stays open after a failure
        if let Some(error) = &draft.error {
            let error_rect = Rect::new(
                dialog_area.x + 2,
                dialog_area.y + 7,
                dialog_area.width.saturating_sub(4),
                2,
            );
            let error_paragraph = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            f.render_widget(error_paragraph, error_rect);
        }

        // Instructions
        let instructions_rect = Rect::new(
            dialog_area.x + 2,
            dialog_area.y + dialog_area.height.saturating_sub(2),
            dialog_area.width.saturating_sub(4),
            1,
        );
        let instructions = common::create_instructions_paragraph(&[
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::TAB_STATUS,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, instructions_rect);
    }
}
