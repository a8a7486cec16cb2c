//! Ticket table component

use ratatui::{
    layout::{Alignment, Constraint},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::super::app::App;

/// Ticket table component
pub struct TicketsTable;

impl TicketsTable {
    /// Render the ticket table
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &mut App) {
        let title = format!(
            " Tickets (page {} of {}) ",
            app.collection.current_page(),
            app.collection.total_pages()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);

        // Build owned rows first so the table can borrow the selection state
        let table_rows: Vec<Row> = {
            let rows = app.collection.derived_rows();

            if rows.is_empty() {
                let message = if app.loading {
                    "Loading tickets..."
                } else if app.collection.is_empty() {
                    "No tickets on this page. Press 'a' to create one."
                } else {
                    "No tickets match the current search."
                };
                let empty = Paragraph::new(message)
                    .block(block)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray));
                f.render_widget(empty, area);
                return;
            }

            rows.iter()
                .map(|ticket| {
                    let status_style = if ticket.status {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::Red)
                    };
                    Row::new(vec![
                        Cell::from(ticket.id.to_string()),
                        Cell::from(ticket.description.clone()),
                        Cell::from(ticket.status_label()).style(status_style),
                        Cell::from(ticket.date.format(&app.date_format).to_string()),
                    ])
                })
                .collect()
        };

        let header = Row::new(["ID", "Description", "Status", "Date"])
            .style(Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(8),
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(20),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        app.table_state.select(Some(app.selected_row));
        f.render_stateful_widget(table, area, &mut app.table_state);
    }
}
