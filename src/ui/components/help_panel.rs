//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

const HELP_TEXT: &str = "\
Navigation
  j / Down       next ticket
  k / Up         previous ticket
  p / Left       previous page
  n / Right      next page
  r              reload current page

Tickets
  a              add a new ticket
  e              edit the selected ticket
  d              delete the selected ticket

View
  /              search (id or description)
  f              cycle status filter (all / open / closed)
  s              cycle sort (date / status)

Other
  ?              toggle this help
  q / Ctrl+C     quit";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, app: &App) {
        if !app.show_help {
            return;
        }

        let help_area = LayoutManager::centered_rect(60, 70, f.area());
        f.render_widget(Clear, help_area);

        let help_paragraph = Paragraph::new(HELP_TEXT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - press '?' or Esc to close ")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(help_paragraph, help_area);
    }
}
