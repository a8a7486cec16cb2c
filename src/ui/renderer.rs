//! Main UI rendering and coordination

use std::time::Duration as StdDuration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::App;
use super::components::{
    dialogs::{DeleteConfirmationDialog, ErrorDialog, TicketCreationDialog, TicketEditDialog},
    HelpPanel, StatusBar, TicketsTable,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::service::{HttpTicketService, TicketService};

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let service = HttpTicketService::new(
        &config.service.base_url,
        StdDuration::from_secs(config.service.timeout_secs),
    )?;
    let mut app = App::new(&config);

    // Fetch the first page before the first frame; a failure surfaces in the
    // error dialog while the table stays empty.
    app.collection.load_page(&service, 1).await;
    app.loading = false;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &service).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    service: &dyn TicketService,
) -> Result<()> {
    loop {
        // Expire the success banner without waiting for input
        app.collection.tick();

        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout so the banner keeps ticking
        if event::poll(StdDuration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let _handled = handle_events(Event::Key(key), app, service).await?;
                    }
                }
                Event::Resize(_, _) => {
                    // Handled by the next draw
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    // Calculate layouts
    let chunks = LayoutManager::main_layout(f.area());

    // Render components
    TicketsTable::render(f, chunks[0], app);
    StatusBar::render(f, chunks[1], app);

    // Render overlays
    if app.collection.last_error().is_some() {
        ErrorDialog::render(f, app);
    }

    if app.collection.pending_delete().is_some() {
        DeleteConfirmationDialog::render(f, app);
    }

    if app.create_dialog.is_some() {
        TicketCreationDialog::render(f, app);
    }

    if app.edit_dialog.is_some() {
        TicketEditDialog::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
