//! Event handling and key bindings

use super::app::App;
use crate::service::TicketService;
use crossterm::event::{Event, KeyCode, KeyEventKind};

/// Handle all user input events
pub async fn handle_events(event: Event, app: &mut App, service: &dyn TicketService) -> Result<bool, anyhow::Error> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Handle create dialog
            if app.create_dialog.is_some() {
                return handle_create_dialog(key, app, service).await;
            }

            // Handle edit dialog
            if app.edit_dialog.is_some() {
                return handle_edit_dialog(key, app, service).await;
            }

            // Handle delete confirmation dialog
            if app.collection.pending_delete().is_some() {
                return handle_delete_confirmation(key, app, service).await;
            }

            // Handle error message dialog
            if app.collection.last_error().is_some() {
                return Ok(handle_error_dialog(key, app));
            }

            // Handle search input mode
            if app.searching {
                return Ok(handle_search_input(key, app));
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            // Handle normal navigation and actions
            return handle_normal_mode(key, app, service).await;
        }
    }
    Ok(false)
}

/// Handle events when the create dialog is open
async fn handle_create_dialog(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &dyn TicketService,
) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            if let Some(draft) = app.create_dialog.as_mut() {
                draft.description.push(c);
            }
            Ok(true)
        }
        KeyCode::Backspace => {
            if let Some(draft) = app.create_dialog.as_mut() {
                draft.description.pop();
            }
            Ok(true)
        }
        KeyCode::Tab => {
            if let Some(draft) = app.create_dialog.as_mut() {
                draft.status = !draft.status;
            }
            Ok(true)
        }
        KeyCode::Enter => {
            let Some(draft) = app.create_dialog.clone() else {
                return Ok(false);
            };
            match app
                .collection
                .create_ticket(service, &draft.description, draft.status)
                .await
            {
                Ok(()) => {
                    // The dialog closes only on the command's success signal.
                    app.create_dialog = None;
                    app.clamp_selection();
                }
                Err(err) => {
                    if let Some(draft) = app.create_dialog.as_mut() {
                        draft.error = Some(err.to_string());
                    }
                }
            }
            Ok(true)
        }
        KeyCode::Esc => {
            app.cancel_create_dialog();
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys while the dialog is open
    }
}

/// Handle events when the edit dialog is open
async fn handle_edit_dialog(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &dyn TicketService,
) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            if let Some(draft) = app.edit_dialog.as_mut() {
                draft.description.push(c);
            }
            Ok(true)
        }
        KeyCode::Backspace => {
            if let Some(draft) = app.edit_dialog.as_mut() {
                draft.description.pop();
            }
            Ok(true)
        }
        KeyCode::Tab => {
            if let Some(draft) = app.edit_dialog.as_mut() {
                draft.status = !draft.status;
            }
            Ok(true)
        }
        KeyCode::Enter => {
            let Some(draft) = app.edit_dialog.clone() else {
                return Ok(false);
            };
            match app
                .collection
                .update_ticket(service, draft.id, &draft.description, draft.status, draft.date)
                .await
            {
                Ok(()) => {
                    app.edit_dialog = None;
                    app.clamp_selection();
                }
                Err(err) => {
                    if let Some(draft) = app.edit_dialog.as_mut() {
                        draft.error = Some(err.to_string());
                    }
                }
            }
            Ok(true)
        }
        KeyCode::Esc => {
            app.cancel_edit_dialog();
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys while the dialog is open
    }
}

/// Handle events when the delete confirmation dialog is open
async fn handle_delete_confirmation(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &dyn TicketService,
) -> Result<bool, anyhow::Error> {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            // Failures surface through the collection's error state.
            let _ = app.collection.confirm_delete(service).await;
            app.clamp_selection();
            Ok(true)
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.collection.cancel_delete();
            Ok(true)
        }
        _ => Ok(false), // Ignore other keys during confirmation
    }
}

/// Handle events when the error dialog is shown
fn handle_error_dialog(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.collection.clear_error();
            true
        }
        _ => false, // Ignore all other keys when the error dialog is shown
    }
}

/// Handle events in search input mode
fn handle_search_input(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            app.collection.push_search_char(c);
            app.clamp_selection();
            true
        }
        KeyCode::Backspace => {
            app.collection.pop_search_char();
            app.clamp_selection();
            true
        }
        KeyCode::Enter | KeyCode::Esc => {
            // The term stays applied; this only leaves input mode.
            app.searching = false;
            true
        }
        _ => false,
    }
}

/// Handle events when the help panel is open
fn handle_help_panel(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
            true
        }
        _ => false, // Ignore all other keys when help is open
    }
}

/// Handle events in normal mode
async fn handle_normal_mode(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    service: &dyn TicketService,
) -> Result<bool, anyhow::Error> {
    // Check for Ctrl+C first
    if key.code == KeyCode::Char('c')
        && key
            .modifiers
            .contains(crossterm::event::KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return Ok(true);
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            Ok(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_row();
            Ok(true)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_row();
            Ok(true)
        }
        KeyCode::Left | KeyCode::Char('p') => {
            // Previous page, guarded so the cursor never goes below page 1
            if app.collection.has_previous_page() {
                let page = app.collection.current_page() - 1;
                app.collection.load_page(service, page).await;
                app.clamp_selection();
            }
            Ok(true)
        }
        KeyCode::Right | KeyCode::Char('n') => {
            // Next page, guarded against running past the last page
            if app.collection.has_next_page() {
                let page = app.collection.current_page() + 1;
                app.collection.load_page(service, page).await;
                app.clamp_selection();
            }
            Ok(true)
        }
        KeyCode::Char('r') => {
            app.collection.reload(service).await;
            app.clamp_selection();
            Ok(true)
        }
        KeyCode::Char('a') => {
            app.open_create_dialog();
            Ok(true)
        }
        KeyCode::Char('e') => {
            app.open_edit_dialog();
            Ok(true)
        }
        KeyCode::Char('d') => {
            // Arm the delete marker for the selected ticket
            let id = app.selected_ticket().map(|ticket| ticket.id);
            if let Some(id) = id {
                app.collection.request_delete(id);
            }
            Ok(true)
        }
        KeyCode::Char('f') => {
            app.collection.cycle_status_filter();
            app.clamp_selection();
            Ok(true)
        }
        KeyCode::Char('s') => {
            app.collection.cycle_sort();
            app.clamp_selection();
            Ok(true)
        }
        KeyCode::Char('/') => {
            app.searching = true;
            Ok(true)
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            Ok(true)
        }
        _ => Ok(false),
    }
}
