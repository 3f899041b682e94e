//! Key handlers for the three tabs
//!
//! Left/Right switch tabs everywhere (neither text input supports cursor
//! movement, so the arrows are free). Keys that collide with typing are only
//! bound on the links tab or behind Ctrl.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen, CurrentTab, ViewState};

pub async fn handle_tabs_screen(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    // Tab-bar navigation shared by every tab.
    match key.code {
        KeyCode::Right => {
            let next = app.current_tab.next();
            app.activate_tab(next).await;
            return Ok(false);
        }
        KeyCode::Left => {
            let prev = app.current_tab.prev();
            app.activate_tab(prev).await;
            return Ok(false);
        }
        _ => {}
    }

    match app.current_tab {
        CurrentTab::Shorten => handle_shorten_tab(app, key).await,
        CurrentTab::Links => handle_links_tab(app, key.code).await,
        CurrentTab::Stats => handle_stats_tab(app, key).await,
    }
}

async fn handle_shorten_tab(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_shorten().await;
        }
        KeyCode::Tab => app.form.toggle_field(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Esc => {
            app.form.clear();
            app.shorten = ViewState::Idle;
            app.clear_messages();
        }
        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.copy_short_url();
        }
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    Ok(false)
}

async fn handle_links_tab(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Char('r') => app.load_links().await,
        KeyCode::Char('n') => app.next_page().await,
        KeyCode::Char('p') => app.prev_page().await,
        KeyCode::Char('d') => {
            // Block only while this row's delete is still in flight.
            if app.selected_link().is_some() && app.deleting.is_none() {
                app.current_screen = CurrentScreen::DeleteConfirm;
            }
        }
        KeyCode::Enter | KeyCode::Char('s') => app.open_stats_for_selected().await,
        KeyCode::Char('y') => app.copy_short_url(),
        KeyCode::Char('?') | KeyCode::Char('h') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        KeyCode::Esc => app.clear_messages(),
        _ => {}
    }
    Ok(false)
}

async fn handle_stats_tab(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    match key.code {
        KeyCode::Enter => app.fetch_stats().await,
        KeyCode::Backspace => {
            app.code_input.pop();
        }
        KeyCode::Esc => {
            app.code_input.clear();
            app.stats = ViewState::Idle;
            app.clear_messages();
        }
        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.copy_short_url();
        }
        KeyCode::Char(c) => app.code_input.push(c),
        _ => {}
    }
    Ok(false)
}
