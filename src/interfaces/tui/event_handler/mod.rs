//! Event handling for the TUI
//!
//! Keyboard input is dispatched by screen, then by tab:
//! - tab_screens: Shorten, My Links, Stats
//! - modal_screens: DeleteConfirm, Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod modal_screens;
mod tab_screens;

use modal_screens::*;
use tab_screens::*;

/// Handle a key press. Returns true when the application should exit.
pub async fn handle_key_event(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    // Ctrl+C always asks for exit confirmation, regardless of screen.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.current_screen = CurrentScreen::Exiting;
        return Ok(false);
    }

    match app.current_screen {
        CurrentScreen::Tabs => handle_tabs_screen(app, key).await,
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key.code).await,
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
