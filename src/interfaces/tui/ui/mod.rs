// UI submodules
mod common;
mod delete_confirm;
mod exiting;
mod help;
mod links;
mod shorten;
mod stats;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_tab_bar, draw_title_bar};
pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use links::draw_links_tab;
pub use shorten::draw_shorten_tab;
pub use stats::draw_stats_tab;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{App, CurrentScreen, CurrentTab};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Tab bar
            Constraint::Min(10),   // Content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_tab_bar(frame, app, main_chunks[1]);

    match app.current_screen {
        CurrentScreen::Tabs => match app.current_tab {
            CurrentTab::Shorten => draw_shorten_tab(frame, app, main_chunks[2]),
            CurrentTab::Links => draw_links_tab(frame, app, main_chunks[2]),
            CurrentTab::Stats => draw_stats_tab(frame, app, main_chunks[2]),
        },
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, main_chunks[2]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[2]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[2]),
    }

    draw_status_bar(frame, app, main_chunks[3]);
    draw_footer(frame, app, main_chunks[4]);
}
