//! TUI constants

/// Display truncation length for original URLs in the links table.
pub const URL_TRUNCATE_LENGTH: usize = 50;

/// Rows skipped by PageUp/PageDown.
pub const PAGE_SCROLL_STEP: usize = 10;

/// Popup dimensions as percentages of the content area.
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    pub width: u16,
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub mod popup {
    use super::PopupSize;

    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(65, 45);
    pub const HELP: PopupSize = PopupSize::new(80, 80);
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}
