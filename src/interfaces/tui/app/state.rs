//! App state definition and basic state management

use ratatui::widgets::TableState;

use crate::api::{ApiClient, ShortLink};
use crate::config::Config;
use crate::my_links::MyLinks;

use super::form_state::FormState;

/// The three tabs mirroring the views of the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentTab {
    Shorten,
    Links,
    Stats,
}

impl CurrentTab {
    pub const ALL: [Self; 3] = [Self::Shorten, Self::Links, Self::Stats];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Shorten => "Shorten",
            Self::Links => "My Links",
            Self::Stats => "Stats",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        if idx == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[idx - 1]
        }
    }
}

/// Top-level screen: the tab shell, or a modal stacked on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Tabs,
    DeleteConfirm,
    Help,
    Exiting,
}

/// One tagged state per view.
///
/// Loading, data and error are mutually exclusive by construction, so a view
/// can never claim to be loading and failed at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Result of a successful shorten, as the view displays it.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedLink {
    pub short_code: String,
    /// Reconstructed from the configured origin, not the backend echo.
    pub short_url: String,
}

pub struct App {
    pub api: ApiClient,
    pub config: Config,
    pub my_links: MyLinks,

    pub current_tab: CurrentTab,
    pub current_screen: CurrentScreen,
    pub api_healthy: bool,
    pub status_message: String,
    pub error_message: String,

    // Shorten view
    pub form: FormState,
    pub shorten: ViewState<CreatedLink>,

    // Links view
    pub links: ViewState<Vec<ShortLink>>,
    pub selected_index: usize,
    pub table_state: TableState,
    pub page_offset: usize,
    /// Short code with a delete in flight, if any. Only that row is blocked.
    pub deleting: Option<String>,
    /// Bumped on every successful create.
    pub refresh_generation: u64,
    /// Generation the currently loaded list reflects.
    pub links_generation: u64,

    // Stats view
    pub code_input: String,
    pub stats: ViewState<ShortLink>,
}

impl App {
    pub fn new(config: Config) -> App {
        let api = ApiClient::new(&config.api.base_url);
        let my_links = MyLinks::load(&config.client.my_links_path);

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        App {
            api,
            my_links,
            config,
            current_tab: CurrentTab::Shorten,
            current_screen: CurrentScreen::Tabs,
            api_healthy: false,
            status_message: String::new(),
            error_message: String::new(),
            form: FormState::new(),
            shorten: ViewState::Idle,
            links: ViewState::Idle,
            selected_index: 0,
            table_state,
            page_offset: 0,
            deleting: None,
            refresh_generation: 0,
            links_generation: 0,
            stats: ViewState::Idle,
            code_input: String::new(),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    pub fn display_count(&self) -> usize {
        self.links.as_loaded().map(Vec::len).unwrap_or(0)
    }

    pub fn selected_link(&self) -> Option<&ShortLink> {
        self.links
            .as_loaded()
            .and_then(|links| links.get(self.selected_index))
    }

    /// The links view is stale once a create has happened since it last
    /// loaded, or if it never loaded at all.
    pub fn links_stale(&self) -> bool {
        matches!(self.links, ViewState::Idle) || self.links_generation != self.refresh_generation
    }

    /// Remove a row in place after a confirmed delete, keeping the selection
    /// inside bounds. No refetch: the rest of the rows are untouched.
    pub fn remove_row(&mut self, code: &str) {
        if let Some(links) = self.links.as_loaded_mut() {
            links.retain(|l| l.short_code != code);
            let len = links.len();
            if self.selected_index >= len && self.selected_index > 0 {
                self.selected_index -= 1;
            }
            self.table_state.select(Some(self.selected_index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn link(code: &str) -> ShortLink {
        ShortLink {
            short_code: code.to_string(),
            original_url: format!("https://example.com/{}", code),
            clicks: 0,
            created_at: Utc::now(),
            last_accessed: None,
        }
    }

    fn app_with_links(codes: &[&str]) -> App {
        let mut app = App::new(Config::default());
        app.links = ViewState::Loaded(codes.iter().map(|c| link(c)).collect());
        app
    }

    #[test]
    fn tab_cycling_wraps() {
        assert_eq!(CurrentTab::Shorten.next(), CurrentTab::Links);
        assert_eq!(CurrentTab::Stats.next(), CurrentTab::Shorten);
        assert_eq!(CurrentTab::Shorten.prev(), CurrentTab::Stats);
    }

    #[test]
    fn view_state_is_mutually_exclusive() {
        let state: ViewState<Vec<ShortLink>> = ViewState::Loading;
        assert!(state.is_loading());
        assert!(state.as_loaded().is_none());

        let state: ViewState<Vec<ShortLink>> = ViewState::Failed("boom".to_string());
        assert!(!state.is_loading());
        assert!(state.as_loaded().is_none());
    }

    #[test]
    fn remove_row_keeps_other_rows_and_selection_in_bounds() {
        let mut app = app_with_links(&["a", "b", "c"]);
        app.selected_index = 2;

        app.remove_row("c");

        let codes: Vec<&str> = app
            .links
            .as_loaded()
            .unwrap()
            .iter()
            .map(|l| l.short_code.as_str())
            .collect();
        assert_eq!(codes, ["a", "b"]);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn remove_row_for_unknown_code_is_a_noop() {
        let mut app = app_with_links(&["a", "b"]);
        app.remove_row("zzz");
        assert_eq!(app.display_count(), 2);
    }

    #[test]
    fn links_staleness_tracks_creates() {
        let mut app = app_with_links(&["a"]);
        app.links_generation = app.refresh_generation;
        assert!(!app.links_stale());

        app.refresh_generation += 1;
        assert!(app.links_stale());
    }

    #[test]
    fn status_and_error_messages_displace_each_other() {
        let mut app = App::new(Config::default());
        app.set_status("created".to_string());
        app.set_error("failed".to_string());
        assert!(app.status_message.is_empty());
        assert_eq!(app.error_message, "failed");

        app.set_status("ok".to_string());
        assert!(app.error_message.is_empty());
    }
}
