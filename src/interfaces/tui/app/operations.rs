//! API round trips driven by the TUI
//!
//! Each operation is a single awaited request; the triggering view sits in
//! `Loading` until it resolves and no other view is touched.

use tracing::warn;

use super::state::{App, CreatedLink, CurrentTab, ViewState};
use crate::utils::{validate_custom_code, validate_target_url};

impl App {
    /// One-shot health probe for the title-bar indicator. Not polled.
    pub async fn refresh_health(&mut self) {
        self.api_healthy = self.api.check_health().await;
    }

    /// Switch tabs, refetching the links view when it is stale.
    pub async fn activate_tab(&mut self, tab: CurrentTab) {
        self.current_tab = tab;
        if tab == CurrentTab::Links && self.links_stale() && !self.links.is_loading() {
            self.load_links().await;
        }
    }

    /// Submit the shorten form. Ignored while a submit is already in flight.
    pub async fn submit_shorten(&mut self) {
        if self.shorten.is_loading() {
            return;
        }

        self.form.clear_errors();
        let mut invalid = false;
        if let Err(err) = validate_target_url(&self.form.target_url) {
            self.form
                .set_error(super::EditingField::TargetUrl, err.message().to_string());
            invalid = true;
        }
        if let Err(err) = validate_custom_code(&self.form.custom_code) {
            self.form
                .set_error(super::EditingField::CustomCode, err.message().to_string());
            invalid = true;
        }
        if invalid {
            return;
        }

        self.shorten = ViewState::Loading;
        let custom_code = if self.form.custom_code.trim().is_empty() {
            None
        } else {
            Some(self.form.custom_code.trim().to_string())
        };

        match self
            .api
            .shorten(self.form.target_url.trim(), custom_code.as_deref())
            .await
        {
            Ok(resp) => {
                let created = CreatedLink {
                    short_url: self.config.short_url_for(&resp.short_code),
                    short_code: resp.short_code,
                };
                if let Err(err) = self.my_links.record(&created.short_code) {
                    // Advisory only, never fails the create.
                    warn!("Could not record code in advisory list: {}", err);
                }
                self.form.clear();
                self.refresh_generation += 1;
                self.set_status(format!("Created {}", created.short_url));
                self.shorten = ViewState::Loaded(created);
            }
            Err(err) => {
                // Inputs are kept so the user can correct and resubmit.
                let message = err.to_string();
                self.set_error(message.clone());
                self.shorten = ViewState::Failed(message);
            }
        }
    }

    /// Fetch the current page of links.
    pub async fn load_links(&mut self) {
        self.links = ViewState::Loading;
        let generation = self.refresh_generation;
        match self
            .api
            .list(self.config.client.page_size, self.page_offset)
            .await
        {
            Ok(links) => {
                self.selected_index = self.selected_index.min(links.len().saturating_sub(1));
                self.table_state.select(Some(self.selected_index));
                self.links = ViewState::Loaded(links);
                self.links_generation = generation;
            }
            Err(err) => {
                self.links = ViewState::Failed(err.to_string());
            }
        }
    }

    pub async fn next_page(&mut self) {
        // A full page suggests there may be another one.
        if self.display_count() == self.config.client.page_size {
            self.page_offset += self.config.client.page_size;
            self.selected_index = 0;
            self.load_links().await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.page_offset > 0 {
            self.page_offset = self.page_offset.saturating_sub(self.config.client.page_size);
            self.selected_index = 0;
            self.load_links().await;
        }
    }

    /// Delete the selected link after confirmation. On success the row is
    /// removed in place; on failure the backend message is shown and the
    /// rows stay untouched.
    pub async fn delete_selected(&mut self) {
        let Some(code) = self.selected_link().map(|l| l.short_code.clone()) else {
            return;
        };

        self.deleting = Some(code.clone());
        match self.api.delete(&code).await {
            Ok(()) => {
                self.remove_row(&code);
                if let Err(err) = self.my_links.forget(&code) {
                    warn!("Could not update advisory list: {}", err);
                }
                self.set_status(format!("Deleted {}", code));
            }
            Err(err) => {
                self.set_error(err.to_string());
            }
        }
        self.deleting = None;
    }

    /// Hand off the selected row to the stats view by short code only and
    /// fetch fresh, rather than threading the possibly stale row object.
    pub async fn open_stats_for_selected(&mut self) {
        let Some(code) = self.selected_link().map(|l| l.short_code.clone()) else {
            return;
        };
        self.current_tab = CurrentTab::Stats;
        self.code_input = code;
        self.fetch_stats().await;
    }

    /// Fetch stats for the code currently in the input.
    pub async fn fetch_stats(&mut self) {
        if self.stats.is_loading() {
            return;
        }
        let code = self.code_input.trim().to_string();
        if code.is_empty() {
            self.set_error("Enter a short code first".to_string());
            return;
        }

        self.stats = ViewState::Loading;
        match self.api.stats(&code).await {
            Ok(stats) => {
                self.clear_messages();
                self.stats = ViewState::Loaded(stats);
            }
            Err(err) => {
                self.stats = ViewState::Failed(err.to_string());
            }
        }
    }

    /// Copy a short URL to the clipboard: the create result on the shorten
    /// tab, the selected row on the links tab, the loaded stats otherwise.
    pub fn copy_short_url(&mut self) {
        let url = match self.current_tab {
            CurrentTab::Shorten => self.shorten.as_loaded().map(|c| c.short_url.clone()),
            CurrentTab::Links => self
                .selected_link()
                .map(|l| self.config.short_url_for(&l.short_code)),
            CurrentTab::Stats => self
                .stats
                .as_loaded()
                .map(|s| self.config.short_url_for(&s.short_code)),
        };
        let Some(url) = url else {
            return;
        };

        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(&url).is_ok() {
                    self.set_status(format!("Copied: {}", url));
                } else {
                    self.set_error("Clipboard unavailable".to_string());
                }
            }
            Err(_) => {
                self.set_error("Clipboard unavailable".to_string());
            }
        }
    }
}
