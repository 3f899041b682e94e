//! My Links tab: the backend's link table

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::{App, ViewState};
use crate::interfaces::tui::constants::URL_TRUNCATE_LENGTH;

pub fn draw_links_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    match &app.links {
        ViewState::Idle | ViewState::Loading => draw_message(
            frame,
            area,
            "Loading your URLs...",
            Style::default().fg(Color::Yellow),
        ),
        ViewState::Failed(error) => draw_failed(frame, area, error),
        ViewState::Loaded(links) if links.is_empty() => draw_empty(frame, area, app.page_offset),
        ViewState::Loaded(_) => draw_table(frame, area, app),
    }
}

fn draw_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(text.to_string(), style)),
    ];
    let message = Paragraph::new(lines)
        .block(bordered("My Links"))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(message, area);
}

fn draw_failed(frame: &mut Frame, area: Rect, error: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "[r]",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    let message = Paragraph::new(lines)
        .block(bordered("My Links"))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(message, area);
}

fn draw_empty(frame: &mut Frame, area: Rect, page_offset: usize) {
    let hint = if page_offset > 0 {
        vec![
            Span::styled("Past the last page. Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "[p]",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to go back", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![
            Span::styled("Switch to the ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Shorten",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " tab to create your first link",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    };

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "No URLs yet",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(hint),
    ];
    let empty = Paragraph::new(lines)
        .block(bordered("My Links"))
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(empty, area);
}

fn draw_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(links) = app.links.as_loaded() else {
        return;
    };

    let header = Row::new(vec![
        Span::raw("  "),
        header_cell("Code"),
        header_cell("Original URL"),
        header_cell("Clicks"),
        header_cell("Created"),
    ])
    .bottom_margin(1);

    let mut rows = Vec::with_capacity(links.len());
    for link in links {
        let display_url = truncate_url(&link.original_url);

        // Advisory marker: this code was created from this machine.
        let mine_prefix = if app.my_links.contains(&link.short_code) {
            Span::styled(
                "● ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("  ")
        };

        let code_cell = if app.deleting.as_deref() == Some(link.short_code.as_str()) {
            Span::styled(
                format!("{} (deleting...)", link.short_code),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::styled(
                link.short_code.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        };

        rows.push(Row::new(vec![
            mine_prefix,
            code_cell,
            Span::styled(display_url, Style::default().fg(Color::Blue)),
            Span::styled(format!("{}", link.clicks), Style::default().fg(Color::Green)),
            Span::styled(
                link.created_at.format("%Y-%m-%d %H:%M").to_string(),
                Style::default().fg(Color::White),
            ),
        ]));
    }

    let page = app.page_offset / app.config.client.page_size.max(1) + 1;
    let mut title = format!("My Links ({} on page {})", links.len(), page);
    if app.my_links.len() > 0 {
        title.push_str(&format!(" | {} mine", app.my_links.len()));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),  // Mine marker
            Constraint::Length(18), // Code
            Constraint::Min(20),    // Original URL
            Constraint::Length(8),  // Clicks
            Constraint::Length(17), // Created
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Cut long URLs for the table cell. Counts characters, not bytes: URL paths
/// can carry multibyte text and a byte index may land inside a code point.
fn truncate_url(url: &str) -> String {
    match url.char_indices().nth(URL_TRUNCATE_LENGTH) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}

fn header_cell(name: &str) -> Span<'static> {
    Span::styled(
        name.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title.to_string())
        .title_style(Style::default().fg(Color::Cyan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use ratatui::{Terminal, backend::TestBackend};

    use crate::api::ShortLink;
    use crate::config::Config;

    #[test]
    fn truncate_url_counts_characters_not_bytes() {
        // 21 ASCII bytes then 3-byte kanji: byte 50 lands inside a code
        // point, but the character count stays under the limit.
        let url = format!("https://example.com/x{}", "日本語データ".repeat(3));
        assert!(url.len() > URL_TRUNCATE_LENGTH);
        assert_eq!(truncate_url(&url), url);

        let long_ascii = format!("https://example.com/{}", "a".repeat(60));
        let truncated = truncate_url(&long_ascii);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), URL_TRUNCATE_LENGTH + 3);

        let long_kanji = format!("https://example.com/{}", "語".repeat(60));
        let truncated = truncate_url(&long_kanji);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), URL_TRUNCATE_LENGTH + 3);
    }

    #[test]
    fn table_renders_multibyte_urls_without_panicking() {
        let mut app = App::new(Config::default());
        app.links = ViewState::Loaded(vec![ShortLink {
            short_code: "cjk".to_string(),
            original_url: format!("https://example.com/x{}", "日本語データが".repeat(10)),
            clicks: 3,
            created_at: Utc::now(),
            last_accessed: None,
        }]);

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_links_tab(frame, &mut app, frame.area()))
            .unwrap();
    }
}
