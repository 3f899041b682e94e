//! Stats tab: code lookup and the derived insights

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::draw_input_field;
use crate::api::ShortLink;
use crate::insights;
use crate::interfaces::tui::app::{App, ViewState};

pub fn draw_stats_tab(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("URL Analytics")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Code input
            Constraint::Min(6),    // Result
        ])
        .split(inner);

    // The code input is always the active field on this tab.
    draw_input_field(
        frame,
        chunks[0],
        "Short Code (e.g. abc123)",
        &app.code_input,
        true,
    );

    match &app.stats {
        ViewState::Idle => draw_prompt(frame, chunks[1]),
        ViewState::Loading => draw_loading(frame, chunks[1]),
        ViewState::Failed(error) => draw_error(frame, chunks[1], error),
        ViewState::Loaded(stats) => draw_stats(frame, chunks[1], app, stats),
    }
}

fn draw_prompt(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Type a short code and press Enter,",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "or pick a link from the My Links tab.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let prompt = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(prompt, area);
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Fetching statistics...",
            Style::default().fg(Color::Yellow),
        )),
    ];
    let loading = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(loading, area);
}

fn draw_error(frame: &mut Frame, area: Rect, error: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ]),
    ];
    let message = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(message, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App, stats: &ShortLink) {
    // Derived metrics are recomputed per render from the fetched snapshot;
    // they never trigger another fetch.
    let now = Utc::now();

    let details = vec![
        Line::from(""),
        Line::from(vec![
            label("Code:         "),
            Span::styled(
                stats.short_code.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Short URL:    "),
            Span::styled(
                app.config.short_url_for(&stats.short_code),
                Style::default().fg(Color::Blue),
            ),
        ]),
        Line::from(vec![
            label("Original URL: "),
            Span::styled(stats.original_url.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Total clicks: "),
            Span::styled(
                format!("{}", stats.clicks),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Created:      "),
            Span::styled(
                format_timestamp(Some(stats.created_at)),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            label("Last access:  "),
            Span::styled(
                format_timestamp(stats.last_accessed),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Insights",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            label("  Age:          "),
            Span::styled(
                insights::age(stats.created_at, now),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            label("  Daily average:"),
            Span::styled(
                format!(" {}", insights::daily_average(stats.created_at, stats.clicks, now)),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            label("  Status:       "),
            match insights::activity(stats.clicks) {
                "active" => Span::styled(
                    "active",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                other => Span::styled(other.to_string(), Style::default().fg(Color::Yellow)),
            },
        ]),
    ];

    let paragraph = Paragraph::new(details).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "Never".to_string())
}
