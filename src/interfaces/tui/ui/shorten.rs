//! Shorten tab: the create form and its result

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::draw_input_field;
use crate::interfaces::tui::app::{App, EditingField, ViewState};

pub fn draw_shorten_tab(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("Shorten a URL")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(4), // Target URL + error
            Constraint::Length(4), // Custom code + error
            Constraint::Length(1), // Hint
            Constraint::Min(4),    // Result
        ])
        .split(inner);

    let subtitle = Paragraph::new(Span::styled(
        "Create short, memorable links in seconds",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(subtitle, chunks[0]);

    draw_field(
        frame,
        chunks[1],
        app,
        EditingField::TargetUrl,
        "Target URL *",
        &app.form.target_url,
    );
    draw_field(
        frame,
        chunks[2],
        app,
        EditingField::CustomCode,
        "Custom Code (empty = random)",
        &app.form.custom_code,
    );

    let hint = Paragraph::new(Span::styled(
        "Letters, numbers, hyphens and underscores only",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(hint, chunks[3]);

    draw_result(frame, chunks[4], app);
}

fn draw_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    field: EditingField,
    label: &str,
    value: &str,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    draw_input_field(frame, rows[0], label, value, app.form.currently_editing == field);

    if let Some(error) = app.form.get_error(field) {
        let error_text = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error_text, rows[1]);
    }
}

fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match &app.shorten {
        ViewState::Idle => vec![],
        ViewState::Loading => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Shortening...",
                Style::default().fg(Color::Yellow),
            )),
        ],
        ViewState::Loaded(created) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Success! Your short URL is ready to share:",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  ", Style::default()),
                Span::styled(
                    created.short_url.clone(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press Ctrl+y to copy",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        ViewState::Failed(error) => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(error.clone(), Style::default().fg(Color::Red)),
            ]),
        ],
    };

    let result = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(result, area);
}
