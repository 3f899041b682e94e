use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::widgets::centered_rect;
use crate::interfaces::tui::constants::popup;

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(popup::HELP.width, popup::HELP.height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Help - Keyboard Shortcuts")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 1));

    let help_text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "TABS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  Left/Right       ", Style::default().fg(Color::Cyan)),
            Span::styled("Switch tab", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "SHORTEN TAB",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  Tab              ", Style::default().fg(Color::Cyan)),
            Span::styled("Switch input field", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Enter            ", Style::default().fg(Color::Green)),
            Span::styled("Shorten the URL", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+y           ", Style::default().fg(Color::Green)),
            Span::styled("Copy the new short URL", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Esc              ", Style::default().fg(Color::Red)),
            Span::styled("Clear the form", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "MY LINKS TAB",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  Up/Down, j/k     ", Style::default().fg(Color::Cyan)),
            Span::styled("Navigate list", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Home/End, g/G    ", Style::default().fg(Color::Cyan)),
            Span::styled("Jump to top/bottom", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  PageUp/PageDown  ", Style::default().fg(Color::Cyan)),
            Span::styled("Scroll 10 rows", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  n / p            ", Style::default().fg(Color::Cyan)),
            Span::styled("Next/previous page", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  r                ", Style::default().fg(Color::Green)),
            Span::styled("Refresh the list", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Enter, s         ", Style::default().fg(Color::Cyan)),
            Span::styled("Open stats for selection", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  y                ", Style::default().fg(Color::Green)),
            Span::styled("Copy short URL", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  d                ", Style::default().fg(Color::Red)),
            Span::styled("Delete selected link", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "STATS TAB",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  Enter            ", Style::default().fg(Color::Green)),
            Span::styled("Fetch statistics", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Ctrl+y           ", Style::default().fg(Color::Green)),
            Span::styled("Copy short URL", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "GENERAL",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  ?, h             ", Style::default().fg(Color::Cyan)),
            Span::styled("Show this help", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Esc              ", Style::default().fg(Color::Red)),
            Span::styled("Dismiss messages", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  q, Ctrl+C        ", Style::default().fg(Color::Magenta)),
            Span::styled("Quit application", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "STATUS INDICATORS",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("  ● (green)        ", Style::default().fg(Color::Green)),
            Span::styled("Created from this console", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  active           ", Style::default().fg(Color::Green)),
            Span::styled("Link has been clicked", Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  unused           ", Style::default().fg(Color::Yellow)),
            Span::styled("No clicks yet", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc, q or ? to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let help_para = Paragraph::new(help_text).alignment(ratatui::layout::Alignment::Left);
    frame.render_widget(help_para, inner_area);
}
