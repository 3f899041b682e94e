use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};

use crate::interfaces::tui::app::{App, CurrentScreen, CurrentTab};

/// Draw title bar with version, API health and advisory-list count
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (health_text, health_color) = if app.api_healthy {
        ("API up", Color::Green)
    } else {
        ("API down", Color::Red)
    };

    let title_text = vec![Line::from(vec![
        Span::styled("Shortlink Console", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled("● ", Style::default().fg(health_color)),
        Span::styled(health_text, Style::default().fg(health_color)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("Mine: {} ", app.my_links.len()),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw the tab bar
pub fn draw_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = CurrentTab::ALL
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.current_tab.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)));

    frame.render_widget(tabs, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Tabs => match app.current_tab {
            CurrentTab::Shorten => vec![
                ("Left/Right", "Switch Tab", Color::Cyan),
                ("Tab", "Switch Field", Color::Cyan),
                ("Enter", "Shorten", Color::Green),
                ("Ctrl+y", "Copy", Color::Yellow),
                ("Esc", "Clear", Color::Red),
            ],
            CurrentTab::Links => vec![
                ("Left/Right", "Switch Tab", Color::Cyan),
                ("Up/Down", "Navigate", Color::Cyan),
                ("Enter/s", "Stats", Color::Cyan),
                ("r", "Refresh", Color::Green),
                ("n/p", "Page", Color::Cyan),
                ("d", "Delete", Color::Red),
                ("y", "Copy", Color::Yellow),
                ("?", "Help", Color::Blue),
                ("q", "Quit", Color::Magenta),
            ],
            CurrentTab::Stats => vec![
                ("Left/Right", "Switch Tab", Color::Cyan),
                ("Enter", "Fetch", Color::Green),
                ("Ctrl+y", "Copy", Color::Yellow),
                ("Esc", "Clear", Color::Red),
            ],
        },
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
