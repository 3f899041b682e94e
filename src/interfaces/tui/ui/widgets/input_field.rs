//! Bordered single-line input field

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Draw a labeled input field. The focused field gets the inverted yellow
/// style so the active target of keystrokes is unmistakable.
pub fn draw_input_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let title = if value.is_empty() {
        label.to_string()
    } else {
        format!("{} ({} chars)", label, value.chars().count())
    };

    let field = Paragraph::new(value).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}
