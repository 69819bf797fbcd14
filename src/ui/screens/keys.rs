use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::widgets::centered_rect;

/// Render the key bindings overlay
pub fn render(frame: &mut Frame) {
    let area = frame.area();
    let dialog_width = 50.min(area.width.saturating_sub(4));
    let dialog_height = 16.min(area.height.saturating_sub(4));

    let dialog_area = centered_rect(dialog_width, dialog_height, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Help - Key Bindings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let help_text = vec![
        Line::from(Span::styled(
            "Navigation",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key_line("Tab / Down", "Next field or button"),
        key_line("S-Tab / Up", "Previous field or button"),
        key_line("Enter", "Press button / next field"),
        key_line("Space", "Toggle technique"),
        key_line("Esc", "Back (quit on first page)"),
        Line::from(""),
        key_line("F1", "Show this help"),
        key_line("Ctrl+C", "Quit without finishing"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}

fn key_line<'a>(key: &'a str, description: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {:12}", key),
            Style::default().fg(Color::Green),
        ),
        Span::raw(description),
    ])
}
