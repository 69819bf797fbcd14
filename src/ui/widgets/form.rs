//! Input fields, toggles and buttons shared by the wizard screens

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::wizard::{Control, FieldId, Item, Screen, Technique};

pub fn is_focused(screen: &Screen, item: &Item) -> bool {
    screen.focused() == Some(item)
}

/// Bordered single-line text field. Places the terminal cursor when focused.
pub fn render_input_field(frame: &mut Frame, area: Rect, screen: &Screen, field: FieldId) {
    let value = screen.form.text(field);
    let focused = is_focused(screen, &Item::Field(field));

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if value.is_empty() {
        Paragraph::new(field.placeholder()).style(Style::default().fg(Color::DarkGray))
    } else if focused {
        Paragraph::new(value).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        Paragraph::new(value).style(Style::default().fg(Color::White))
    };
    frame.render_widget(text, inner);

    if focused {
        let offset = (value.width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}

/// Checkbox line for enabling a technique
pub fn toggle_line(screen: &Screen, technique: Technique, enabled: bool) -> Line<'static> {
    let selected = is_focused(screen, &Item::Toggle(technique));
    let prefix = if selected { "> " } else { "  " };
    let checkbox = if enabled { "[x] " } else { "[ ] " };
    let checkbox_style = if selected {
        Style::default()
            .fg(if enabled { Color::Green } else { Color::Red })
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(if enabled { Color::Green } else { Color::DarkGray })
    };

    let mut spans = vec![
        Span::styled(
            prefix.to_string(),
            if selected { Style::default().fg(Color::Yellow) } else { Style::default() },
        ),
        Span::styled(checkbox.to_string(), checkbox_style),
        Span::styled(
            technique.label().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];
    if selected {
        spans.push(Span::styled(
            "  [Space] toggle".to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

pub fn button_span(control: &Control, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("[ {} ]", control.label), style)
}

/// Centered row of every control on the screen, in focus order
pub fn render_controls(frame: &mut Frame, area: Rect, screen: &Screen) {
    let mut spans = Vec::new();
    for (idx, control) in screen.controls().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(button_span(control, is_focused(screen, &Item::Control(*control))));
    }

    let buttons = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(buttons, area);
}
