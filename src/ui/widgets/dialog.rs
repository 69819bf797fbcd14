//! Dialog widgets for the TUI

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::app::{Warning, WarningButton};

/// Modal warning with OK and Cancel buttons
pub struct WarningDialog<'a> {
    pub warning: &'a Warning,
    pub ok_label: &'a str,
    pub cancel_label: &'a str,
}

impl<'a> WarningDialog<'a> {
    pub fn new(warning: &'a Warning) -> Self {
        Self {
            warning,
            ok_label: "OK",
            cancel_label: "Cancel",
        }
    }

    pub fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_width = 50.min(area.width.saturating_sub(4));
        let dialog_height = 8.min(area.height.saturating_sub(4));

        let dialog_area = super::centered_rect(dialog_width, dialog_height, area);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" ⚠ {} ", self.warning.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(2)])
            .split(inner);

        let message = Paragraph::new(self.warning.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        message.render(chunks[0], buf);

        let button_style = |button: WarningButton, color: Color| {
            if self.warning.selected == button {
                Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            }
        };

        let buttons = Line::from(vec![
            Span::styled(
                format!(" {} ", self.ok_label),
                button_style(WarningButton::Ok, Color::Green),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", self.cancel_label),
                button_style(WarningButton::Cancel, Color::Red),
            ),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }
}
