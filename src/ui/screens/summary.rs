use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::widgets::form::render_controls;

/// Render the review page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = super::page_block(app.screen.id, Color::Green);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),   // Header
            Constraint::Length(1),   // Spacer
            Constraint::Min(8),      // Summary
            Constraint::Length(1),   // Buttons
        ])
        .split(inner);

    let header = Paragraph::new("Summary")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(header, chunks[0]);

    let lines: Vec<Line> = app
        .state
        .summary_lines()
        .into_iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("{:24}", format!("{}:", key)), Style::default().fg(Color::Yellow)),
                Span::raw(value),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[2]);

    render_controls(frame, chunks[3], &app.screen);
}
