use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::ui::widgets::form::{render_controls, render_input_field};
use crate::wizard::fields::PROJECT_FIELDS;

/// Render the project setup page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = super::page_block(app.screen.id, Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2),   // Intro
            Constraint::Length(3),   // Project name
            Constraint::Length(3),   // Output path
            Constraint::Length(3),   // Model path
            Constraint::Length(3),   // Data loader path
            Constraint::Min(0),      // Spacer
            Constraint::Length(1),   // Buttons
        ])
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::styled(
            "Name the project and point the wizard at your trained model.",
            Style::default().fg(Color::Yellow),
        ),
        Line::styled(
            "Project name, output path and model path are required.",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(intro, chunks[0]);

    for (idx, field) in PROJECT_FIELDS.into_iter().enumerate() {
        render_input_field(frame, chunks[idx + 1], &app.screen, field);
    }

    render_controls(frame, chunks[6], &app.screen);
}
