use ratatui::{layout::Margin, prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::ui::widgets::form::{render_controls, render_input_field, toggle_line};
use crate::wizard::fields::technique_fields;
use crate::wizard::Technique;

/// Render technique toggles with their parameter fields
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = super::page_block(app.screen.id, Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)];
    for _ in Technique::ALL {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    let target = app
        .state
        .target
        .map(|t| t.label())
        .unwrap_or("unknown target");
    let intro = Paragraph::new(vec![
        Line::styled(
            format!("Optimizations for {}", target),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Enabled techniques need whole-number parameters.",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(intro, chunks[0]);

    for (idx, technique) in Technique::ALL.into_iter().enumerate() {
        let toggle_area = chunks[1 + idx * 2];
        let fields_area = chunks[2 + idx * 2];
        let enabled = app.state.is_enabled(technique);

        frame.render_widget(
            Paragraph::new(toggle_line(&app.screen, technique, enabled)),
            toggle_area,
        );

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(fields_area.inner(Margin::new(2, 0)));
        let [first, second] = technique_fields(technique);
        render_input_field(frame, halves[0], &app.screen, first);
        render_input_field(frame, halves[1], &app.screen, second);
    }

    let last = chunks.len() - 1;
    render_controls(frame, chunks[last], &app.screen);
}
