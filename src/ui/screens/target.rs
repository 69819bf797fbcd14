use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::widgets::form::{button_span, is_focused};
use crate::wizard::{DeviceTarget, Item, Transition};

fn describe(transition: Transition) -> &'static str {
    match transition {
        Transition::TargetNext(DeviceTarget::Microcontroller) => {
            "Tight flash and RAM budgets; favours pruning and Huffman coding"
        }
        Transition::TargetNext(DeviceTarget::Fpga) => {
            "Fixed-point fabric; favours pruning and small distilled students"
        }
        Transition::TargetHelp => "Explain the options before choosing",
        Transition::TargetBack => "Return to project setup",
        _ => "",
    }
}

/// Render the target selection page
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = super::page_block(app.screen.id, Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),   // Project recap
            Constraint::Length(1),   // Spacer
            Constraint::Min(8),      // Choices
        ])
        .split(inner);

    let project = &app.state.project;
    let recap = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Project: ", Style::default().fg(Color::Yellow)),
            Span::raw(project.project_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Model:   ", Style::default().fg(Color::Yellow)),
            Span::raw(project.model_path.clone()),
        ]),
        Line::styled(
            "Where will the compressed model run?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(recap, chunks[0]);

    let mut lines = Vec::new();
    for control in app.screen.controls() {
        let focused = is_focused(&app.screen, &Item::Control(*control));
        lines.push(Line::from(vec![
            Span::raw(if focused { "> " } else { "  " }),
            button_span(control, focused),
        ]));
        lines.push(Line::styled(
            format!("    {}", describe(control.transition)),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), chunks[2]);
}
