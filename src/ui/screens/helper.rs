use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::ui::widgets::form::render_controls;
use crate::wizard::Technique;

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )
}

/// Render the "don't know" detour explaining the targets
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = super::page_block(app.screen.id, Color::Magenta);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![
        heading("Microcontroller"),
        Line::from("Cortex-M class boards with a few hundred KB of flash and tens of KB of RAM."),
        Line::from("Pick this when the model must fit next to firmware on a single chip."),
        Line::from(""),
        heading("FPGA"),
        Line::from("Programmable logic running a fixed-point accelerator."),
        Line::from("Pick this when throughput matters more than memory footprint."),
        Line::from(""),
        heading("Techniques"),
    ];
    for technique in Technique::ALL {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:24}", technique.label()), Style::default().fg(Color::Green)),
            Span::raw(technique.blurb()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Still unsure? Start with a microcontroller and pruning only.",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);
    render_controls(frame, chunks[1], &app.screen);
}
