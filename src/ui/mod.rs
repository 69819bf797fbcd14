pub mod screens;
pub mod widgets;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use std::io::Stdout;
use std::time::Duration;

use crate::app::App;
use crate::wizard::ScreenId;
use widgets::WarningDialog;

/// Run the TUI application
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        // Check for status message expiry
        app.check_status_expiry();

        // Poll with timeout to allow periodic checks
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the current screen
fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(10),    // Wizard page
            Constraint::Length(3),  // Status/help bar
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    let page = chunks[1];
    match app.screen.id {
        ScreenId::Start => screens::start::render(app, frame, page),
        ScreenId::Target => screens::target::render(app, frame, page),
        ScreenId::Optimization => screens::optimization::render(app, frame, page),
        ScreenId::Helper => screens::helper::render(app, frame, page),
        ScreenId::Summary => screens::summary::render(app, frame, page),
    }

    render_help_bar(app, frame, chunks[2]);

    if app.show_keys {
        screens::keys::render(frame);
    }

    if let Some(ref warning) = app.warning {
        let area = frame.area();
        WarningDialog::new(warning).render(area, frame.buffer_mut());
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Compress Wizard ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "(pruning, distillation and Huffman coding for deployed networks)",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn render_help_bar(app: &App, frame: &mut Frame, area: Rect) {
    let mut hints = vec![
        Span::styled(" [Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next item "),
        Span::styled(" [Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Press "),
        Span::styled(" [Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Back "),
        Span::styled(" [F1]", Style::default().fg(Color::Yellow)),
        Span::raw(" Keys "),
        Span::styled(" [Ctrl+C]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit "),
    ];

    // Status message overrides the hints
    if let Some(ref msg) = app.status_message {
        hints.clear();
        hints.push(Span::styled(msg.clone(), Style::default().fg(Color::Green)));
    }

    let help = Paragraph::new(Line::from(hints))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(help, area);
}

/// Handle key input
fn handle_key(app: &mut App, key: KeyEvent) {
    // Global quit with Ctrl+C
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // The warning is modal
    if app.warning.is_some() {
        handle_warning(app, key);
        return;
    }

    if app.show_keys {
        // Any key closes help
        app.show_keys = false;
        return;
    }

    match key.code {
        KeyCode::F(1) => app.show_keys = true,
        KeyCode::Esc => app.go_back(),
        KeyCode::Tab | KeyCode::Down => app.screen.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.screen.focus_prev(),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(' ') => app.space(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.type_char(c),
        _ => {}
    }
}

fn handle_warning(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('c') => {
            app.dismiss_warning();
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_warning_button();
        }
        _ => {}
    }
}
