pub mod helper;
pub mod keys;
pub mod optimization;
pub mod start;
pub mod summary;
pub mod target;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::wizard::{ScreenId, STEP_COUNT};

/// Outer block for a wizard page, titled with its step
fn page_block(id: ScreenId, color: Color) -> Block<'static> {
    let title = match id.step() {
        Some(step) => format!(" Step {}/{} - {} ", step, STEP_COUNT, id.title()),
        None => format!(" {} ", id.title()),
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}
