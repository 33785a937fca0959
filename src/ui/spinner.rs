//! Loading indicator.

use crate::ui::theme::ACCENT;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }

    pub fn widget(&self, label: &str) -> Paragraph<'static> {
        Paragraph::new(Line::from(vec![
            Span::styled(self.glyph(), Style::default().fg(ACCENT)),
            Span::raw(format!(" {}", label)),
        ]))
        .alignment(Alignment::Center)
    }
}
