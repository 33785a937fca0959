//! Overlay frame used for the create/edit form.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub struct Overlay<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    width: Option<u16>,
}

impl<'a> Overlay<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            width: None,
        }
    }

    /// Fix the outer width instead of sizing to content.
    pub fn fixed_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = self
            .width
            .unwrap_or_else(|| content_width.saturating_add(4));
        let height = (self.lines.len() as u16).saturating_add(2);
        let rect = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(Span::styled(self.title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, rect);
    }
}
