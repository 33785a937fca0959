use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use crate::ui::posts::PostsState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }

    pub fn widget(&self, state: &PostsState, spinner: &str) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = if state.is_loading() {
            (format!("{} syncing", spinner), Style::default().fg(ACCENT))
        } else if state.error().is_some() {
            ("● error".to_string(), Style::default().fg(STATUS_ERROR))
        } else {
            ("● synced".to_string(), Style::default().fg(STATUS_OK))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Posts", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} posts", state.posts().len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
