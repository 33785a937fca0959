//! One post in the list: author heading, body, and its two actions.

use crate::posts::Post;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT};
use crossterm::event::KeyCode;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::ListItem;

/// Actions a post exposes. The caller binds them to the post's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Edit,
    Delete,
}

impl PostAction {
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('e') | KeyCode::Enter => Some(PostAction::Edit),
            KeyCode::Char('d') | KeyCode::Delete => Some(PostAction::Delete),
            _ => None,
        }
    }
}

pub struct PostItem<'a> {
    post: &'a Post,
    selected: bool,
}

impl<'a> PostItem<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            post,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            self.post.author.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(self.post.body.lines().map(|line| {
            Line::from(Span::styled(line, Style::default().fg(HEADER_TEXT)))
        }));
        if self.selected {
            lines.push(Line::from(Span::styled(
                "[e] Edit  [d] Delete",
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        lines.push(Line::from(""));
        lines
    }

    pub fn list_item(&self) -> ListItem<'a> {
        let item = ListItem::new(Text::from(self.lines()));
        if self.selected {
            item.style(Style::default().bg(ACTIVE_HIGHLIGHT))
        } else {
            item
        }
    }

    /// Single-line form for non-interactive output.
    pub fn summary(&self) -> String {
        format!(
            "#{} {}: {}",
            self.post.id,
            self.post.author,
            self.post.body.replace('\n', " ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_show_author_then_body() {
        let post = Post::new(1, "Ann", "one\ntwo");
        let lines = PostItem::new(&post).lines();
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, vec!["Ann", "one", "two", ""]);
    }

    #[test]
    fn selected_item_lists_actions() {
        let post = Post::new(1, "Ann", "hi");
        let lines = PostItem::new(&post).selected(true).lines();
        assert!(lines.iter().any(|l| l.to_string().contains("[d] Delete")));
    }

    #[test]
    fn summary_is_single_line() {
        let post = Post::new(4, "Ann", "a\nb");
        assert_eq!(PostItem::new(&post).summary(), "#4 Ann: a b");
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(PostAction::from_key(KeyCode::Char('e')), Some(PostAction::Edit));
        assert_eq!(PostAction::from_key(KeyCode::Delete), Some(PostAction::Delete));
        assert_eq!(PostAction::from_key(KeyCode::Char('x')), None);
    }
}
