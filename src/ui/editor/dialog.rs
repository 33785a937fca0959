use crate::ui::editor::state::{Field, PostForm};
use crate::ui::modal::Overlay;
use crate::ui::theme::{FIELD_FOCUS, HEADER_TEXT, HINT_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 60;
const CURSOR: &str = "▏";

pub fn render_editor_dialog(frame: &mut Frame, area: Rect, form: &PostForm) {
    let title = if form.is_editing() {
        "Edit Post"
    } else {
        "New Post"
    };

    let mut lines = Vec::new();
    for field in [Field::Author, Field::Body] {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(FIELD_FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));

        let value = form.field(field);
        let mut value_lines: Vec<&str> = value.split('\n').collect();
        if value_lines.is_empty() {
            value_lines.push("");
        }
        let last = value_lines.len() - 1;
        for (idx, text) in value_lines.into_iter().enumerate() {
            let mut spans = vec![
                Span::raw("  "),
                Span::styled(text.to_string(), Style::default().fg(HEADER_TEXT)),
            ];
            if focused && idx == last {
                spans.push(Span::styled(CURSOR, Style::default().fg(FIELD_FOCUS)));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("Ctrl+S: {}", form.submit_label()),
            Style::default().fg(FIELD_FOCUS),
        ),
        Span::styled("  Tab: Next field  Esc: Cancel", Style::default().fg(HINT_TEXT)),
    ]));

    Overlay::new(title, lines)
        .fixed_width(DIALOG_WIDTH)
        .render(frame, area);
}
