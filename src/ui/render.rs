use crate::ui::app::App;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::post_item::PostItem;
use crate::ui::theme::{HEADER_TEXT, HINT_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let state = app.state();
    frame.render_widget(
        Header::new(app.endpoint()).widget(state, app.spinner().glyph()),
        header,
    );
    draw_body(frame, body, app);
    frame.render_widget(Footer::new(app.form_open()).widget(footer), footer);

    if let Some(form) = state.modal.form() {
        render_editor_dialog(frame, body, form);
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.state();

    // Same precedence as the list page: spinner, then error, then content.
    if state.is_loading() {
        let rect = middle_line(area);
        frame.render_widget(app.spinner().widget("Loading posts..."), rect);
        return;
    }

    if let Some(error) = state.error() {
        let lines = vec![
            Line::styled(
                format!("Error: {}", error),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ),
            Line::styled("Please try again later.", Style::default().fg(STATUS_ERROR)),
            Line::from(""),
            Line::styled("Press r to reload.", Style::default().fg(HINT_TEXT)),
        ];
        render_centered(frame, area, lines);
        return;
    }

    if state.posts().is_empty() {
        let lines = vec![
            Line::styled(
                "No posts yet.",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Line::styled("Try adding some!", Style::default().fg(HEADER_TEXT)),
        ];
        render_centered(frame, area, lines);
        return;
    }

    let items: Vec<ListItem> = state
        .posts()
        .iter()
        .enumerate()
        .map(|(idx, post)| {
            PostItem::new(post)
                .selected(idx == app.selection())
                .list_item()
        })
        .collect();
    let mut list_state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(List::new(items), area, &mut list_state);
}

fn render_centered(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'_>>) {
    let height = (lines.len() as u16).min(area.height);
    let rect = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height,
    };
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, rect);
}

fn middle_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}
