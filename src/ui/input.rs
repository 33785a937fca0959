use crate::ui::app::App;
use crate::ui::editor::{Field, FormIntent};
use crate::ui::post_item::PostAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.form_open() {
        handle_form_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('n') | KeyCode::Char('a') => app.open_create(),
        KeyCode::Char('r') => app.request_list(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        code => {
            if let Some(action) = PostAction::from_key(code) {
                app.activate(action);
            }
        }
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_form();
        return;
    }

    let intent = match key.code {
        KeyCode::Esc => {
            app.close_modal();
            return;
        }
        KeyCode::Tab => FormIntent::NextField,
        KeyCode::BackTab => FormIntent::PrevField,
        KeyCode::Backspace => FormIntent::Backspace,
        KeyCode::Enter => {
            let in_body = app
                .state()
                .modal
                .form()
                .is_some_and(|form| form.focus == Field::Body);
            if in_body {
                FormIntent::Newline
            } else {
                FormIntent::NextField
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            FormIntent::Insert(ch)
        }
        _ => return,
    };
    app.edit_form(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
