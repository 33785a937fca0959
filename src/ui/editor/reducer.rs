use crate::ui::editor::intent::FormIntent;
use crate::ui::editor::state::{Field, PostForm};
use crate::ui::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = PostForm;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(ch) => {
                if ch == '\n' {
                    return Self::reduce(state, FormIntent::Newline);
                }
                state.focused_mut().push(ch);
            }
            FormIntent::Newline => {
                if state.focus == Field::Body {
                    state.body.push('\n');
                }
            }
            FormIntent::Backspace => {
                state.focused_mut().pop();
            }
            // Two fields, so next and previous both toggle.
            FormIntent::NextField | FormIntent::PrevField => {
                state.focus = match state.focus {
                    Field::Author => Field::Body,
                    Field::Body => Field::Author,
                };
            }
        }
        state
    }
}
