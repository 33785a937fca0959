//! Create/edit form editing.

use postboard::posts::{Post, PostDraft};
use postboard::ui::editor::{Field, FormIntent, FormReducer, PostForm, Submission};
use postboard::ui::mvi::Reducer;

fn type_text(form: PostForm, text: &str) -> PostForm {
    text.chars()
        .fold(form, |form, ch| FormReducer::reduce(form, FormIntent::Insert(ch)))
}

#[test]
fn typing_fills_focused_field() {
    let form = type_text(PostForm::blank(), "Ann");
    let form = FormReducer::reduce(form, FormIntent::NextField);
    let form = type_text(form, "Hi");

    assert_eq!(form.field(Field::Author), "Ann");
    assert_eq!(form.field(Field::Body), "Hi");
    assert_eq!(form.submission(), Submission::Create(PostDraft::new("Ann", "Hi")));
}

#[test]
fn newline_only_lands_in_body() {
    let form = FormReducer::reduce(PostForm::blank(), FormIntent::Newline);
    assert_eq!(form.author, "");

    let form = FormReducer::reduce(form, FormIntent::PrevField);
    assert_eq!(form.focus, Field::Body);
    let form = type_text(form, "a\nb");
    assert_eq!(form.body, "a\nb");
}

#[test]
fn backspace_removes_last_char_and_stops_at_empty() {
    let form = type_text(PostForm::blank(), "ab");
    let form = FormReducer::reduce(form, FormIntent::Backspace);
    assert_eq!(form.author, "a");
    let form = FormReducer::reduce(form, FormIntent::Backspace);
    let form = FormReducer::reduce(form, FormIntent::Backspace);
    assert_eq!(form.author, "");
}

#[test]
fn edited_form_keeps_id() {
    let form = PostForm::for_post(&Post::new("abc", "A", "B"));
    let form = FormReducer::reduce(form, FormIntent::Backspace);
    assert_eq!(form.submission(), Submission::Update(Post::new("abc", "", "B")));
}
