use crate::posts::{Post, PostDraft, PostId};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Author,
    Body,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Author => "Author",
            Field::Body => "Post",
        }
    }
}

/// Text fields of the create/edit form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostForm {
    /// Set when editing an existing post.
    pub id: Option<PostId>,
    pub author: String,
    pub body: String,
    pub focus: Field,
}

impl UiState for PostForm {}

/// What the form hands back on submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(PostDraft),
    Update(Post),
}

impl PostForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form pre-filled with an existing post.
    pub fn for_post(post: &Post) -> Self {
        Self {
            id: Some(post.id.clone()),
            author: post.author.clone(),
            body: post.body.clone(),
            focus: Field::Author,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Author => &self.author,
            Field::Body => &self.body,
        }
    }

    pub(crate) fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Author => &mut self.author,
            Field::Body => &mut self.body,
        }
    }

    /// Current field values as a create or update payload. No validation:
    /// empty fields are submitted as they are.
    pub fn submission(&self) -> Submission {
        let draft = PostDraft::new(self.author.clone(), self.body.clone());
        match &self.id {
            Some(id) => Submission::Update(draft.with_id(id.clone())),
            None => Submission::Create(draft),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Post"
        } else {
            "Add Post"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_form_submits_create() {
        let form = PostForm::blank();
        assert!(!form.is_editing());
        assert_eq!(
            form.submission(),
            Submission::Create(PostDraft::new("", ""))
        );
        assert_eq!(form.submit_label(), "Add Post");
    }

    #[test]
    fn form_for_post_submits_update_with_id() {
        let post = Post::new(7, "Ann", "Hello");
        let mut form = PostForm::for_post(&post);
        form.body.push_str(" there");
        assert_eq!(
            form.submission(),
            Submission::Update(Post::new(7, "Ann", "Hello there"))
        );
        assert_eq!(form.submit_label(), "Update Post");
    }
}
