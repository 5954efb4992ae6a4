use crate::actions::comment::submit_comment;
use crate::actions::Ctx;
use crate::models::post::{Comment, Post};

/// Comments shown before "See all".
pub const COLLAPSED_COMMENTS: usize = 2;

#[derive(Debug, Clone)]
pub struct PostView {
    pub post: Post,
    pub comment_input: String,
    pub show_all_comments: bool,
}

#[derive(Debug, Clone)]
pub enum PostAction {
    ToggleLike,
    SubmitComment(String),
    ShowAllComments,
}

impl PostView {
    pub fn new(post: Post) -> Self {
        Self {
            post,
            comment_input: String::new(),
            show_all_comments: false,
        }
    }

    pub fn apply(&mut self, action: PostAction, ctx: &Ctx<'_>) {
        match action {
            PostAction::ToggleLike => self.post.like.toggle(),
            PostAction::SubmitComment(input) => {
                self.comment_input = input;
                submit_comment(&mut self.post.comments, &mut self.comment_input, ctx);
            }
            PostAction::ShowAllComments => self.show_all_comments = true,
        }
    }

    pub fn visible_comments(&self) -> &[Comment] {
        let comments = self.post.comments.as_slice();
        if self.show_all_comments {
            comments
        } else {
            &comments[..comments.len().min(COLLAPSED_COMMENTS)]
        }
    }

    pub fn has_hidden_comments(&self) -> bool {
        self.visible_comments().len() < self.post.comments.len()
    }
}
