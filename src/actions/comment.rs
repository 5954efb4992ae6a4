use uuid::Uuid;

use super::Ctx;
use crate::models::post::Comment;

/// Ids are UUIDv7, so they sort by creation time and never repeat.
pub fn new_comment_id() -> String {
    format!("comment-{}", Uuid::now_v7())
}

/// Append the text in `input` as a comment by the session user and clear
/// the input. Blank input or an anonymous visitor leaves everything as is.
///
/// Returns whether a comment was appended.
pub fn submit_comment(comments: &mut Vec<Comment>, input: &mut String, ctx: &Ctx<'_>) -> bool {
    let content = input.trim();
    let Some(user) = ctx.user else {
        return false;
    };
    if content.is_empty() {
        return false;
    }

    comments.push(Comment {
        id: new_comment_id(),
        content: content.to_owned(),
        author: user.into(),
        created_at: ctx.now,
    });
    input.clear();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::SessionUser;

    fn ann() -> SessionUser {
        SessionUser {
            id: "u9".into(),
            name: "Ann".into(),
            avatar: None,
        }
    }

    #[test]
    fn whitespace_only_is_ignored() {
        let user = ann();
        let mut comments = vec![];
        let mut input = String::from("  ");

        assert!(!submit_comment(&mut comments, &mut input, &Ctx::new(Some(&user))));
        assert!(comments.is_empty());
        assert_eq!(input, "  ");
    }

    #[test]
    fn anonymous_visitor_cannot_comment() {
        let mut comments = vec![];
        let mut input = String::from("Nice post");

        assert!(!submit_comment(&mut comments, &mut input, &Ctx::new(None)));
        assert!(comments.is_empty());
        assert_eq!(input, "Nice post");
    }

    #[test]
    fn appends_one_comment_by_session_user() {
        let user = ann();
        let now = "2025-05-28T09:30:00Z".parse().unwrap();
        let ctx = Ctx::at(Some(&user), now);
        let mut comments = vec![];
        let mut input = String::from("Nice post");

        assert!(submit_comment(&mut comments, &mut input, &ctx));
        assert_eq!(comments.len(), 1);
        let c = &comments[0];
        assert_eq!(c.content, "Nice post");
        assert_eq!(c.author.id, "u9");
        assert_eq!(c.author.name, "Ann");
        assert_eq!(c.created_at, now);
        assert!(input.is_empty());
    }

    #[test]
    fn keeps_insertion_order_and_unique_ids() {
        let user = ann();
        let ctx = Ctx::new(Some(&user));
        let mut comments = vec![];
        for text in ["first", " second ", "third"] {
            let mut input = text.to_owned();
            submit_comment(&mut comments, &mut input, &ctx);
        }

        let contents: Vec<_> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, ["first", "second", "third"]);
        assert_ne!(comments[0].id, comments[1].id);
        assert_ne!(comments[1].id, comments[2].id);
    }
}
