use maud::{html, Markup};

use super::layout::avatar;
use crate::actions::like::LikeState;
use crate::models::post::{format_date, Comment};
use crate::models::user::SessionUser;
use crate::view::PostView;

pub fn detail(view: &PostView, user: Option<&SessionUser>) -> Markup {
    let post = &view.post;
    html! {
        article.post-detail {
            @if let Some(image) = &post.image {
                img.cover src=(image) alt=(post.title);
            }
            h1 { (post.title) }
            .tags {
                @for tag in &post.tags {
                    span.badge { (tag) }
                }
            }
            .byline {
                a href=(format!("/visit/{}", post.author.id)) {
                    (avatar(post.author.avatar.as_deref(), &post.author.name, &post.author.initial()))
                    span.name { (post.author.name) }
                }
                span.date { (format_date(&post.created_at)) }
                (like_button(&format!("/post/{}/like", post.id), &post.like))
                (comment_count(post.comments.len(), false))
            }
            .prose {
                @for paragraph in post.paragraphs() {
                    p { (paragraph) }
                }
            }
        }
        (comments_section(view, user))
    }
}

/// Replaces itself when clicked.
pub fn like_button(url: &str, like: &LikeState) -> Markup {
    html! {
        button.like.liked[like.is_liked()]
            hx-post=(url)
            hx-swap="outerHTML"
            aria-pressed=(if like.is_liked() { "true" } else { "false" }) {
            span.heart { "♥" }
            span.count { (like.count()) }
        }
    }
}

/// Byline comment count. With `oob` set htmx swaps it in by id alongside
/// whatever the response targets.
pub fn comment_count(count: usize, oob: bool) -> Markup {
    html! {
        span.comment-count id="comment-count" hx-swap-oob=[oob.then_some("true")] { (count) }
    }
}

pub fn comments_section(view: &PostView, user: Option<&SessionUser>) -> Markup {
    let post = &view.post;
    html! {
        section id="comments" {
            h2 { "Comments (" (post.comments.len()) ")" }
            @if let Some(user) = user {
                form.comment-form
                    hx-post=(format!("/post/{}/comments", post.id))
                    hx-target="#comments"
                    hx-swap="outerHTML" {
                    (avatar(user.avatar.as_deref(), &user.name, &user.initial()))
                    textarea name="content" rows="3" placeholder="Write a comment..." { (view.comment_input) }
                    button type="submit" { "Post Comment" }
                }
            }
            @for comment in view.visible_comments() {
                (comment_item(comment))
            }
            @if view.has_hidden_comments() {
                button.see-all
                    hx-post=(format!("/post/{}/comments/all", post.id))
                    hx-target="#comments"
                    hx-swap="outerHTML" {
                    "See all " (post.comments.len()) " comments"
                }
            }
        }
    }
}

fn comment_item(comment: &Comment) -> Markup {
    html! {
        div.comment id=(comment.id) {
            (avatar(comment.author.avatar.as_deref(), &comment.author.name, &comment.author.initial()))
            div {
                p.meta {
                    span.name { (comment.author.name) }
                    span.date { (format_date(&comment.created_at)) }
                }
                p { (comment.content) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_button_reflects_state() {
        let html = like_button("/post/p/like", &LikeState::new(21, true)).into_string();
        assert!(html.contains("liked"));
        assert!(html.contains(">21<"));
        assert!(html.contains("hx-post=\"/post/p/like\""));

        let html = like_button("/post/p/like", &LikeState::new(20, false)).into_string();
        assert!(!html.contains("class=\"like liked\""));
    }

    #[test]
    fn comment_count_marks_out_of_band_swaps() {
        let html = comment_count(4, true).into_string();
        assert!(html.contains("id=\"comment-count\""));
        assert!(html.contains("hx-swap-oob=\"true\""));
        assert!(html.contains(">4<"));
        assert!(!comment_count(4, false).into_string().contains("hx-swap-oob"));
    }
}
