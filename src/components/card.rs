use maud::{html, Markup};

use super::layout::avatar;
use super::post::like_button;
use crate::models::post::{format_date, PostSummary};

/// Longest excerpt shown on a card, in characters.
const EXCERPT_CHARS: usize = 160;

/// A post card. `like_url` is where its like button posts to.
pub fn render(post: &PostSummary, like_url: &str) -> Markup {
    html! {
        article.card {
            @if let Some(image) = &post.image {
                img.thumb src=(image) alt=(post.title);
            }
            .tags {
                @for tag in &post.tags {
                    span.badge { (tag) }
                }
            }
            h3 { a href=(format!("/post/{}", post.id)) { (post.title) } }
            p.excerpt { (excerpt(&post.content)) }
            .byline {
                (avatar(post.author.avatar.as_deref(), &post.author.name, &post.author.initial()))
                a href=(format!("/visit/{}", post.author.id)) { (post.author.name) }
                span.date { (format_date(&post.created_at)) }
                (like_button(like_url, &post.like))
                a.comment-count href=(format!("/post/{}#comments", post.id)) { (post.comments) }
            }
        }
    }
}

pub fn list(posts: &[PostSummary], like_url: impl Fn(&PostSummary) -> String) -> Markup {
    html! {
        .cards {
            @for post in posts {
                (render(post, &like_url(post)))
            }
        }
    }
}

fn excerpt(content: &str) -> String {
    let first = content.lines().next().unwrap_or_default();
    match first.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", &first[..cut]),
        None => first.to_owned(),
    }
}
