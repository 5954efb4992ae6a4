use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use maud::html;
use serde::Deserialize;

use super::{stale, AppState};
use crate::actions::Ctx;
use crate::components::{layout, post as post_view};
use crate::helpers::LogErr;
use crate::middleware::visitor::Sid;
use crate::services::DataSource;
use crate::view::{Page, PostAction, PostView};

#[derive(Deserialize, Debug)]
pub struct CommentForm {
    #[serde(default)]
    content: String,
}

#[tracing::instrument(skip_all, fields(id = %id))]
async fn show_post<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Path(id): Path<String>,
) -> Response {
    let user = app.views.user(sid.0);
    let Some(post) = app.data.fetch_post(&id).await.log_err("fetch post") else {
        app.views.update(sid.0, |v| v.page = None);
        return (
            StatusCode::NOT_FOUND,
            layout::message_page(
                user.as_ref(),
                "Post not found",
                "The post you're looking for doesn't exist.",
            ),
        )
            .into_response();
    };

    let view = PostView::new(post);
    let html = layout::page(
        user.as_ref(),
        &view.post.title,
        post_view::detail(&view, user.as_ref()),
    );
    app.views.open(sid.0, Page::Post(view));
    html.into_response()
}

#[tracing::instrument(skip_all, fields(id = %id))]
async fn like_post<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Path(id): Path<String>,
) -> Response {
    let url = format!("/post/{id}/like");
    app.on_page(sid, |page, user| match page {
        Page::Post(view) if view.post.id == id => {
            view.apply(PostAction::ToggleLike, &Ctx::new(user));
            Some(post_view::like_button(&url, &view.post.like))
        }
        _ => None,
    })
    .map_or_else(stale, IntoResponse::into_response)
}

#[tracing::instrument(skip_all, fields(id = %id))]
async fn add_comment<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Path(id): Path<String>,
    Form(form): Form<CommentForm>,
) -> Response {
    app.on_page(sid, |page, user| match page {
        Page::Post(view) if view.post.id == id => {
            view.apply(PostAction::SubmitComment(form.content), &Ctx::new(user));
            Some(html! {
                (post_view::comments_section(view, user))
                (post_view::comment_count(view.post.comments.len(), true))
            })
        }
        _ => None,
    })
    .map_or_else(stale, IntoResponse::into_response)
}

async fn show_all_comments<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Path(id): Path<String>,
) -> Response {
    app.on_page(sid, |page, user| match page {
        Page::Post(view) if view.post.id == id => {
            view.apply(PostAction::ShowAllComments, &Ctx::new(user));
            Some(post_view::comments_section(view, user))
        }
        _ => None,
    })
    .map_or_else(stale, IntoResponse::into_response)
}

pub fn router<D: DataSource>() -> Router<AppState<D>> {
    Router::new()
        .route("/post/:id", get(show_post::<D>))
        .route("/post/:id/like", post(like_post::<D>))
        .route("/post/:id/comments", post(add_comment::<D>))
        .route("/post/:id/comments/all", post(show_all_comments::<D>))
}
