use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Router};
use maud::html;
use serde::Deserialize;

use super::{card_like, AppState};
use crate::components::{layout, post::like_button, profile};
use crate::helpers::LogErr;
use crate::middleware::visitor::Sid;
use crate::services::DataSource;
use crate::view::{Page, VisitView};

#[derive(Deserialize, Debug, Default)]
pub struct VisitParams {
    /// Set after the visitor's own post went out.
    #[serde(default)]
    published: bool,
}

#[tracing::instrument(skip_all, fields(user_id = %user_id))]
async fn visit_page<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Path(user_id): Path<String>,
    Query(params): Query<VisitParams>,
) -> Response {
    let user = app.views.user(sid.0);
    let (profile, posts) = tokio::join!(
        app.data.fetch_user_profile(&user_id),
        app.data.fetch_user_posts(&user_id),
    );

    let Some(profile) = profile.log_err("fetch user profile") else {
        app.views.update(sid.0, |v| v.page = None);
        return (
            StatusCode::NOT_FOUND,
            layout::message_page(
                user.as_ref(),
                "User not found",
                "The profile you're looking for doesn't exist.",
            ),
        )
            .into_response();
    };
    let posts = posts.log_err("fetch user posts").unwrap_or_default();

    let view = VisitView { profile, posts };
    let body = html! {
        @if params.published {
            p.flash role="status" { "Post published successfully!" }
        }
        (profile::render(&view))
    };
    let html = layout::page(user.as_ref(), &view.profile.name, body);
    app.views.open(sid.0, Page::Visit(view));
    html.into_response()
}

#[tracing::instrument(skip_all, fields(user_id = %user_id, post_id = %post_id))]
async fn like_profile_post<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Path((user_id, post_id)): Path<(String, String)>,
) -> Response {
    let url = format!("/visit/{user_id}/like/{post_id}");
    let outcome = app.on_page(sid, |page, _| match page {
        Page::Visit(view) if view.profile.id == user_id => Some(
            view.toggle_like(&post_id)
                .map(|like| like_button(&url, &like)),
        ),
        _ => None,
    });
    card_like(outcome)
}

pub fn router<D: DataSource>() -> Router<AppState<D>> {
    Router::new()
        .route("/visit/:user_id", get(visit_page::<D>))
        .route("/visit/:user_id/like/:post_id", post(like_profile_post::<D>))
}
