use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Extension, Form, Router};
use serde::Deserialize;

use super::{hx_redirect, stale, AppState};
use crate::components::{draft, layout};
use crate::error::AppError;
use crate::helpers::LogErr;
use crate::middleware::visitor::Sid;
use crate::services::DataSource;
use crate::view::{DraftAction, DraftView, Page};

#[derive(Deserialize, Debug)]
pub struct TagForm {
    #[serde(default)]
    tag: String,
}

#[derive(Deserialize, Debug)]
pub struct DraftForm {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

async fn write_page<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
) -> Response {
    let Some(user) = app.views.user(sid.0) else {
        return Redirect::to("/login").into_response();
    };

    let view = DraftView::default();
    let html = layout::page(Some(&user), "Write", draft::render(&view));
    app.views.open(sid.0, Page::Write(view));
    html.into_response()
}

/// Apply `action` to the open draft of a signed-in visitor.
fn edit_draft<D: DataSource>(app: &AppState<D>, sid: Sid, action: DraftAction) -> Option<DraftView> {
    app.on_page(sid, |page, user| match page {
        Page::Write(view) if user.is_some() => {
            view.apply(action);
            Some(view.clone())
        }
        _ => None,
    })
}

async fn add_tag<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Form(form): Form<TagForm>,
) -> Response {
    edit_draft(&app, sid, DraftAction::AddTag(form.tag))
        .map(|view| draft::tag_editor(&view))
        .map_or_else(stale, IntoResponse::into_response)
}

async fn remove_tag<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Form(form): Form<TagForm>,
) -> Response {
    edit_draft(&app, sid, DraftAction::RemoveTag(form.tag))
        .map(|view| draft::tag_editor(&view))
        .map_or_else(stale, IntoResponse::into_response)
}

async fn toggle_image<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
) -> Response {
    edit_draft(&app, sid, DraftAction::ToggleSampleImage)
        .map(|view| draft::image_section(&view))
        .map_or_else(stale, IntoResponse::into_response)
}

#[tracing::instrument(skip_all)]
async fn publish<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Form(form): Form<DraftForm>,
) -> Result<Response, AppError> {
    let Some(user) = app.views.user(sid.0) else {
        return hx_redirect("/login");
    };

    let edit = DraftAction::Edit {
        title: form.title,
        content: form.content,
    };
    let checked = app.on_page(sid, |page, _| match page {
        Page::Write(view) => {
            view.apply(edit);
            view.publish_failed = false;
            if view.validate() {
                Some(Ok(view.to_create(&user)))
            } else {
                Some(Err(draft::render(view)))
            }
        }
        _ => None,
    });

    let create = match checked {
        None => return Ok(stale()),
        Some(Err(invalid)) => return Ok(invalid.into_response()),
        Some(Ok(create)) => create,
    };

    if app.data.submit_post(&create).await.log_err("submit post").is_some() {
        app.views.update(sid.0, |v| v.page = None);
        return hx_redirect(&format!("/visit/{}?published=true", user.id));
    }

    let failed = app.on_page(sid, |page, _| match page {
        Page::Write(view) => {
            view.publish_failed = true;
            Some(draft::render(view))
        }
        _ => None,
    });
    Ok(failed.map_or_else(stale, IntoResponse::into_response))
}

pub fn router<D: DataSource>() -> Router<AppState<D>> {
    Router::new()
        .route("/write", get(write_page::<D>).post(publish::<D>))
        .route("/write/tags", post(add_tag::<D>))
        .route("/write/tags/remove", post(remove_tag::<D>))
        .route("/write/image", post(toggle_image::<D>))
}
