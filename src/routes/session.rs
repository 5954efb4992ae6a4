use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Extension, Router};
use maud::Markup;

use super::AppState;
use crate::components::layout;
use crate::middleware::visitor::Sid;
use crate::services::DataSource;

async fn login_page<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
) -> Markup {
    let user = app.views.user(sid.0);
    layout::login_page(user.as_ref(), &app.cfg.demo_user)
}

/// Mock sign-in: every visitor becomes the configured demo user.
#[tracing::instrument(skip_all)]
async fn login<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
) -> impl IntoResponse {
    let user = app.cfg.demo_user.clone();
    tracing::info!(user = %user.id, "Signed in");
    app.views.sign_in(sid.0, user);
    Redirect::to("/")
}

#[tracing::instrument(skip_all)]
async fn logout<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
) -> impl IntoResponse {
    app.views.sign_out(sid.0);
    tracing::info!("Signed out");
    Redirect::to("/")
}

pub fn router<D: DataSource>() -> Router<AppState<D>> {
    Router::new()
        .route("/login", get(login_page::<D>).post(login::<D>))
        .route("/logout", post(logout::<D>))
}
