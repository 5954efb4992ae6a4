pub mod posts;
pub mod search;
pub mod session;
pub mod visit;
pub mod write;

use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use maud::Markup;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::components::layout;
use crate::config::AppCfg;
use crate::error::AppError;
use crate::middleware::logging::HttpLoggingExt;
use crate::middleware::visitor::{Sid, VisitorCookieExt};
use crate::models::user::SessionUser;
use crate::services::DataSource;
use crate::view::{Page, ViewStore};

#[derive(Clone)]
pub struct AppState<D> {
    pub data: D,
    pub views: ViewStore,
    pub cfg: Arc<AppCfg>,
}

impl<D: DataSource> AppState<D> {
    pub fn new(data: D, cfg: AppCfg) -> Self {
        Self {
            data,
            views: ViewStore::new(),
            cfg: Arc::new(cfg),
        }
    }

    /// Run `f` on the visitor's open page together with their session user.
    /// `None` when no page is open or `f` rejects the page.
    fn on_page<R>(
        &self,
        sid: Sid,
        f: impl FnOnce(&mut Page, Option<&SessionUser>) -> Option<R>,
    ) -> Option<R> {
        self.views.update(sid.0, |v| {
            let user = v.user.as_ref();
            v.page.as_mut().and_then(|page| f(page, user))
        })
    }
}

pub fn app<D: DataSource>(state: AppState<D>) -> Router {
    let assets = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("max-age=13420"),
        ))
        .layer(CompressionLayer::new())
        .service(ServeDir::new(&state.cfg.static_dir));

    Router::new()
        .route("/", get(|| async { Redirect::to("/search") }))
        .merge(posts::router())
        .merge(search::router())
        .merge(visit::router())
        .merge(write::router())
        .merge(session::router())
        .nest_service("/assets", assets)
        .with_state(state)
        .with_visitor_cookie()
        .with_http_logging()
}

/// Reply to an action aimed at a page the visitor no longer has open.
/// htmx reloads the page on `HX-Refresh`.
fn stale() -> Response {
    (
        StatusCode::CONFLICT,
        [("HX-Refresh", "true")],
        layout::stale_fragment(),
    )
        .into_response()
}

/// Reply to a like on a listing card. The outer `None` means the listing is
/// not open; the inner one means the card is not on it, which changes nothing.
fn card_like(outcome: Option<Option<Markup>>) -> Response {
    match outcome {
        None => stale(),
        Some(None) => StatusCode::NO_CONTENT.into_response(),
        Some(Some(button)) => button.into_response(),
    }
}

/// Full-page navigation from an htmx request.
fn hx_redirect(location: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(location)?;
    Ok(([("HX-Redirect", location)], "").into_response())
}


#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};

    use super::testing::TestClient;

    #[tokio::test]
    async fn root_redirects_to_search() {
        let mut client = TestClient::new();
        let res = client.get("/").await;
        assert_eq!(res.status, StatusCode::SEE_OTHER);
        assert_eq!(res.headers[header::LOCATION], "/search");
    }

    #[tokio::test]
    async fn first_visit_hands_out_a_cookie_once() {
        let mut client = TestClient::new();
        let first = client.get("/search").await;
        assert!(first.headers.contains_key(header::SET_COOKIE));
        let second = client.get("/search").await;
        assert!(!second.headers.contains_key(header::SET_COOKIE));
        assert_eq!(client.state.views.len(), 1);
    }
}
