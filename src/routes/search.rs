use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Router};
use serde::Deserialize;

use super::{card_like, AppState};
use crate::components::{layout, post::like_button, search};
use crate::helpers::LogErr;
use crate::middleware::visitor::Sid;
use crate::services::DataSource;
use crate::view::{Page, SearchView};

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
}

#[tracing::instrument(skip_all, fields(q = %params.q))]
async fn search_page<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Query(params): Query<SearchParams>,
) -> Response {
    let user = app.views.user(sid.0);
    let query = params.q.trim().to_owned();
    let results = if query.is_empty() {
        Vec::new()
    } else {
        app.data
            .search_posts(&query)
            .await
            .log_err("search")
            .unwrap_or_default()
    };

    let view = SearchView { query, results };
    let html = layout::page(user.as_ref(), "Search", search::render(&view));
    app.views.open(sid.0, Page::Search(view));
    html.into_response()
}

#[tracing::instrument(skip_all, fields(post_id = %post_id))]
async fn like_result<D: DataSource>(
    State(app): State<AppState<D>>,
    Extension(sid): Extension<Sid>,
    Path(post_id): Path<String>,
) -> Response {
    let url = format!("/search/like/{post_id}");
    let outcome = app.on_page(sid, |page, _| match page {
        Page::Search(view) => Some(
            view.toggle_like(&post_id)
                .map(|like| like_button(&url, &like)),
        ),
        _ => None,
    });
    card_like(outcome)
}

pub fn router<D: DataSource>() -> Router<AppState<D>> {
    Router::new()
        .route("/search", get(search_page::<D>))
        .route("/search/like/:post_id", post(like_result::<D>))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::testing::TestClient;

    #[tokio::test]
    async fn empty_query_prompts_for_a_search() {
        let mut client = TestClient::new();
        let res = client.get("/search").await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains("Search for posts"));
    }

    #[tokio::test]
    async fn lists_matching_posts() {
        let mut client = TestClient::new();
        let res = client.get("/search?q=frontend").await;
        assert!(res.body.contains("Showing results for &quot;frontend&quot;"));
        assert!(res.body.contains("/post/post-1"));
        assert!(!res.body.contains("/post/post-6"));
    }

    #[tokio::test]
    async fn no_match_shows_empty_state() {
        let mut client = TestClient::new();
        let res = client.get("/search?q=zzz").await;
        assert!(res.body.contains("No results found"));
    }

    #[tokio::test]
    async fn like_toggles_one_result() {
        let mut client = TestClient::new();
        client.get("/search?q=frontend").await;

        let res = client.post("/search/like/post-1").await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains(">21<"));

        let missing = client.post("/search/like/no-such-post").await;
        assert_eq!(missing.status, StatusCode::NO_CONTENT);
        assert!(!missing.headers.contains_key("hx-refresh"));

        // the earlier like survived, so this one undoes it
        let res = client.post("/search/like/post-1").await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.body.contains(">20<"));
    }

    #[tokio::test]
    async fn like_without_open_search_is_stale() {
        let mut client = TestClient::new();
        client.get("/post/post-1").await;
        let res = client.post("/search/like/post-1").await;
        assert_eq!(res.status, StatusCode::CONFLICT);
    }
}
