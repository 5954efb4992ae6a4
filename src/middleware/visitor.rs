use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::Router;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

pub const VISITOR_COOKIE: &str = "sid";

/// Identifies whose view state a request works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sid(pub Uuid);

async fn visitor_cookie(jar: CookieJar, mut req: Request, next: Next) -> Response {
    let known = jar
        .get(VISITOR_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok());
    let sid = known.unwrap_or_else(Uuid::now_v7);
    req.extensions_mut().insert(Sid(sid));

    let res = next.run(req).await;
    if known.is_some() {
        return res;
    }

    tracing::debug!(%sid, "New visitor");
    let cookie = Cookie::build((VISITOR_COOKIE, sid.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), res).into_response()
}

pub trait VisitorCookieExt<S> {
    fn with_visitor_cookie(self) -> Self;
}

impl<S> VisitorCookieExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Tag every request with a [`Sid`], handing out a cookie on first visit
    fn with_visitor_cookie(self) -> Router<S> {
        self.layer(middleware::from_fn(visitor_cookie))
    }
}
