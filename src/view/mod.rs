//! Per-visitor view state.
//!
//! A visitor has at most one open page. Loading a page replaces whatever
//! was open before, and actions only ever touch the open page.

pub mod draft;
pub mod list;
pub mod post;

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::models::user::SessionUser;

pub use draft::{DraftAction, DraftView};
pub use list::{SearchView, VisitView};
pub use post::{PostAction, PostView};

#[derive(Debug, Clone)]
pub enum Page {
    Post(PostView),
    Search(SearchView),
    Visit(VisitView),
    Write(DraftView),
}

#[derive(Debug)]
pub struct Visitor {
    pub user: Option<SessionUser>,
    pub page: Option<Page>,
    last_seen: Instant,
}

impl Default for Visitor {
    fn default() -> Self {
        Self {
            user: None,
            page: None,
            last_seen: Instant::now(),
        }
    }
}

#[derive(Clone, Default)]
pub struct ViewStore {
    visitors: Arc<DashMap<Uuid, Visitor>>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, sid: Uuid) -> Option<SessionUser> {
        self.visitors.get(&sid).and_then(|v| v.user.clone())
    }

    pub fn sign_in(&self, sid: Uuid, user: SessionUser) {
        self.update(sid, |v| v.user = Some(user));
    }

    /// Drops the session user along with any open page.
    pub fn sign_out(&self, sid: Uuid) {
        self.update(sid, |v| {
            v.user = None;
            v.page = None;
        });
    }

    /// Replace the visitor's open page.
    pub fn open(&self, sid: Uuid, page: Page) {
        self.update(sid, |v| v.page = Some(page));
    }

    /// Run `f` against the visitor's entry, creating it if needed.
    pub fn update<R>(&self, sid: Uuid, f: impl FnOnce(&mut Visitor) -> R) -> R {
        let mut entry = self.visitors.entry(sid).or_default();
        entry.last_seen = Instant::now();
        f(entry.value_mut())
    }

    /// Forget visitors idle for longer than `max_idle`.
    pub fn prune_idle(&self, max_idle: Duration) -> usize {
        let before = self.visitors.len();
        self.visitors.retain(|_, v| v.last_seen.elapsed() <= max_idle);
        let pruned = before.saturating_sub(self.visitors.len());
        if pruned > 0 {
            debug!(pruned, "Pruned idle visitors");
        }
        pruned
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> SessionUser {
        SessionUser {
            id: "u9".into(),
            name: "Ann".into(),
            avatar: None,
        }
    }

    #[test]
    fn opening_a_page_replaces_the_previous_one() {
        let store = ViewStore::new();
        let sid = Uuid::now_v7();
        store.open(sid, Page::Write(DraftView::default()));
        store.open(sid, Page::Search(SearchView::default()));

        let is_search = store.update(sid, |v| matches!(v.page, Some(Page::Search(_))));
        assert!(is_search);
    }

    #[test]
    fn sign_out_clears_user_and_page() {
        let store = ViewStore::new();
        let sid = Uuid::now_v7();
        store.sign_in(sid, ann());
        store.open(sid, Page::Write(DraftView::default()));
        assert_eq!(store.user(sid), Some(ann()));

        store.sign_out(sid);
        assert_eq!(store.user(sid), None);
        assert!(store.update(sid, |v| v.page.is_none()));
    }

    #[test]
    fn visitors_are_isolated() {
        let store = ViewStore::new();
        let (a, b) = (Uuid::now_v7(), Uuid::now_v7());
        store.sign_in(a, ann());
        assert_eq!(store.user(b), None);
    }

    #[test]
    fn prune_keeps_recent_visitors() {
        let store = ViewStore::new();
        store.sign_in(Uuid::now_v7(), ann());
        assert_eq!(store.prune_idle(Duration::from_secs(60)), 0);
        assert_eq!(store.len(), 1);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.prune_idle(Duration::ZERO), 1);
        assert_eq!(store.len(), 0);
    }
}
