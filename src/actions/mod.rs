//! State transforms behind every page action.
//!
//! Each transform is synchronous and receives what it needs from the
//! outside world through [`Ctx`] rather than reading it from ambient state.

pub mod comment;
pub mod draft;
pub mod like;
pub mod search;
pub mod tags;

use chrono::{DateTime, Utc};

use crate::models::user::SessionUser;

/// Caller-supplied context for a transform.
#[derive(Debug, Clone, Copy)]
pub struct Ctx<'a> {
    pub user: Option<&'a SessionUser>,
    pub now: DateTime<Utc>,
}

impl<'a> Ctx<'a> {
    pub fn new(user: Option<&'a SessionUser>) -> Self {
        Self {
            user,
            now: Utc::now(),
        }
    }

    pub fn at(user: Option<&'a SessionUser>, now: DateTime<Utc>) -> Self {
        Self { user, now }
    }
}
