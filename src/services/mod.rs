pub mod mock;

use axum::async_trait;

use crate::models::post::{CreatePost, Post, PostSummary};
use crate::models::user::UserProfile;

pub trait Svc: Clone + Send + Sync + 'static {}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("post {0} not found")]
    PostNotFound(String),
    #[error("user {0} not found")]
    UserNotFound(String),
    #[error("post rejected: {0}")]
    Rejected(String),
}

/// Where pages load their data from.
#[async_trait]
pub trait DataSource<E = DataError>: Svc {
    async fn fetch_post(&self, id: &str) -> Result<Post, E>;
    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile, E>;
    async fn fetch_user_posts(&self, user_id: &str) -> Result<Vec<PostSummary>, E>;
    async fn search_posts(&self, query: &str) -> Result<Vec<PostSummary>, E>;
    async fn submit_post(&self, post: &CreatePost) -> Result<Post, E>;
}
