use std::sync::Arc;
use std::time::Duration;

use axum::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::{DataError, DataSource, Svc};
use crate::actions::like::LikeState;
use crate::actions::search::filter_posts;
use crate::models::post::{CreatePost, Post, PostSummary};
use crate::models::user::UserProfile;

const SEED: &str = include_str!("../../fixtures/seed.json");

#[derive(Deserialize)]
struct Seed {
    users: Vec<UserProfile>,
    posts: Vec<Post>,
}

/// In-memory stand-in for the blog API. Every call waits `latency` first.
#[derive(Clone)]
pub struct MockData {
    users: Arc<Vec<UserProfile>>,
    posts: Arc<RwLock<Vec<Post>>>,
    latency: Duration,
}

impl Svc for MockData {}

impl MockData {
    pub fn new(users: Vec<UserProfile>, posts: Vec<Post>, latency: Duration) -> Self {
        Self {
            users: Arc::new(users),
            posts: Arc::new(RwLock::new(posts)),
            latency,
        }
    }

    /// Data set bundled under `fixtures/seed.json`.
    pub fn seeded(latency: Duration) -> anyhow::Result<Self> {
        let seed: Seed = serde_json::from_str(SEED)?;
        info!(
            users = seed.users.len(),
            posts = seed.posts.len(),
            "Loaded mock data"
        );
        Ok(Self::new(seed.users, seed.posts, latency))
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn user(&self, user_id: &str) -> Result<&UserProfile, DataError> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| DataError::UserNotFound(user_id.to_owned()))
    }
}

#[async_trait]
impl DataSource for MockData {
    #[tracing::instrument(skip(self))]
    async fn fetch_post(&self, id: &str) -> Result<Post, DataError> {
        self.delay().await;
        let posts = self.posts.read().await;
        posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DataError::PostNotFound(id.to_owned()))
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_user_profile(&self, user_id: &str) -> Result<UserProfile, DataError> {
        self.delay().await;
        let mut profile = self.user(user_id)?.clone();
        let posts = self.posts.read().await;
        let count = posts.iter().filter(|p| p.author.id == user_id).count();
        profile.post_count = u32::try_from(count).unwrap_or(u32::MAX);
        Ok(profile)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_user_posts(&self, user_id: &str) -> Result<Vec<PostSummary>, DataError> {
        self.delay().await;
        self.user(user_id)?;
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|p| p.author.id == user_id)
            .map(Post::summary)
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn search_posts(&self, query: &str) -> Result<Vec<PostSummary>, DataError> {
        self.delay().await;
        let posts = self.posts.read().await;
        let corpus: Vec<PostSummary> = posts.iter().map(Post::summary).collect();
        let hits = filter_posts(&corpus, query);
        debug!(hits = hits.len(), "Search done");
        Ok(hits)
    }

    #[tracing::instrument(skip_all, fields(author = %post.author.id))]
    async fn submit_post(&self, post: &CreatePost) -> Result<Post, DataError> {
        self.delay().await;
        if post.title.trim().is_empty() || post.content.trim().is_empty() {
            return Err(DataError::Rejected("title and content are required".into()));
        }
        self.user(&post.author.id)?;

        let created = Post {
            id: format!("post-{}", Uuid::now_v7()),
            title: post.title.trim().to_owned(),
            content: post.content.trim().to_owned(),
            image: post.image.clone(),
            author: post.author.clone(),
            tags: post.tags.clone(),
            like: LikeState::default(),
            comments: Vec::new(),
            created_at: Utc::now(),
        };
        self.posts.write().await.push(created.clone());
        info!(id = %created.id, "Post published");
        Ok(created)
    }
}
