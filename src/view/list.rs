use crate::actions::like::{toggle_in, LikeState};
use crate::models::post::PostSummary;
use crate::models::user::UserProfile;

#[derive(Debug, Clone, Default)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<PostSummary>,
}

impl SearchView {
    pub fn toggle_like(&mut self, post_id: &str) -> Option<LikeState> {
        toggle_in(&mut self.results, post_id)
    }

    pub fn card(&self, post_id: &str) -> Option<&PostSummary> {
        self.results.iter().find(|p| p.id == post_id)
    }
}

#[derive(Debug, Clone)]
pub struct VisitView {
    pub profile: UserProfile,
    pub posts: Vec<PostSummary>,
}

impl VisitView {
    pub fn toggle_like(&mut self, post_id: &str) -> Option<LikeState> {
        toggle_in(&mut self.posts, post_id)
    }

    pub fn card(&self, post_id: &str) -> Option<&PostSummary> {
        self.posts.iter().find(|p| p.id == post_id)
    }
}
