use serde::{Deserialize, Serialize};

use crate::models::post::PostSummary;

/// Like count paired with the visitor's liked flag.
///
/// A liked state always carries a count of at least one, so toggling back
/// and forth is an involution and the count never underflows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "RawLikes")]
pub struct LikeState {
    likes: u32,
    is_liked: bool,
}

#[derive(Deserialize)]
struct RawLikes {
    likes: u32,
    #[serde(default)]
    is_liked: bool,
}

impl From<RawLikes> for LikeState {
    fn from(raw: RawLikes) -> Self {
        LikeState::new(raw.likes, raw.is_liked)
    }
}

impl LikeState {
    pub fn new(likes: u32, is_liked: bool) -> Self {
        let likes = if is_liked { likes.max(1) } else { likes };
        Self { likes, is_liked }
    }

    pub fn count(&self) -> u32 {
        self.likes
    }

    pub fn is_liked(&self) -> bool {
        self.is_liked
    }

    /// Flip the liked flag and move the count with it. Applied locally,
    /// never confirmed with the data source.
    pub fn toggle(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes = self.likes.saturating_add(1);
        }
        self.is_liked = !self.is_liked;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }
}

/// Toggle the like of one card in a listing. Unknown ids are ignored.
pub fn toggle_in(posts: &mut [PostSummary], post_id: &str) -> Option<LikeState> {
    let post = posts.iter_mut().find(|p| p.id == post_id)?;
    post.like.toggle();
    Some(post.like)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn toggle_moves_count_with_flag() {
        let s = LikeState::new(20, false).toggled();
        assert_eq!((s.count(), s.is_liked()), (21, true));
        let s = s.toggled();
        assert_eq!((s.count(), s.is_liked()), (20, false));
    }

    #[test]
    fn liked_with_zero_count_is_normalized() {
        let s = LikeState::new(0, true);
        assert_eq!(s.count(), 1);
        assert_eq!(s.toggled(), LikeState::new(0, false));
    }

    #[test]
    fn toggle_in_touches_only_the_matching_card() {
        let post: crate::models::post::Post = serde_json::from_value(serde_json::json!({
            "id": "post-1",
            "title": "T",
            "content": "C",
            "author": { "id": "a", "name": "A" },
            "likes": 3,
            "created_at": "2025-05-27T00:00:00Z"
        }))
        .unwrap();
        let mut other = post.summary();
        other.id = "post-2".into();
        let mut cards = vec![post.summary(), other];

        assert_eq!(toggle_in(&mut cards, "post-2"), Some(LikeState::new(4, true)));
        assert_eq!(cards[0].like, LikeState::new(3, false));
        assert_eq!(toggle_in(&mut cards, "missing"), None);
    }

    proptest! {
        #[test]
        fn toggle_is_an_involution(likes in 0u32..1_000_000, liked in any::<bool>()) {
            let s = LikeState::new(likes, liked);
            prop_assert_eq!(s.toggled().toggled(), s);
        }

        #[test]
        fn toggle_changes_count_by_exactly_one(likes in 0u32..1_000_000, liked in any::<bool>()) {
            let s = LikeState::new(likes, liked);
            let t = s.toggled();
            prop_assert_ne!(t.is_liked(), s.is_liked());
            if t.is_liked() {
                prop_assert_eq!(t.count(), s.count() + 1);
            } else {
                prop_assert_eq!(t.count() + 1, s.count());
            }
        }
    }
}
