use maud::{html, Markup};

use super::{card, layout::avatar};
use crate::models::user::UserProfile;
use crate::view::VisitView;

impl maud::Render for UserProfile {
    fn render(&self) -> Markup {
        html! {
            .profile-header {
                (avatar(self.avatar.as_deref(), &self.name, &self.initial()))
                h1 { (self.name) }
                p.email { (self.email) }
                @if let Some(bio) = &self.bio {
                    p.bio { (bio) }
                }
            }
        }
    }
}

pub fn render(view: &VisitView) -> Markup {
    let user_id = &view.profile.id;
    html! {
        (view.profile)
        h2.post-count { (view.profile.post_count_label()) }
        @if view.posts.is_empty() {
            .empty-state {
                h3 { "No posts yet" }
                p { (view.profile.name) " hasn't published anything." }
            }
        } @else {
            (card::list(&view.posts, |p| format!("/visit/{}/like/{}", user_id, p.id)))
        }
    }
}
