use crate::actions::draft::{validate_draft, DraftErrors, DraftField};
use crate::actions::tags::TagSet;
use crate::models::post::CreatePost;
use crate::models::user::SessionUser;

pub const SAMPLE_IMAGE: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/image%20%285%29-bCPn7nMtvrEyzHHVlA5TguCex4yQqy.png";

/// The write page: a draft post and its inline errors.
#[derive(Debug, Clone, Default)]
pub struct DraftView {
    pub title: String,
    pub content: String,
    pub tags: TagSet,
    pub image: Option<String>,
    pub errors: DraftErrors,
    pub publish_failed: bool,
}

#[derive(Debug, Clone)]
pub enum DraftAction {
    AddTag(String),
    RemoveTag(String),
    ToggleSampleImage,
    Edit { title: String, content: String },
}

impl DraftView {
    pub fn apply(&mut self, action: DraftAction) {
        match action {
            DraftAction::AddTag(tag) => {
                self.tags.add(&tag);
            }
            DraftAction::RemoveTag(tag) => {
                self.tags.remove(&tag);
            }
            DraftAction::ToggleSampleImage => {
                self.image = match self.image {
                    Some(_) => None,
                    None => Some(SAMPLE_IMAGE.to_owned()),
                };
            }
            DraftAction::Edit { title, content } => {
                self.title = title;
                self.content = content;
            }
        }
    }

    /// Refresh the inline errors. True when the draft may be submitted.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.title, &self.content);
        self.errors.is_empty()
    }

    pub fn error(&self, field: DraftField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn to_create(&self, author: &SessionUser) -> CreatePost {
        CreatePost {
            title: self.title.trim().to_owned(),
            content: self.content.trim().to_owned(),
            image: self.image.clone(),
            tags: self.tags.clone().into_vec(),
            author: author.into(),
        }
    }
}
