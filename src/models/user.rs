use serde::{Deserialize, Serialize};

/// Identity shown next to posts and comments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Author {
    /// Letter shown when there is no avatar image.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

// the signed-in visitor, absent when anonymous
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl SessionUser {
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

impl From<&SessionUser> for Author {
    fn from(u: &SessionUser) -> Self {
        Author {
            id: u.id.clone(),
            name: u.name.clone(),
            avatar: u.avatar.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub post_count: u32,
}

impl UserProfile {
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }

    /// "1 Post", "5 Posts"
    pub fn post_count_label(&self) -> String {
        let suffix = if self.post_count == 1 { "" } else { "s" };
        format!("{} Post{}", self.post_count, suffix)
    }
}

fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
