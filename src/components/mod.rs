pub mod card;
pub mod draft;
pub mod layout;
pub mod post;
pub mod profile;
pub mod search;
