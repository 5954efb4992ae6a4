use serde::Serialize;

/// Ordered, duplicate-free tags of a draft.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims `tag` and appends it unless it is empty or already present.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_owned());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_add_keeps_one_entry() {
        let mut tags = TagSet::new();
        assert!(tags.add("Frontend"));
        assert!(!tags.add("Frontend"));
        assert!(!tags.add("  Frontend "));
        assert_eq!(tags.iter().collect::<Vec<_>>(), ["Frontend"]);
    }

    #[test]
    fn match_is_case_sensitive() {
        let mut tags = TagSet::new();
        tags.add("Frontend");
        assert!(tags.add("frontend"));
        assert_eq!(tags.into_vec(), ["Frontend", "frontend"]);
    }

    #[test]
    fn blank_tags_are_rejected() {
        let mut tags = TagSet::new();
        assert!(!tags.add(""));
        assert!(!tags.add("   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn remove_preserves_order_of_the_rest() {
        let mut tags = TagSet::new();
        for t in ["Programming", "Frontend", "Coding"] {
            tags.add(t);
        }
        assert!(tags.remove("Frontend"));
        assert!(!tags.remove("frontend"));
        assert_eq!(tags.into_vec(), ["Programming", "Coding"]);
    }
}
