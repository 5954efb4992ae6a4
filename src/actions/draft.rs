use std::collections::BTreeMap;

pub const MIN_CONTENT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DraftField {
    Title,
    Content,
}

pub type DraftErrors = BTreeMap<DraftField, &'static str>;

/// Field-level problems with a draft. Empty when it can be submitted.
pub fn validate_draft(title: &str, content: &str) -> DraftErrors {
    let mut errors = DraftErrors::new();

    if title.trim().is_empty() {
        errors.insert(DraftField::Title, "Title is required");
    }

    let content = content.trim();
    if content.is_empty() {
        errors.insert(DraftField::Content, "Content is required");
    } else if content.chars().count() < MIN_CONTENT_CHARS {
        errors.insert(
            DraftField::Content,
            "Content must be at least 50 characters",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_and_short_content() {
        let errors = validate_draft("", "short");
        assert_eq!(errors.get(&DraftField::Title), Some(&"Title is required"));
        assert_eq!(
            errors.get(&DraftField::Content),
            Some(&"Content must be at least 50 characters")
        );
    }

    #[test]
    fn whitespace_content_is_required_not_short() {
        let errors = validate_draft("  ", " \n ");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&DraftField::Content], "Content is required");
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate_draft("Title", &"a".repeat(60)).is_empty());
    }

    #[test]
    fn length_counts_trimmed_characters() {
        let padded = format!("   {}   ", "b".repeat(49));
        assert!(validate_draft("T", &padded).contains_key(&DraftField::Content));
        assert!(validate_draft("T", &"é".repeat(50)).is_empty());
    }
}
