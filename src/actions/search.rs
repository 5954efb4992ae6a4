use crate::models::post::PostSummary;

/// Posts whose title, tags or body contain `query`, ignoring case.
/// A blank query matches nothing.
pub fn filter_posts<'a, I>(posts: I, query: &str) -> Vec<PostSummary>
where
    I: IntoIterator<Item = &'a PostSummary>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    posts
        .into_iter()
        .filter(|p| p.searchable_text().any(|t| t.to_lowercase().contains(&needle)))
        .cloned()
        .collect()
}
