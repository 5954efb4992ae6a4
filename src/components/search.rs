use maud::{html, Markup};

use super::card;
use crate::view::SearchView;

pub fn render(view: &SearchView) -> Markup {
    html! {
        .search-heading {
            h1 { "Search Results" }
            @if !view.query.is_empty() {
                p { "Showing results for \"" (view.query) "\"" }
            }
        }
        @if !view.results.is_empty() {
            (card::list(&view.results, |p| format!("/search/like/{}", p.id)))
        } @else if !view.query.is_empty() {
            .empty-state {
                h3 { "No results found" }
                p { "Try adjusting your search terms or browse our latest posts." }
            }
        } @else {
            .empty-state {
                h3 { "Search for posts" }
                p { "Enter a search term to find relevant blog posts." }
            }
        }
    }
}
