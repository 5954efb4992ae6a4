use maud::{html, Markup};

use crate::actions::draft::DraftField;
use crate::view::DraftView;

pub fn render(view: &DraftView) -> Markup {
    html! {
        div id="draft" {
            h1 { "Create New Post" }
            @if view.publish_failed {
                p.error role="alert" { "Failed to publish post. Please try again." }
            }
            (image_section(view))
            (tag_editor(view))
            form id="draft-form" hx-post="/write" hx-target="#draft" hx-swap="outerHTML" {
                label for="title" { "Title *" }
                input id="title" type="text" name="title" value=(view.title) placeholder="Enter your post title";
                @if let Some(msg) = view.error(DraftField::Title) {
                    p.field-error { (msg) }
                }
                label for="content" { "Content *" }
                textarea id="content" name="content" rows="12" placeholder="Write your post content here..." {
                    (view.content)
                }
                @if let Some(msg) = view.error(DraftField::Content) {
                    p.field-error { (msg) }
                }
                .actions {
                    a.button.outline href="/" { "Cancel" }
                    button type="submit" { "Publish Post" }
                }
            }
        }
    }
}

pub fn tag_editor(view: &DraftView) -> Markup {
    html! {
        div id="draft-tags" {
            label { "Tags" }
            .tags {
                @for tag in view.tags.iter() {
                    form.badge hx-post="/write/tags/remove" hx-target="#draft-tags" hx-swap="outerHTML" {
                        (tag)
                        input type="hidden" name="tag" value=(tag);
                        button type="submit" aria-label=(format!("Remove {tag}")) { "×" }
                    }
                }
            }
            form hx-post="/write/tags" hx-target="#draft-tags" hx-swap="outerHTML" {
                input type="text" name="tag" placeholder="Type a tag and press Enter" autofocus;
            }
        }
    }
}

pub fn image_section(view: &DraftView) -> Markup {
    html! {
        div id="draft-image" {
            label { "Image" }
            form hx-post="/write/image" hx-target="#draft-image" hx-swap="outerHTML" {
                @if let Some(image) = &view.image {
                    img.preview src=(image) alt="Post image";
                    button.outline type="submit" { "Remove Image" }
                } @else {
                    button.outline type="submit" { "Use Sample Image" }
                }
            }
        }
    }
}
