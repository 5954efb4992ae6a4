use maud::{html, Markup, DOCTYPE};

use crate::models::user::SessionUser;

const HTMX: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn page(user: Option<&SessionUser>, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Blog" }
                link rel="stylesheet" href="/assets/app.css";
                script src=(HTMX) {}
            }
            body {
                (header(user))
                main { (body) }
            }
        }
    }
}

pub fn header(user: Option<&SessionUser>) -> Markup {
    html! {
        header.site-header {
            a.logo href="/" { "Blog" }
            form.search-bar action="/search" method="get" {
                input type="search" name="q" placeholder="Search" aria-label="Search";
            }
            nav {
                @if let Some(user) = user {
                    a.write-link href="/write" { "Write Post" }
                    a.profile-link href=(format!("/visit/{}", user.id)) {
                        (avatar(user.avatar.as_deref(), &user.name, &user.initial()))
                        span { (user.name) }
                    }
                    form action="/logout" method="post" {
                        button type="submit" { "Logout" }
                    }
                } @else {
                    a href="/login" { "Login" }
                    a.register href="/login" { "Register" }
                }
            }
        }
    }
}

pub fn avatar(src: Option<&str>, name: &str, initial: &str) -> Markup {
    html! {
        @if let Some(src) = src {
            img.avatar src=(src) alt=(name);
        } @else {
            span.avatar.avatar-fallback aria-label=(name) { (initial) }
        }
    }
}

/// Whole page with a single heading and line of text.
pub fn message_page(user: Option<&SessionUser>, heading: &str, text: &str) -> Markup {
    page(
        user,
        heading,
        html! {
            .empty-state {
                h1 { (heading) }
                p { (text) }
            }
        },
    )
}

/// Swapped in when an action targets a page the visitor no longer has open.
pub fn stale_fragment() -> Markup {
    html! {
        p.stale { "This page has expired. " a href="" { "Reload" } " to continue." }
    }
}

pub fn login_page(user: Option<&SessionUser>, demo: &SessionUser) -> Markup {
    page(
        user,
        "Login",
        html! {
            .login {
                h1 { "Login" }
                @if let Some(user) = user {
                    p { "Signed in as " (user.name) "." }
                } @else {
                    form action="/login" method="post" {
                        button type="submit" { "Continue as " (demo.name) }
                    }
                }
            }
        },
    )
}
