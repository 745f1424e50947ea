//! # cyberfortify-site
//!
//! Leptos components for the CyberFortify landing page.
//!
//! The same component tree serves two targets:
//!
//! - **Browser** (`csr` feature) - mounted by `cyberfortify-landing`; the nav
//!   bar follows the window's scroll offset and drives the mobile menu.
//! - **Static HTML** (`ssr` feature, default) - [`render_page`] produces a
//!   complete document, used by `cyberfortify-export`.
//!
//! ## Layout
//!
//! - [`content`] - page copy, link targets and fixed lists
//! - [`components`] - the sections and the `App` composition root
//! - [`state`] - nav bar state (`NavState`)
//! - [`listener`] - scoped scroll-listener ownership
//! - [`icons`] - inline SVG glyphs
//! - [`styles`] - the page stylesheet
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! use cyberfortify_site::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("id=\"services\""));
//! # }
//! ```
//!
//! ---
//!
//! CyberFortify (c)2025

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod icons;
pub mod listener;
pub mod state;
pub mod styles;

pub use components::App;

/// Document-level settings for static rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// `<title>` text
    pub title: String,
    /// `lang` attribute of `<html>`
    pub lang: String,
    /// `<meta name="description">` content
    pub description: String,
}

pub const DEFAULT_TITLE: &str = "CyberFortify — Security First";
pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_DESCRIPTION: &str =
    "CyberFortify delivers specialized Cybersecurity & Secure Web Development solutions.";

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// Render the whole landing page to an HTML document.
///
/// The navigation bar renders in its initial state: menu closed, not
/// scrolled. No listeners are registered on this path.
///
/// # Example
///
/// ```rust
/// use cyberfortify_site::{render_page, PageOptions};
///
/// let options = PageOptions {
///     title: "Staging".into(),
///     ..Default::default()
/// };
/// let html = render_page(&options);
/// assert!(html.contains("<title>Staging</title>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(options: &PageOptions) -> String {
    use components::PageDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let doc = view! { <PageDocument options=options.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{ANCHORS, NAV_LINKS};
    use pretty_assertions::assert_eq;

    fn page() -> String {
        render_page(&PageOptions::default())
    }

    fn section<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
        let start = html.find(open).expect("section start");
        let end = start + html[start..].find(close).expect("section end");
        &html[start..end]
    }

    #[test]
    fn renders_full_document() {
        let html = page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("CyberFortify"));
        assert!(html.contains(".nav--scrolled"));
    }

    #[test]
    fn renders_exactly_four_services_in_order() {
        let html = page();
        assert_eq!(html.matches("class=\"service-card\"").count(), 4);

        let positions: Vec<usize> = [
            "Web Application Security",
            "Vulnerability &amp; Pentesting",
            "Secure Code Review",
            "Security Hardening",
        ]
        .iter()
        .map(|title| html.find(title).expect(title))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
        assert_eq!(html.matches("Impact: ").count(), 4);
    }

    #[test]
    fn every_anchor_exists_once() {
        let html = page();
        for anchor in ANCHORS {
            let id = format!("id=\"{anchor}\"");
            assert_eq!(html.matches(&id).count(), 1, "{id}");
        }
        for link in NAV_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", link.href)));
        }
    }

    #[test]
    fn nav_starts_closed_and_unscrolled() {
        let html = page();
        let nav = section(&html, "<nav", "</nav>");
        assert!(nav.contains("class=\"nav\""));
        assert!(!nav.contains("nav--scrolled"));
        assert!(!nav.contains("class=\"nav-drawer\""));
        assert!(nav.contains("data-icon=\"menu\""));
        assert!(!nav.contains("data-icon=\"close\""));
    }

    #[test]
    fn contact_uses_exact_mailto() {
        let html = page();
        assert_eq!(
            html.matches("href=\"mailto:cyberfortify.contact@gmail.com\"")
                .count(),
            1
        );
        assert_eq!(html.matches("mailto:").count(), 1);
    }

    #[test]
    fn footer_has_two_external_links() {
        let html = page();
        let footer = section(&html, "<footer", "</footer>");
        assert_eq!(footer.matches("<a ").count(), 2);
        assert_eq!(footer.matches("target=\"_blank\"").count(), 2);
        assert_eq!(footer.matches("rel=\"noopener noreferrer\"").count(), 2);
        assert!(footer.contains("© 2025 CyberFortify"));

        // nothing else on the page opens a new context
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }

    #[test]
    fn custom_title_and_lang() {
        let options = PageOptions {
            title: "Preview".into(),
            lang: "fr".into(),
            ..Default::default()
        };
        let html = render_page(&options);
        assert!(html.contains("<title>Preview</title>"));
        assert!(html.contains("<html lang=\"fr\""));
    }
}
