//! Declarative event bindings.
//!
//! `BINDINGS` is the single list of which selector listens for which event
//! and what it triggers. `BindingTable::resolve` looks every selector up once
//! at start-up; selectors that match nothing are recorded rather than
//! treated as errors, since most templates only render a subset of sections.

use crate::page::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleTheme,
    ToggleMobileMenu,
    AddToCart,
    Search,
    SmoothScroll,
    ToggleCartDrawer,
    CloseCartDrawer,
    SelectThumbnail,
    Zoom,
    ResetZoom,
    ToggleSearchModal,
    CloseSearchModal,
    Parallax,
    Reveal,
    HoverCard,
    UnhoverCard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Every element matching the selector.
    Each(&'static str),
    /// Delegated listener on the document.
    Document,
    Window,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub source: Source,
    /// DOM event name; `"intersect"` means an `IntersectionObserver` entry.
    pub event: &'static str,
    pub action: Action,
    /// Another selector that must be present for the binding to make sense.
    pub requires: Option<&'static str>,
}

const fn bind(source: Source, event: &'static str, action: Action) -> Binding {
    Binding {
        source,
        event,
        action,
        requires: None,
    }
}

const fn bind_with(
    source: Source,
    event: &'static str,
    action: Action,
    requires: &'static str,
) -> Binding {
    Binding {
        source,
        event,
        action,
        requires: Some(requires),
    }
}

pub const INTERSECT: &str = "intersect";

pub static BINDINGS: &[Binding] = &[
    bind(Source::Each(".theme-toggle"), "click", Action::ToggleTheme),
    bind_with(
        Source::Each(".mobile-menu-toggle"),
        "click",
        Action::ToggleMobileMenu,
        ".mobile-menu",
    ),
    bind(Source::Document, "click", Action::AddToCart),
    bind(Source::Each(".search-input"), "input", Action::Search),
    bind(Source::Document, "click", Action::SmoothScroll),
    bind_with(
        Source::Each(".cart-toggle"),
        "click",
        Action::ToggleCartDrawer,
        ".cart-drawer",
    ),
    bind_with(Source::Document, "click", Action::CloseCartDrawer, ".cart-drawer"),
    bind(Source::Each(".product-thumbnail"), "click", Action::SelectThumbnail),
    bind(Source::Each(".product-image"), "mousemove", Action::Zoom),
    bind(Source::Each(".product-image"), "mouseleave", Action::ResetZoom),
    bind_with(
        Source::Each(".search-toggle"),
        "click",
        Action::ToggleSearchModal,
        ".search-modal",
    ),
    bind_with(Source::Document, "keydown", Action::CloseSearchModal, ".search-modal"),
    bind(Source::Window, "scroll", Action::Parallax),
    bind(Source::Each(".animate-on-scroll"), INTERSECT, Action::Reveal),
    bind(Source::Each(".card"), "mouseenter", Action::HoverCard),
    bind(Source::Each(".card"), "mouseleave", Action::UnhoverCard),
];

pub struct Resolved<N> {
    pub binding: Binding,
    /// Matched elements; empty for document and window sources.
    pub nodes: Vec<N>,
}

pub struct BindingTable<N> {
    pub resolved: Vec<Resolved<N>>,
    pub missing: Vec<&'static str>,
}

impl<N: Clone> BindingTable<N> {
    pub fn resolve<P: Page<Node = N>>(page: &P, bindings: &[Binding]) -> Self {
        let mut resolved = Vec::new();
        let mut missing = Vec::new();
        let mut note_missing = |selector: &'static str| {
            if !missing.contains(&selector) {
                missing.push(selector);
            }
        };

        for binding in bindings {
            if let Some(required) = binding.requires {
                if page.query(required).is_none() {
                    note_missing(required);
                    continue;
                }
            }
            match binding.source {
                Source::Each(selector) => {
                    let nodes = page.query_all(selector);
                    if nodes.is_empty() {
                        note_missing(selector);
                        continue;
                    }
                    resolved.push(Resolved {
                        binding: *binding,
                        nodes,
                    });
                }
                Source::Document | Source::Window => resolved.push(Resolved {
                    binding: *binding,
                    nodes: Vec::new(),
                }),
            }
        }

        BindingTable { resolved, missing }
    }

    pub fn is_bound(&self, action: Action) -> bool {
        self.resolved.iter().any(|r| r.binding.action == action)
    }
}
