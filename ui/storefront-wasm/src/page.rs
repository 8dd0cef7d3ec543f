//! DOM surface.
//!
//! The controller never touches `web_sys` directly; it talks to a `Page`.
//! `WebPage` is the browser implementation, `MemoryPage` a small in-memory
//! document used by the tests. Selectors passed in are plain CSS selectors;
//! the in-memory page understands the compound subset the theme uses
//! (`tag`, `#id`, `.class`, `[attr]`, `[attr="v"]`, `[attr^="v"]`).

#[cfg(test)]
pub mod memory;
pub mod web;

pub use web::WebPage;

/// Bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub trait Page: Clone + 'static {
    type Node: Clone + PartialEq + 'static;

    /// The root element theme state is mirrored onto (`<body>`).
    fn body(&self) -> Self::Node;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_within(&self, parent: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn query_all_within(&self, parent: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;
    /// Inclusive: a node contains itself.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attr(&self, node: &Self::Node, name: &str, value: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;

    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&self, node: &Self::Node, text: &str);

    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn is_disabled(&self, node: &Self::Node) -> bool;
    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    fn create_element(&self, tag: &str) -> Self::Node;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    fn clear_children(&self, node: &Self::Node);
    /// Detaches the node. Detaching a node twice is a no-op.
    fn remove(&self, node: &Self::Node);

    fn focus(&self, node: &Self::Node);
    fn rect(&self, node: &Self::Node) -> Rect;
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn scroll_to(&self, top: f64);
}

/// Sets several inline style properties at once.
pub fn set_styles<P: Page>(page: &P, node: &P::Node, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        page.set_style(node, property, value);
    }
}
