//! Browser-backed `Page`.
//!
//! Thin wrappers over `web_sys`. Lookups that fail (invalid selector, no
//! document) degrade to "not found" so a broken theme section never takes
//! the whole controller down.

use super::{Page, Rect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, NodeList,
    ScrollBehavior, ScrollToOptions, Window,
};

#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
    body: Element,
}

impl WebPage {
    pub fn new() -> Result<WebPage, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body: Element = document
            .body()
            .ok_or_else(|| JsValue::from_str("missing <body>"))?
            .into();
        Ok(WebPage {
            window,
            document,
            body,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }
}

fn collect(nl: Option<NodeList>) -> Vec<Element> {
    let Some(nl) = nl else {
        return Vec::new();
    };
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

fn as_html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

impl Page for WebPage {
    type Node = Element;

    fn body(&self) -> Element {
        self.body.clone()
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok()?
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        collect(self.document.query_selector_all(selector).ok())
    }

    fn query_within(&self, parent: &Element, selector: &str) -> Option<Element> {
        parent.query_selector(selector).ok()?
    }

    fn query_all_within(&self, parent: &Element, selector: &str) -> Vec<Element> {
        collect(parent.query_selector_all(selector).ok())
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok()?
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn attr(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attr(&self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().toggle(class).unwrap_or(false)
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        let value = as_html(node)?.style().get_property_value(property).ok()?;
        (!value.is_empty()).then_some(value)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = as_html(node) {
            let _ = el.style().set_property(property, value);
        }
    }

    fn is_disabled(&self, node: &Element) -> bool {
        match node.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => node.has_attribute("disabled"),
        }
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = node.set_attribute("disabled", "");
        } else {
            let _ = node.remove_attribute("disabled");
        }
    }

    fn create_element(&self, tag: &str) -> Element {
        self.document.create_element(tag).unwrap_throw()
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn clear_children(&self, node: &Element) {
        node.set_inner_html("");
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn focus(&self, node: &Element) {
        if let Some(el) = as_html(node) {
            let _ = el.focus();
        }
    }

    fn rect(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        }
    }

    fn offset_top(&self, node: &Element) -> f64 {
        as_html(node).map(|el| el.offset_top() as f64).unwrap_or_default()
    }

    fn scroll_to(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}
