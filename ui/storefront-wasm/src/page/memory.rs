//! In-memory document for tests.

use super::{Page, Rect};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::iter::Peekable;
use std::rc::Rc;
use std::str::Chars;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemNode(usize);

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    children: Vec<usize>,
    parent: Option<usize>,
    disabled: bool,
    rect: Rect,
    offset_top: f64,
}

#[derive(Debug, Default)]
struct Document {
    nodes: Vec<ElementData>,
    focused: Option<usize>,
    scrolls: Vec<f64>,
}

#[derive(Clone)]
pub struct MemoryPage {
    doc: Rc<RefCell<Document>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        let mut doc = Document::default();
        doc.nodes.push(ElementData {
            tag: "body".to_owned(),
            ..Default::default()
        });
        MemoryPage {
            doc: Rc::new(RefCell::new(doc)),
        }
    }

    /// Builds `<tag class="..." attrs...>` and appends it to `parent`.
    pub fn element(
        &self,
        parent: &MemNode,
        tag: &str,
        classes: &str,
        attrs: &[(&str, &str)],
    ) -> MemNode {
        let node = self.create_element(tag);
        {
            let mut doc = self.doc.borrow_mut();
            let data = &mut doc.nodes[node.0];
            data.classes = classes.split_whitespace().map(str::to_owned).collect();
            for (name, value) in attrs {
                data.attrs.insert((*name).to_owned(), (*value).to_owned());
            }
        }
        self.append_child(parent, &node);
        node
    }

    pub fn set_rect(&self, node: &MemNode, rect: Rect) {
        self.doc.borrow_mut().nodes[node.0].rect = rect;
    }

    pub fn set_offset_top(&self, node: &MemNode, top: f64) {
        self.doc.borrow_mut().nodes[node.0].offset_top = top;
    }

    pub fn is_attached(&self, node: &MemNode) -> bool {
        let doc = self.doc.borrow();
        let mut cur = Some(node.0);
        while let Some(idx) = cur {
            if idx == 0 {
                return true;
            }
            cur = doc.nodes[idx].parent;
        }
        false
    }

    pub fn children(&self, node: &MemNode) -> Vec<MemNode> {
        self.doc.borrow().nodes[node.0]
            .children
            .iter()
            .map(|&i| MemNode(i))
            .collect()
    }

    pub fn focused(&self) -> Option<MemNode> {
        self.doc.borrow().focused.map(MemNode)
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.doc.borrow().scrolls.clone()
    }

    fn descendants(&self, root: usize) -> Vec<usize> {
        let doc = self.doc.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<usize> = doc.nodes[root].children.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            out.push(idx);
            stack.extend(doc.nodes[idx].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, idx: usize, selector: &Selector) -> bool {
        let doc = self.doc.borrow();
        selector.matches(&doc.nodes[idx])
    }

    fn find_within(&self, root: usize, selector: &str) -> Vec<MemNode> {
        let Some(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.descendants(root)
            .into_iter()
            .filter(|&idx| self.matches(idx, &sel))
            .map(MemNode)
            .collect()
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq)]
enum AttrTest {
    Exists(String),
    Equals(String, String),
    Prefix(String, String),
}

/// A single compound selector, e.g. `a[href^="#"]` or `.thumb.active`.
#[derive(Debug, Default, PartialEq)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut s = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident(c) {
            break;
        }
        s.push(c);
        chars.next();
    }
    s
}

impl Selector {
    fn parse(input: &str) -> Option<Selector> {
        let mut sel = Selector::default();
        let mut chars = input.trim().chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '#' => {
                    chars.next();
                    sel.id = Some(read_ident(&mut chars));
                }
                '.' => {
                    chars.next();
                    sel.classes.push(read_ident(&mut chars));
                }
                '[' => {
                    chars.next();
                    let body: String = chars.by_ref().take_while(|&c| c != ']').collect();
                    sel.attrs.push(AttrTest::parse(&body)?);
                }
                c if is_ident(c) && sel.tag.is_none() => {
                    sel.tag = Some(read_ident(&mut chars));
                }
                _ => return None,
            }
        }
        Some(sel)
    }

    fn matches(&self, el: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|test| match test {
            AttrTest::Exists(name) => el.attrs.contains_key(name),
            AttrTest::Equals(name, v) => el.attrs.get(name) == Some(v),
            AttrTest::Prefix(name, v) => el.attrs.get(name).is_some_and(|a| a.starts_with(v)),
        })
    }
}

impl AttrTest {
    fn parse(body: &str) -> Option<AttrTest> {
        let unquote = |v: &str| v.trim().trim_matches('"').trim_matches('\'').to_owned();
        if let Some((name, value)) = body.split_once("^=") {
            return Some(AttrTest::Prefix(name.trim().to_owned(), unquote(value)));
        }
        if let Some((name, value)) = body.split_once('=') {
            return Some(AttrTest::Equals(name.trim().to_owned(), unquote(value)));
        }
        let name = body.trim();
        (!name.is_empty()).then(|| AttrTest::Exists(name.to_owned()))
    }
}

impl Page for MemoryPage {
    type Node = MemNode;

    fn body(&self) -> MemNode {
        MemNode(0)
    }

    fn query(&self, selector: &str) -> Option<MemNode> {
        self.find_within(0, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<MemNode> {
        self.find_within(0, selector)
    }

    fn query_within(&self, parent: &MemNode, selector: &str) -> Option<MemNode> {
        self.find_within(parent.0, selector).into_iter().next()
    }

    fn query_all_within(&self, parent: &MemNode, selector: &str) -> Vec<MemNode> {
        self.find_within(parent.0, selector)
    }

    fn closest(&self, node: &MemNode, selector: &str) -> Option<MemNode> {
        let sel = Selector::parse(selector)?;
        let mut cur = Some(node.0);
        while let Some(idx) = cur {
            if self.matches(idx, &sel) {
                return Some(MemNode(idx));
            }
            cur = self.doc.borrow().nodes[idx].parent;
        }
        None
    }

    fn contains(&self, ancestor: &MemNode, node: &MemNode) -> bool {
        let doc = self.doc.borrow();
        let mut cur = Some(node.0);
        while let Some(idx) = cur {
            if idx == ancestor.0 {
                return true;
            }
            cur = doc.nodes[idx].parent;
        }
        false
    }

    fn attr(&self, node: &MemNode, name: &str) -> Option<String> {
        self.doc.borrow().nodes[node.0].attrs.get(name).cloned()
    }

    fn set_attr(&self, node: &MemNode, name: &str, value: &str) {
        self.doc.borrow_mut().nodes[node.0]
            .attrs
            .insert(name.to_owned(), value.to_owned());
    }

    fn has_class(&self, node: &MemNode, class: &str) -> bool {
        self.doc.borrow().nodes[node.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn add_class(&self, node: &MemNode, class: &str) {
        if !self.has_class(node, class) {
            self.doc.borrow_mut().nodes[node.0]
                .classes
                .push(class.to_owned());
        }
    }

    fn remove_class(&self, node: &MemNode, class: &str) {
        self.doc.borrow_mut().nodes[node.0]
            .classes
            .retain(|c| c != class);
    }

    fn toggle_class(&self, node: &MemNode, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn text(&self, node: &MemNode) -> String {
        let mut out = self.doc.borrow().nodes[node.0].text.clone();
        for child in self.children(node) {
            out.push_str(&self.text(&child));
        }
        out
    }

    fn set_text(&self, node: &MemNode, text: &str) {
        self.clear_children(node);
        self.doc.borrow_mut().nodes[node.0].text = text.to_owned();
    }

    fn style(&self, node: &MemNode, property: &str) -> Option<String> {
        self.doc.borrow().nodes[node.0].style.get(property).cloned()
    }

    fn set_style(&self, node: &MemNode, property: &str, value: &str) {
        self.doc.borrow_mut().nodes[node.0]
            .style
            .insert(property.to_owned(), value.to_owned());
    }

    fn is_disabled(&self, node: &MemNode) -> bool {
        self.doc.borrow().nodes[node.0].disabled
    }

    fn set_disabled(&self, node: &MemNode, disabled: bool) {
        self.doc.borrow_mut().nodes[node.0].disabled = disabled;
    }

    fn create_element(&self, tag: &str) -> MemNode {
        let mut doc = self.doc.borrow_mut();
        doc.nodes.push(ElementData {
            tag: tag.to_owned(),
            ..Default::default()
        });
        MemNode(doc.nodes.len() - 1)
    }

    fn append_child(&self, parent: &MemNode, child: &MemNode) {
        self.remove(child);
        let mut doc = self.doc.borrow_mut();
        doc.nodes[parent.0].children.push(child.0);
        doc.nodes[child.0].parent = Some(parent.0);
    }

    fn clear_children(&self, node: &MemNode) {
        let mut doc = self.doc.borrow_mut();
        let children = std::mem::take(&mut doc.nodes[node.0].children);
        for child in children {
            doc.nodes[child].parent = None;
        }
        doc.nodes[node.0].text.clear();
    }

    fn remove(&self, node: &MemNode) {
        let mut doc = self.doc.borrow_mut();
        if let Some(parent) = doc.nodes[node.0].parent.take() {
            doc.nodes[parent].children.retain(|&c| c != node.0);
        }
    }

    fn focus(&self, node: &MemNode) {
        self.doc.borrow_mut().focused = Some(node.0);
    }

    fn rect(&self, node: &MemNode) -> Rect {
        self.doc.borrow().nodes[node.0].rect
    }

    fn offset_top(&self, node: &MemNode) -> f64 {
        self.doc.borrow().nodes[node.0].offset_top
    }

    fn scroll_to(&self, top: f64) {
        self.doc.borrow_mut().scrolls.push(top);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_subset() {
        let page = MemoryPage::new();
        let body = page.body();
        let link = page.element(&body, "a", "nav", &[("href", "#specs")]);
        let thumb = page.element(&body, "img", "product-thumbnail", &[("data-image", "b.jpg")]);
        page.element(&body, "a", "", &[("href", "/cart")]);

        assert_eq!(page.query_all(r##"a[href^="#"]"##), vec![link]);
        assert_eq!(
            page.query(r#".product-thumbnail[data-image="b.jpg"]"#),
            Some(thumb)
        );
        assert_eq!(page.query("[data-image]"), Some(thumb));
        assert!(page.query(".missing").is_none());
    }

    #[test]
    fn remove_detaches_and_is_idempotent() {
        let page = MemoryPage::new();
        let body = page.body();
        let outer = page.element(&body, "div", "outer", &[]);
        let inner = page.element(&outer, "span", "inner", &[]);

        assert!(page.contains(&outer, &inner));
        assert_eq!(page.closest(&inner, ".outer"), Some(outer));

        page.remove(&outer);
        page.remove(&outer);
        assert!(!page.is_attached(&inner));
        assert!(page.query(".inner").is_none());
    }
}
