//! Scroll-driven effects: reveal on intersection, parallax and in-page
//! anchor scrolling.

use crate::controller::Storefront;
use crate::page::Page;
use tracing::debug;

pub const ANCHOR_LINKS: &str = r##"a[href^="#"]"##;
pub const ANIMATE_ON_SCROLL: &str = ".animate-on-scroll";
pub const REVEALED: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const PARALLAX: &str = ".parallax";
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
/// Room left above an anchor target for the sticky header.
pub const SCROLL_OFFSET: f64 = 100.0;

pub fn parallax_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    let offset = -(scroll_y * speed);
    // no "-0px" in the style attribute
    if offset == 0.0 { 0.0 } else { offset }
}

impl<P: Page> Storefront<P> {
    pub fn stagger_scroll_animations(&self) {
        for (i, node) in self.page.query_all(ANIMATE_ON_SCROLL).iter().enumerate() {
            self.page
                .set_style(node, "animation-delay", &format!("{:.1}s", i as f64 * 0.1));
        }
    }

    /// Returns true when the node was revealed by this entry. Leaving the
    /// viewport never hides it again.
    pub fn reveal(&self, target: &P::Node, intersecting: bool) -> bool {
        if !intersecting || self.page.has_class(target, REVEALED) {
            return false;
        }
        self.page.add_class(target, REVEALED);
        true
    }

    pub fn apply_parallax(&self, scroll_y: f64) {
        for node in self.page.query_all(PARALLAX) {
            let speed = parallax_speed(self.page.attr(&node, "data-speed").as_deref());
            let y = parallax_offset(scroll_y, speed);
            self.page
                .set_style(&node, "transform", &format!("translateY({}px)", y));
        }
    }

    /// The `href` of the in-page link `node` sits in, if any. A bare `#`
    /// doesn't count.
    pub(crate) fn in_page_anchor(&self, node: &P::Node) -> Option<String> {
        let link = self.page.closest(node, ANCHOR_LINKS)?;
        self.page.attr(&link, "href").filter(|href| href.len() > 1)
    }

    pub fn follow_anchor(&self, target: &P::Node) {
        let Some(href) = self.in_page_anchor(target) else {
            return;
        };
        match self.page.query(&href) {
            Some(dest) => self.smooth_scroll_to(&dest),
            None => debug!(href = href.as_str(), "anchor target not on page"),
        }
    }

    pub fn smooth_scroll_to(&self, node: &P::Node) {
        self.page.scroll_to(self.page.offset_top(node) - SCROLL_OFFSET);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::Action;
    use crate::controller::UiEvent;
    use crate::controller::testing::Harness;
    use crate::page::memory::MemoryPage;

    #[test]
    fn speed_falls_back_to_default() {
        assert_eq!(parallax_speed(None), 0.5);
        assert_eq!(parallax_speed(Some("0.2")), 0.2);
        assert_eq!(parallax_speed(Some("fast")), 0.5);
        assert_eq!(parallax_speed(Some("NaN")), 0.5);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
        assert!(parallax_offset(0.0, 0.5).is_sign_positive());
    }

    #[tokio::test]
    async fn scroll_moves_parallax_layers() -> anyhow::Result<()> {
        let page = MemoryPage::new();
        let body = page.body();
        let slow = page.element(&body, "div", "parallax", &[("data-speed", "0.2")]);
        let plain = page.element(&body, "div", "parallax", &[]);
        let h = Harness::new(page);

        h.sf.dispatch(Action::Parallax, UiEvent::Scroll { scroll_y: 200.0 })
            .await;
        assert_eq!(h.page.style(&slow, "transform").as_deref(), Some("translateY(-40px)"));
        assert_eq!(h.page.style(&plain, "transform").as_deref(), Some("translateY(-100px)"));

        h.sf.apply_parallax(0.0);
        assert_eq!(h.page.style(&plain, "transform").as_deref(), Some("translateY(0px)"));
        Ok(())
    }

    #[test]
    fn reveal_is_one_way() {
        let page = MemoryPage::new();
        let section = page.element(&page.body(), "section", "animate-on-scroll", &[]);
        let h = Harness::new(page);

        assert!(!h.sf.reveal(&section, false));
        assert!(!h.page.has_class(&section, REVEALED));
        assert!(h.sf.reveal(&section, true));
        assert!(!h.sf.reveal(&section, true));
        h.sf.reveal(&section, false);
        assert!(h.page.has_class(&section, REVEALED));
    }

    #[test]
    fn stagger_sets_increasing_delays() {
        let page = MemoryPage::new();
        let body = page.body();
        let nodes: Vec<_> = (0..3)
            .map(|_| page.element(&body, "div", "animate-on-scroll", &[]))
            .collect();
        let h = Harness::new(page);

        h.sf.stagger_scroll_animations();
        let delays: Vec<_> = nodes
            .iter()
            .map(|n| h.page.style(n, "animation-delay"))
            .collect();
        assert_eq!(
            delays,
            vec![Some("0.0s".to_owned()), Some("0.1s".to_owned()), Some("0.2s".to_owned())]
        );
    }

    #[tokio::test]
    async fn anchor_click_scrolls_above_target() -> anyhow::Result<()> {
        let page = MemoryPage::new();
        let body = page.body();
        let link = page.element(&body, "a", "", &[("href", "#reviews")]);
        let label = page.element(&link, "span", "", &[]);
        let reviews = page.element(&body, "section", "", &[("id", "reviews")]);
        page.set_offset_top(&reviews, 900.0);
        page.element(&body, "a", "", &[("href", "#gone")]);
        let h = Harness::new(page);

        h.sf.dispatch(Action::SmoothScroll, UiEvent::Click { target: label })
            .await;
        assert_eq!(h.page.scrolls(), vec![800.0]);

        let dangling = h.page.query(r##"a[href="#gone"]"##).expect("link");
        h.sf.follow_anchor(&dangling);
        assert_eq!(h.page.scrolls(), vec![800.0]);
        Ok(())
    }

    #[test]
    fn bare_hash_is_left_alone() {
        let page = MemoryPage::new();
        let link = page.element(&page.body(), "a", "", &[("href", "#")]);
        let h = Harness::new(page);

        assert_eq!(h.sf.in_page_anchor(&link), None);
        assert!(!h.sf.prevents_default(Action::SmoothScroll, &UiEvent::Click { target: link }));
        h.sf.follow_anchor(&link);
        assert!(h.page.scrolls().is_empty());
    }
}
