//! The storefront controller.
//!
//! One `Storefront` is built per page with its collaborators passed in. The
//! behaviour for each area lives next to it (`theme.rs`, `cart.rs`, ...) as
//! further `impl<P: Page> Storefront<P>` blocks; this module holds the
//! struct, start-up and event dispatch.

use crate::api::StorefrontApi;
use crate::bindings::{Action, BINDINGS, BindingTable};
use crate::config::StorefrontConfig;
use crate::motion::Scheduler;
use crate::page::Page;
use crate::request::RequestGate;
use crate::state::KeyValueStore;
use std::rc::Rc;
use tracing::{debug, trace};

pub const MOBILE_MENU: &str = ".mobile-menu";
pub const CART_DRAWER: &str = ".cart-drawer";
pub const SEARCH_MODAL: &str = ".search-modal";
pub const OPEN: &str = "open";

/// A DOM event reduced to what the handlers need.
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent<N> {
    /// For element bindings `target` is the bound element; for delegated
    /// document listeners it is the element that was clicked.
    Click { target: N },
    Input { value: String },
    Pointer { target: N, client_x: f64, client_y: f64 },
    Enter { target: N },
    Leave { target: N },
    Key { key: String },
    Scroll { scroll_y: f64 },
    Intersect { target: N, intersecting: bool },
}

/// Open/closed flags of the toggled panels, read back from the DOM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub cart_open: bool,
    pub mobile_menu_open: bool,
    pub search_open: bool,
}

#[derive(Clone)]
pub struct Storefront<P: Page> {
    pub(crate) page: P,
    pub(crate) api: Rc<dyn StorefrontApi>,
    pub(crate) store: Rc<dyn KeyValueStore>,
    pub(crate) scheduler: Rc<dyn Scheduler>,
    pub(crate) config: Rc<StorefrontConfig>,
    pub(crate) search_gate: Rc<RequestGate>,
    pub(crate) cart_gate: Rc<RequestGate>,
}

impl<P: Page> Storefront<P> {
    pub fn new(
        page: P,
        api: Rc<dyn StorefrontApi>,
        store: Rc<dyn KeyValueStore>,
        scheduler: Rc<dyn Scheduler>,
        config: StorefrontConfig,
    ) -> Self {
        Storefront {
            page,
            api,
            store,
            scheduler,
            config: Rc::new(config),
            search_gate: Rc::new(RequestGate::default()),
            cart_gate: Rc::new(RequestGate::default()),
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Apply persisted state and page-load effects, then resolve the
    /// binding table the browser layer attaches listeners from.
    pub fn start(&self) -> BindingTable<P::Node> {
        let mode = self.init_theme();
        self.stagger_scroll_animations();
        self.start_typing_effects();

        let table = BindingTable::resolve(&self.page, BINDINGS);
        debug!(
            theme = mode.as_str(),
            bound = table.resolved.len(),
            "storefront started"
        );
        if !table.missing.is_empty() {
            debug!("selectors not on this page: {}", table.missing.join(", "));
        }
        table
    }

    /// Route one event to its handler. Pairs that don't fit (say, a key
    /// press that isn't Escape) are ignored.
    pub async fn dispatch(&self, action: Action, event: UiEvent<P::Node>) {
        match (action, event) {
            (Action::ToggleTheme, _) => {
                self.toggle_theme();
            }
            (Action::ToggleMobileMenu, _) => {
                self.toggle_mobile_menu();
            }
            (Action::AddToCart, UiEvent::Click { target }) => {
                if let Some(button) = self.add_to_cart_button(&target) {
                    self.add_to_cart_from(&button).await;
                }
            }
            (Action::Search, UiEvent::Input { value }) => {
                self.handle_search(&value).await;
            }
            (Action::SmoothScroll, UiEvent::Click { target }) => {
                self.follow_anchor(&target);
            }
            (Action::ToggleCartDrawer, _) => {
                self.toggle_cart_drawer();
            }
            (Action::CloseCartDrawer, UiEvent::Click { target }) => {
                self.close_cart_drawer_outside(&target);
            }
            (Action::SelectThumbnail, UiEvent::Click { target }) => {
                self.select_thumbnail(&target);
            }
            (
                Action::Zoom,
                UiEvent::Pointer {
                    target,
                    client_x,
                    client_y,
                },
            ) => {
                self.zoom_image(&target, client_x, client_y);
            }
            (Action::ResetZoom, UiEvent::Leave { target }) => {
                self.reset_zoom(&target);
            }
            (Action::ToggleSearchModal, _) => {
                self.toggle_search_modal();
            }
            (Action::CloseSearchModal, UiEvent::Key { key }) if key == "Escape" => {
                self.close_search_modal();
            }
            (Action::Parallax, UiEvent::Scroll { scroll_y }) => {
                self.apply_parallax(scroll_y);
            }
            (
                Action::Reveal,
                UiEvent::Intersect {
                    target,
                    intersecting,
                },
            ) => {
                self.reveal(&target, intersecting);
            }
            (Action::HoverCard, UiEvent::Enter { target }) => {
                self.hover_card(&target);
            }
            (Action::UnhoverCard, UiEvent::Leave { target }) => {
                self.unhover_card(&target);
            }
            (action, _) => trace!(?action, "event ignored"),
        }
    }

    /// Whether the browser's default action must be suppressed for this
    /// event: add-to-cart buttons inside forms and in-page anchor links.
    pub fn prevents_default(&self, action: Action, event: &UiEvent<P::Node>) -> bool {
        let UiEvent::Click { target } = event else {
            return false;
        };
        match action {
            Action::AddToCart => self.add_to_cart_button(target).is_some(),
            Action::SmoothScroll => self.in_page_anchor(target).is_some(),
            _ => false,
        }
    }

    pub fn ui_state(&self) -> UiState {
        let is_open = |selector: &str| {
            self.page
                .query(selector)
                .is_some_and(|node| self.page.has_class(&node, OPEN))
        };
        UiState {
            cart_open: is_open(CART_DRAWER),
            mobile_menu_open: is_open(MOBILE_MENU),
            search_open: is_open(SEARCH_MODAL),
        }
    }

    pub fn toggle_mobile_menu(&self) {
        let Some(menu) = self.page.query(MOBILE_MENU) else {
            return;
        };
        let open = self.page.toggle_class(&menu, OPEN);
        self.set_body_flag("mobile-menu-open", open);
    }

    pub(crate) fn set_body_flag(&self, class: &str, on: bool) {
        let body = self.page.body();
        if on {
            self.page.add_class(&body, class);
        } else {
            self.page.remove_class(&body, class);
        }
    }
}
