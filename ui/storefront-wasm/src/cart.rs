//! Cart: add-to-cart buttons, the count badge and the drawer.
//!
//! The button state machine is `idle -> loading -> idle`. `LoadingButton`
//! owns the loading phase; its `Drop` puts the label and enabled state back,
//! so every exit path of `add_to_cart` restores the button.

use crate::controller::{CART_DRAWER, OPEN, Storefront};
use crate::error::StorefrontError;
use crate::motion;
use crate::notify::NotificationKind;
use crate::page::Page;
use storefront_types::CartAddRequest;
use tracing::{debug, info, warn};

pub const ADD_TO_CART: &str = ".add-to-cart-btn";
pub const CART_TOGGLE: &str = ".cart-toggle";
pub const CART_COUNT: &str = ".cart-count";
pub const CART_ICON: &str = ".cart-icon";

pub const ADDED_MESSAGE: &str = "Product added to cart!";
pub const FAILED_MESSAGE: &str = "Failed to add product to cart";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartOutcome {
    Added { item_count: u32 },
    Failed,
    /// The button was still loading from an earlier click.
    Busy,
}

struct LoadingButton<'a, P: Page> {
    page: &'a P,
    button: P::Node,
    label: String,
}

impl<'a, P: Page> LoadingButton<'a, P> {
    fn engage(page: &'a P, button: &P::Node, loading_label: &str) -> Self {
        let label = page.text(button);
        page.set_text(button, loading_label);
        page.set_disabled(button, true);
        LoadingButton {
            page,
            button: button.clone(),
            label,
        }
    }
}

impl<P: Page> Drop for LoadingButton<'_, P> {
    fn drop(&mut self) {
        self.page.set_text(&self.button, &self.label);
        self.page.set_disabled(&self.button, false);
    }
}

impl<P: Page> Storefront<P> {
    pub(crate) fn add_to_cart_button(&self, target: &P::Node) -> Option<P::Node> {
        self.page.closest(target, ADD_TO_CART)
    }

    /// Add-to-cart for a clicked button, reading its data attributes.
    pub async fn add_to_cart_from(&self, button: &P::Node) -> CartOutcome {
        let product_id = self.page.attr(button, "data-product-id");
        let variant_id = self.page.attr(button, "data-variant-id");
        self.add_to_cart(button, product_id.as_deref(), variant_id.as_deref())
            .await
    }

    /// POST one unit of the variant (or the product when no variant is
    /// given) and reflect the result on the page.
    pub async fn add_to_cart(
        &self,
        button: &P::Node,
        product_id: Option<&str>,
        variant_id: Option<&str>,
    ) -> CartOutcome {
        // not every theme uses <button>; a disabled <a> still takes clicks
        if self.page.is_disabled(button) {
            debug!("add-to-cart already in flight for this button");
            return CartOutcome::Busy;
        }

        let id = variant_id
            .or(product_id)
            .map(str::trim)
            .filter(|id| !id.is_empty());
        let Some(id) = id else {
            warn!("{}", StorefrontError::MissingProductId);
            self.show_notification(FAILED_MESSAGE, NotificationKind::Error);
            return CartOutcome::Failed;
        };

        let ticket = self.cart_gate.begin();
        let _loading = LoadingButton::engage(&self.page, button, &self.config.adding_label);

        match self.api.add_to_cart(&CartAddRequest::single(id)).await {
            Ok(cart) => {
                info!(variant = id, item_count = cart.item_count, "added to cart");
                if self.cart_gate.is_current(ticket) {
                    self.update_cart_count(cart.item_count);
                } else {
                    debug!(variant = id, "newer add-to-cart in flight, count left alone");
                }
                self.show_notification(ADDED_MESSAGE, NotificationKind::Success);
                self.animate_cart_icon();
                CartOutcome::Added {
                    item_count: cart.item_count,
                }
            }
            Err(e) => {
                warn!(variant = id, "add to cart failed: {}", e);
                self.show_notification(FAILED_MESSAGE, NotificationKind::Error);
                CartOutcome::Failed
            }
        }
    }

    pub fn update_cart_count(&self, count: u32) {
        if let Some(badge) = self.page.query(CART_COUNT) {
            self.page.set_text(&badge, &count.to_string());
            motion::pulse("updated", 300).play(&self.page, &badge, self.scheduler.as_ref());
        }
    }

    pub fn animate_cart_icon(&self) {
        if let Some(icon) = self.page.query(CART_ICON) {
            motion::pulse("bounce", 600).play(&self.page, &icon, self.scheduler.as_ref());
        }
    }

    pub fn toggle_cart_drawer(&self) {
        let Some(drawer) = self.page.query(CART_DRAWER) else {
            return;
        };
        let open = self.page.toggle_class(&drawer, OPEN);
        self.set_body_flag("cart-open", open);
    }

    pub fn close_cart_drawer(&self) {
        if let Some(drawer) = self.page.query(CART_DRAWER) {
            self.page.remove_class(&drawer, OPEN);
            self.set_body_flag("cart-open", false);
        }
    }

    /// Document click: close the drawer unless the click landed on the
    /// drawer itself or on its toggle.
    pub fn close_cart_drawer_outside(&self, target: &P::Node) {
        let (Some(drawer), Some(toggle)) =
            (self.page.query(CART_DRAWER), self.page.query(CART_TOGGLE))
        else {
            return;
        };
        if self.page.contains(&drawer, target) || self.page.contains(&toggle, target) {
            return;
        }
        self.close_cart_drawer();
    }
}
