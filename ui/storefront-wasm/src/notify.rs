//! Toast notifications.
//!
//! One toast at a time: a new one replaces whatever is still on screen.

use crate::controller::Storefront;
use crate::motion;
use crate::page::{self, Page};

pub const NOTIFICATION: &str = ".notification";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification--success",
            NotificationKind::Error => "notification--error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "var(--primary-color)",
            NotificationKind::Error => "var(--secondary-color)",
        }
    }
}

impl<P: Page> Storefront<P> {
    pub fn show_notification(&self, message: &str, kind: NotificationKind) -> P::Node {
        for old in self.page.query_all(NOTIFICATION) {
            self.page.remove(&old);
        }

        let toast = self.page.create_element("div");
        self.page.add_class(&toast, "notification");
        self.page.add_class(&toast, kind.class());
        self.page.set_text(&toast, message);
        page::set_styles(
            &self.page,
            &toast,
            &[
                ("position", "fixed"),
                ("top", "20px"),
                ("right", "20px"),
                ("padding", "1rem 1.5rem"),
                ("background", kind.background()),
                ("color", "var(--text-dark)"),
                ("border-radius", "var(--radius-md)"),
                ("z-index", "10000"),
                ("transform", "translateX(100%)"),
                ("transition", "transform 0.3s ease"),
                ("font-family", "var(--font-secondary)"),
                ("font-weight", "600"),
            ],
        );
        self.page.append_child(&self.page.body(), &toast);
        motion::toast(self.config.notification_ms).play(&self.page, &toast, self.scheduler.as_ref());
        toast
    }
}
