//! Dark/light theme.
//!
//! The mode lives in two places: `data-theme` on `<body>` (what the CSS keys
//! off) and the storage key. Both are always written together.

use crate::controller::Storefront;
use crate::motion;
use crate::page::{self, Page};
use storefront_types::ThemeMode;
use tracing::{debug, warn};

pub const THEME_ATTR: &str = "data-theme";
pub const THEME_TOGGLE: &str = ".theme-toggle";
pub const TRANSITION_OVERLAY: &str = "theme-transition-overlay";

impl<P: Page> Storefront<P> {
    /// Mode currently shown on the page.
    pub fn current_theme(&self) -> ThemeMode {
        self.page
            .attr(&self.page.body(), THEME_ATTR)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or(self.config.default_theme)
    }

    pub fn stored_theme(&self) -> ThemeMode {
        self.store
            .get(&self.config.theme_storage_key)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or(self.config.default_theme)
    }

    /// Restore the persisted mode on page load.
    pub fn init_theme(&self) -> ThemeMode {
        let mode = self.stored_theme();
        self.apply_theme(mode);
        mode
    }

    pub fn toggle_theme(&self) -> ThemeMode {
        let next = self.current_theme().toggled();
        self.apply_theme(next);
        if let Err(e) = self.store.set(&self.config.theme_storage_key, next.as_str()) {
            warn!("theme not persisted: {}", e);
        }
        debug!(theme = next.as_str(), "theme toggled");
        self.play_theme_transition();
        next
    }

    fn apply_theme(&self, mode: ThemeMode) {
        self.page
            .set_attr(&self.page.body(), THEME_ATTR, mode.as_str());
        if let Some(toggle) = self.page.query(THEME_TOGGLE) {
            self.page.set_attr(&toggle, THEME_ATTR, mode.as_str());
        }
    }

    fn play_theme_transition(&self) {
        let overlay = self.page.create_element("div");
        self.page.add_class(&overlay, TRANSITION_OVERLAY);
        page::set_styles(
            &self.page,
            &overlay,
            &[
                ("position", "fixed"),
                ("top", "0"),
                ("left", "0"),
                ("width", "100%"),
                ("height", "100%"),
                ("background", "var(--primary-color)"),
                ("z-index", "9999"),
                ("opacity", "0"),
                ("transition", "opacity 0.3s ease"),
            ],
        );
        self.page.append_child(&self.page.body(), &overlay);
        motion::theme_transition().play(&self.page, &overlay, self.scheduler.as_ref());
    }
}
