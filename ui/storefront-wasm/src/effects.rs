//! Decorative effects.

use crate::controller::Storefront;
use crate::motion;
use crate::page::{self, Page};

pub const TYPING_EFFECT: &str = ".typing-effect";
pub const TYPING_MS_PER_CHAR: u32 = 100;

const HOVER_TRANSFORM: &str = "translateY(-10px) scale(1.02)";
const HOVER_SHADOW: &str = "0 25px 50px rgba(0, 255, 136, 0.3)";
const REST_TRANSFORM: &str = "translateY(0) scale(1)";
const REST_SHADOW: &str = "0 10px 30px rgba(0, 0, 0, 0.1)";

impl<P: Page> Storefront<P> {
    pub fn hover_card(&self, card: &P::Node) {
        page::set_styles(
            &self.page,
            card,
            &[("transform", HOVER_TRANSFORM), ("box-shadow", HOVER_SHADOW)],
        );
    }

    pub fn unhover_card(&self, card: &P::Node) {
        page::set_styles(
            &self.page,
            card,
            &[("transform", REST_TRANSFORM), ("box-shadow", REST_SHADOW)],
        );
    }

    /// Retype every `.typing-effect` element from scratch.
    pub fn start_typing_effects(&self) {
        for node in self.page.query_all(TYPING_EFFECT) {
            let text = self.page.text(&node);
            motion::typing(&text, TYPING_MS_PER_CHAR).play(&self.page, &node, self.scheduler.as_ref());
        }
    }
}
