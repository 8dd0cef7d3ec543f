//! Product gallery: thumbnail switching and hover zoom.

use crate::controller::Storefront;
use crate::motion;
use crate::page::{Page, Rect};

pub const THUMBNAIL: &str = ".product-thumbnail";
pub const MAIN_IMAGE: &str = ".product-main-image";
pub const ACTIVE: &str = "active";
pub const ZOOM_SCALE: &str = "scale(1.2)";

/// Cursor position inside `rect` as percentages, the zoom transform origin.
pub fn zoom_origin(rect: Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let axis = |pos: f64, start: f64, len: f64| {
        if len > 0.0 {
            (pos - start) / len * 100.0
        } else {
            50.0
        }
    };
    (
        axis(client_x, rect.left, rect.width),
        axis(client_y, rect.top, rect.height),
    )
}

impl<P: Page> Storefront<P> {
    pub fn select_thumbnail(&self, thumbnail: &P::Node) {
        let Some(src) = self.page.attr(thumbnail, "data-image") else {
            return;
        };
        self.swap_main_image(&src);
        for thumb in self.page.query_all(THUMBNAIL) {
            if &thumb == thumbnail {
                self.page.add_class(&thumb, ACTIVE);
            } else {
                self.page.remove_class(&thumb, ACTIVE);
            }
        }
    }

    /// Show `src` in the main image and mark the first thumbnail carrying it.
    pub fn switch_product_image(&self, src: &str) {
        self.swap_main_image(src);
        let mut marked = false;
        for thumb in self.page.query_all(THUMBNAIL) {
            let matches = self.page.attr(&thumb, "data-image").as_deref() == Some(src);
            if matches && !marked {
                self.page.add_class(&thumb, ACTIVE);
                marked = true;
            } else {
                self.page.remove_class(&thumb, ACTIVE);
            }
        }
    }

    fn swap_main_image(&self, src: &str) {
        if let Some(main) = self.page.query(MAIN_IMAGE) {
            motion::image_swap(src).play(&self.page, &main, self.scheduler.as_ref());
        }
    }

    pub fn zoom_image(&self, image: &P::Node, client_x: f64, client_y: f64) {
        let (x, y) = zoom_origin(self.page.rect(image), client_x, client_y);
        self.page
            .set_style(image, "transform-origin", &format!("{}% {}%", x, y));
        self.page.set_style(image, "transform", ZOOM_SCALE);
    }

    pub fn reset_zoom(&self, image: &P::Node) {
        self.page.set_style(image, "transform", "scale(1)");
    }
}
