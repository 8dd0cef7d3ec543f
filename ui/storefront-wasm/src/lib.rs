//! Storefront theme runtime, compiled to WASM.
//!
//! Drives the interactive parts of a storefront theme: dark/light mode, the
//! AJAX cart, predictive search, the product gallery, scroll effects and
//! toasts. All behaviour lives on `Storefront`, which talks to the DOM
//! through the `Page` trait so it can be exercised without a browser.

pub mod api;
pub mod bindings;
pub mod cart;
pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod events;
pub mod gallery;
pub mod logging;
pub mod motion;
pub mod notify;
pub mod page;
pub mod request;
pub mod scroll;
pub mod search;
pub mod state;
pub mod theme;

pub use controller::{Storefront, UiEvent, UiState};
pub use error::StorefrontError;
pub use page::{Page, WebPage};

use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// WASM entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    init()
}

fn init() -> Result<(), JsValue> {
    let page = WebPage::new()?;
    let config = config::load(&page);
    logging::init(&config.log_level);

    let sf = Storefront::new(
        page,
        Rc::new(api::HttpApi::new(&config)),
        Rc::new(state::LocalStore::new()),
        Rc::new(motion::TimerScheduler),
        config,
    );
    let table = sf.start();
    events::bind_events(&sf, &table)?;

    tracing::info!("storefront ready");
    Ok(())
}
