//! Browser event wiring.
//!
//! Turns the resolved binding table into real listeners. Each DOM event is
//! reduced to a `UiEvent` and handed to `Storefront::dispatch` on the local
//! executor. Listeners live for the lifetime of the page, so their closures
//! are leaked with `forget`.

use crate::bindings::{Action, Binding, BindingTable, INTERSECT, Source};
use crate::controller::{Storefront, UiEvent};
use crate::page::WebPage;
use crate::scroll::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, Event, EventTarget, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

type Shop = Storefront<WebPage>;

fn spawn_dispatch(sf: &Shop, action: Action, event: UiEvent<Element>) {
    let sf = sf.clone();
    spawn_local(async move {
        sf.dispatch(action, event).await;
    });
}

/// Attach one listener per resolved binding. Call once after `start`.
pub fn bind_events(sf: &Shop, table: &BindingTable<Element>) -> Result<(), JsValue> {
    for resolved in &table.resolved {
        let binding = resolved.binding;
        match binding.source {
            Source::Each(_) if binding.event == INTERSECT => {
                observe(sf, binding.action, &resolved.nodes)?;
            }
            Source::Each(_) => {
                for node in &resolved.nodes {
                    listen(sf, node.as_ref(), binding, Some(node.clone()))?;
                }
            }
            Source::Document => listen(sf, sf.page().document().as_ref(), binding, None)?,
            Source::Window => listen(sf, sf.page().window().as_ref(), binding, None)?,
        }
    }
    Ok(())
}

fn listen(
    sf: &Shop,
    target: &EventTarget,
    binding: Binding,
    bound: Option<Element>,
) -> Result<(), JsValue> {
    let sf2 = sf.clone();
    let cb = Closure::wrap(Box::new(move |event: Event| {
        let Some(ui) = to_ui_event(&sf2, binding.event, &event, bound.as_ref()) else {
            return;
        };
        if sf2.prevents_default(binding.action, &ui) {
            event.prevent_default();
        }
        spawn_dispatch(&sf2, binding.action, ui);
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(binding.event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn to_ui_event(
    sf: &Shop,
    name: &str,
    event: &Event,
    bound: Option<&Element>,
) -> Option<UiEvent<Element>> {
    let target = || {
        bound
            .cloned()
            .or_else(|| event.target()?.dyn_into::<Element>().ok())
    };
    let ui = match name {
        "click" => UiEvent::Click { target: target()? },
        "input" => UiEvent::Input {
            value: event.target()?.dyn_into::<HtmlInputElement>().ok()?.value(),
        },
        "mousemove" => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            UiEvent::Pointer {
                target: target()?,
                client_x: f64::from(mouse.client_x()),
                client_y: f64::from(mouse.client_y()),
            }
        }
        "mouseenter" => UiEvent::Enter { target: target()? },
        "mouseleave" => UiEvent::Leave { target: target()? },
        "keydown" => UiEvent::Key {
            key: event.dyn_ref::<KeyboardEvent>()?.key(),
        },
        "scroll" => UiEvent::Scroll {
            scroll_y: sf.page().scroll_y(),
        },
        other => {
            tracing::warn!(event = other, "no mapping for DOM event");
            return None;
        }
    };
    Some(ui)
}

fn observe(sf: &Shop, action: Action, nodes: &[Element]) -> Result<(), JsValue> {
    let sf2 = sf.clone();
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let ui = UiEvent::Intersect {
                target: entry.target(),
                intersecting: entry.is_intersecting(),
            };
            spawn_dispatch(&sf2, action, ui);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    for node in nodes {
        observer.observe(node);
    }
    cb.forget();
    Ok(())
}
