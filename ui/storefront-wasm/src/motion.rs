//! Timed visual sequences.
//!
//! Every transition in the theme is a `Choreography`: a finite list of steps,
//! each with an offset from the start and an `Effect` on one node. `play`
//! applies offset-zero steps immediately and hands the rest to a `Scheduler`.
//! In the browser that is `gloo-timers`; tests drive a virtual clock.

use crate::page::Page;
use gloo_timers::callback::Timeout;

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Fire-and-forget browser timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Style(&'static str, String),
    Attr(&'static str, String),
    Text(String),
    AddClass(&'static str),
    RemoveClass(&'static str),
    Detach,
}

impl Effect {
    pub fn apply<P: Page>(&self, page: &P, node: &P::Node) {
        match self {
            Effect::Style(property, value) => page.set_style(node, property, value),
            Effect::Attr(name, value) => page.set_attr(node, name, value),
            Effect::Text(text) => page.set_text(node, text),
            Effect::AddClass(class) => page.add_class(node, class),
            Effect::RemoveClass(class) => page.remove_class(node, class),
            Effect::Detach => page.remove(node),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub at_ms: u32,
    pub effect: Effect,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Choreography {
    steps: Vec<Step>,
}

impl Choreography {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, at_ms: u32, effect: Effect) -> Self {
        self.steps.push(Step { at_ms, effect });
        self
    }

    /// Steps in play order. Equal offsets keep insertion order.
    pub fn steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.at_ms);
        steps
    }

    /// Offset of the last step.
    pub fn duration_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.at_ms).max().unwrap_or(0)
    }

    pub fn play<P: Page>(&self, page: &P, node: &P::Node, scheduler: &dyn Scheduler) {
        for step in self.steps() {
            if step.at_ms == 0 {
                step.effect.apply(page, node);
                continue;
            }
            let page = page.clone();
            let node = node.clone();
            let effect = step.effect.clone();
            scheduler.schedule(step.at_ms, Box::new(move || effect.apply(&page, &node)));
        }
    }
}

/// Overlay flash played on theme change: in over ~150ms, out over ~300ms.
pub fn theme_transition() -> Choreography {
    Choreography::new()
        .at(10, Effect::Style("opacity", "1".to_owned()))
        .at(160, Effect::Style("opacity", "0".to_owned()))
        .at(460, Effect::Detach)
}

const TOAST_SLIDE_IN_MS: u32 = 100;
const TOAST_SLIDE_OUT_MS: u32 = 300;
/// Browsers run any `setTimeout` longer than `i32::MAX` ms immediately.
const TOAST_MAX_HOLD_MS: u32 = i32::MAX as u32 - TOAST_SLIDE_OUT_MS;

/// Toast lifecycle: slide in, hold, slide out, remove. The hold comes from
/// config, so it is clamped between the slide-in and the timer limit.
pub fn toast(hold_ms: u32) -> Choreography {
    let hold_ms = hold_ms.clamp(TOAST_SLIDE_IN_MS, TOAST_MAX_HOLD_MS);
    Choreography::new()
        .at(TOAST_SLIDE_IN_MS, Effect::Style("transform", "translateX(0)".to_owned()))
        .at(hold_ms, Effect::Style("transform", "translateX(100%)".to_owned()))
        .at(hold_ms + TOAST_SLIDE_OUT_MS, Effect::Detach)
}

pub fn image_swap(src: &str) -> Choreography {
    Choreography::new()
        .at(0, Effect::Style("opacity", "0".to_owned()))
        .at(200, Effect::Attr("src", src.to_owned()))
        .at(200, Effect::Style("opacity", "1".to_owned()))
}

/// Add a class and take it off again after `ms`.
pub fn pulse(class: &'static str, ms: u32) -> Choreography {
    Choreography::new()
        .at(0, Effect::AddClass(class))
        .at(ms, Effect::RemoveClass(class))
}

/// Typewriter: one more character every `per_char_ms`, then drop the caret.
pub fn typing(text: &str, per_char_ms: u32) -> Choreography {
    let mut c = Choreography::new()
        .at(0, Effect::Text(String::new()))
        .at(0, Effect::Style("border-right", "2px solid var(--primary-color)".to_owned()));
    let mut typed = String::new();
    let mut at = 0;
    for ch in text.chars() {
        typed.push(ch);
        c = c.at(at, Effect::Text(typed.clone()));
        at += per_char_ms;
    }
    c.at(at, Effect::Style("border-right", "none".to_owned()))
}

#[cfg(test)]
pub use manual::ManualScheduler;
