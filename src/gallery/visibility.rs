//! One-shot "tell me when this element gets near the viewport" subscriptions.
//!
//! Every source hands back a [`Subscription`]. The callback runs at most once;
//! cancelling or dropping the subscription disarms it and releases whatever the
//! source registered with the browser.

use log::{debug, warn};
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::{Callback, NodeRef};

use crate::config;

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

#[derive(Debug, Error)]
pub enum VisibilityError {
    #[error("no window available")]
    NoWindow,
    #[error("failed to create intersection observer: {0}")]
    Observer(String),
    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Extra distance around the viewport, in CSS pixels. Negative values shrink
/// the trigger area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootMargin(pub i32);

impl RootMargin {
    pub fn to_css(self) -> String {
        format!("{}px", self.0)
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        RootMargin(config::DEFAULT_LAZY_MARGIN_PX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// True when `bounds` (viewport relative) overlaps the viewport grown by `margin`.
pub fn within_margin(bounds: Bounds, viewport: Viewport, margin: RootMargin) -> bool {
    let m = margin.0 as f64;
    bounds.bottom >= -m
        && bounds.top <= viewport.height + m
        && bounds.right >= -m
        && bounds.left <= viewport.width + m
}

pub type VisibleCallback = Box<dyn FnOnce()>;

/// Shared slot holding the callback until it fires or gets disarmed.
#[derive(Clone, Default)]
pub struct OneShot {
    slot: Rc<RefCell<Option<VisibleCallback>>>,
}

impl OneShot {
    pub fn new(callback: VisibleCallback) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(callback))),
        }
    }

    /// Replaces whatever the slot held.
    pub fn arm(&self, callback: VisibleCallback) {
        *self.slot.borrow_mut() = Some(callback);
    }

    /// Runs the callback if still armed. Returns whether it ran.
    pub fn fire(&self) -> bool {
        let callback = self.slot.borrow_mut().take();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn disarm(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn is_armed(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

/// Cancel token for a visibility subscription.
///
/// `detach` unhooks the source from the browser. Sources share it so they can
/// run it themselves right after `trigger` fires; whichever side gets there
/// first runs it, the other finds the slot empty.
pub struct Subscription {
    trigger: OneShot,
    detach: OneShot,
    retained: Option<Box<dyn Any>>,
}

impl Subscription {
    pub fn new(trigger: OneShot, teardown: impl FnOnce() + 'static) -> Self {
        Self::detached_by(trigger, OneShot::new(Box::new(teardown)))
    }

    pub fn detached_by(trigger: OneShot, detach: OneShot) -> Self {
        Self {
            trigger,
            detach,
            retained: None,
        }
    }

    /// Keeps `resource` (usually a JS callback) alive until the subscription
    /// is dropped, after `detach` has run.
    pub fn retaining(mut self, resource: impl Any) -> Self {
        self.retained = Some(Box::new(resource));
        self
    }

    /// Still waiting for the first visibility event.
    pub fn is_active(&self) -> bool {
        self.trigger.is_armed()
    }

    pub fn cancel(&mut self) {
        self.trigger.disarm();
        self.detach.fire();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub trait VisibilitySource {
    type Target;

    fn subscribe(
        &self,
        target: &Self::Target,
        margin: RootMargin,
        on_visible: VisibleCallback,
    ) -> Result<Subscription, VisibilityError>;
}

/// Subscribes `on_visible` for `target`. Falls back to firing it right away
/// when there is nothing to observe or the source cannot observe anything.
/// The caller keeps the returned subscription alive for as long as it wants
/// the event.
pub fn watch<S: VisibilitySource>(
    source: &S,
    target: Option<&S::Target>,
    margin: RootMargin,
    on_visible: Callback<()>,
) -> Option<Subscription> {
    let Some(target) = target else {
        warn!("Nothing mounted to observe, showing eagerly");
        on_visible.emit(());
        return None;
    };
    let callback = on_visible.clone();
    match source.subscribe(target, margin, Box::new(move || callback.emit(()))) {
        Ok(subscription) => Some(subscription),
        Err(err) => {
            warn!("Visibility detection unavailable, showing eagerly: {}", err);
            on_visible.emit(());
            None
        }
    }
}

/// [`watch`] for a rendered node, using whatever the browser supports.
pub fn watch_node(node: &NodeRef, margin: RootMargin, on_visible: Callback<()>) -> Option<Subscription> {
    let element = node.cast::<Element>();
    watch(&BrowserVisibility::detect(), element.as_ref(), margin, on_visible)
}

/// Backed by the browser's `IntersectionObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionVisibility;

impl VisibilitySource for IntersectionVisibility {
    type Target = Element;

    fn subscribe(
        &self,
        target: &Element,
        margin: RootMargin,
        on_visible: VisibleCallback,
    ) -> Result<Subscription, VisibilityError> {
        let trigger = OneShot::new(on_visible);
        let detach = OneShot::default();
        let callback = {
            let trigger = trigger.clone();
            let detach = detach.clone();
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if visible && trigger.fire() {
                    detach.fire();
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&margin.to_css());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| VisibilityError::Observer(describe(e)))?;
        observer.observe(target);
        detach.arm(Box::new(move || observer.disconnect()));

        Ok(Subscription::detached_by(trigger, detach).retaining(callback))
    }
}

/// Checks element bounds on scroll and resize, for browsers without
/// `IntersectionObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollVisibility;

fn viewport_of(window: &Window) -> Option<Viewport> {
    Some(Viewport {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    })
}

impl VisibilitySource for ScrollVisibility {
    type Target = Element;

    fn subscribe(
        &self,
        target: &Element,
        margin: RootMargin,
        on_visible: VisibleCallback,
    ) -> Result<Subscription, VisibilityError> {
        let window = web_sys::window().ok_or(VisibilityError::NoWindow)?;
        let trigger = OneShot::new(on_visible);
        let detach = OneShot::default();

        let check = {
            let trigger = trigger.clone();
            let detach = detach.clone();
            let element = target.clone();
            let window = window.clone();
            move || {
                if !trigger.is_armed() {
                    return;
                }
                let Some(viewport) = viewport_of(&window) else {
                    return;
                };
                let rect = element.get_bounding_client_rect();
                let bounds = Bounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                    left: rect.left(),
                    right: rect.right(),
                };
                if within_margin(bounds, viewport, margin) && trigger.fire() {
                    detach.fire();
                }
            }
        };

        let listener = Closure::wrap(Box::new(check.clone()) as Box<dyn FnMut()>);
        let function: Function = listener.as_ref().unchecked_ref::<Function>().clone();

        {
            let window = window.clone();
            let function = function.clone();
            detach.arm(Box::new(move || {
                for event in SCROLL_EVENTS {
                    if let Err(e) = window.remove_event_listener_with_callback(event, &function) {
                        warn!("Could not remove {} listener: {:?}", event, e);
                    }
                }
            }));
        }
        let subscription = Subscription::detached_by(trigger, detach).retaining(listener);

        for event in SCROLL_EVENTS {
            window
                .add_event_listener_with_callback(event, &function)
                .map_err(|e| VisibilityError::Listener {
                    event,
                    reason: describe(e),
                })?;
        }

        check();
        Ok(subscription)
    }
}

/// Treats everything as visible the moment it subscribes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateVisibility;

impl VisibilitySource for ImmediateVisibility {
    type Target = Element;

    fn subscribe(
        &self,
        _target: &Element,
        _margin: RootMargin,
        on_visible: VisibleCallback,
    ) -> Result<Subscription, VisibilityError> {
        let trigger = OneShot::new(on_visible);
        trigger.fire();
        Ok(Subscription::new(trigger, || ()))
    }
}

/// Picks the best source the current browser supports.
#[derive(Clone, Copy, Debug)]
pub enum BrowserVisibility {
    Intersection(IntersectionVisibility),
    Scroll(ScrollVisibility),
    Immediate(ImmediateVisibility),
}

impl BrowserVisibility {
    pub fn detect() -> Self {
        match web_sys::window() {
            Some(window) if has_intersection_observer(&window) => {
                BrowserVisibility::Intersection(IntersectionVisibility)
            }
            Some(_) => {
                debug!("IntersectionObserver missing, using scroll checks");
                BrowserVisibility::Scroll(ScrollVisibility)
            }
            None => BrowserVisibility::Immediate(ImmediateVisibility),
        }
    }
}

fn has_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

impl VisibilitySource for BrowserVisibility {
    type Target = Element;

    fn subscribe(
        &self,
        target: &Element,
        margin: RootMargin,
        on_visible: VisibleCallback,
    ) -> Result<Subscription, VisibilityError> {
        match self {
            BrowserVisibility::Intersection(source) => source.subscribe(target, margin, on_visible),
            BrowserVisibility::Scroll(source) => source.subscribe(target, margin, on_visible),
            BrowserVisibility::Immediate(source) => source.subscribe(target, margin, on_visible),
        }
    }
}
