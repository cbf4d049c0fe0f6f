//! Thin wrappers over the browser APIs the page effects use. Every handle
//! here releases its browser resource on drop, so a component that stores
//! one in its effect gets cleanup on unmount for free.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node,
};
use yew::Callback;

use crate::config::PageConfig;
use crate::motion::timeline::{Ticket, Timeline, Wait};

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub fn now() -> f64 {
    window().and_then(|w| w.performance()).map(|p| p.now()).unwrap_or(0.0)
}

/// Sets (or clears, for an empty value) the inline `overflow` of `<body>`.
pub fn set_body_overflow(value: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    if value.is_empty() {
        let _ = style.remove_property("overflow");
    } else {
        let _ = style.set_property("overflow", value);
    }
}

/// Position of `element` among the nodes matching `selector` under its
/// parent. Elements without a parent count as first.
pub fn index_among_siblings(element: &Element, selector: &str) -> usize {
    let Some(list) = element
        .parent_element()
        .and_then(|parent| parent.query_selector_all(selector).ok())
    else {
        return 0;
    };
    let target: &Node = element;
    (0..list.length())
        .find(|&i| list.get(i).map_or(false, |node| node.is_same_node(Some(target))))
        .map_or(0, |i| i as usize)
}

/// Passive window event listener, removed on drop.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` chain. `tick` receives the frame timestamp and
/// returns whether another frame should be requested.
pub struct FrameLoop {
    handle: Rc<Cell<Option<i32>>>,
    closure: FrameSlot,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let handle = Rc::new(Cell::new(None));
        let closure: FrameSlot = Rc::new(RefCell::new(None));

        let weak: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::downgrade(&closure);
        let handle_for_tick = handle.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            handle_for_tick.set(None);
            if !tick(timestamp) {
                return;
            }
            if let Some(slot) = weak.upgrade() {
                handle_for_tick.set(request_frame(&slot));
            }
        }) as Box<dyn FnMut(f64)>));

        let first = request_frame(&closure)?;
        handle.set(Some(first));
        Some(Self { handle, closure })
    }

    pub fn cancel(self) {
        drop(self);
    }
}

fn request_frame(slot: &FrameSlot) -> Option<i32> {
    let window = window()?;
    let slot = slot.borrow();
    let callback = slot.as_ref()?;
    window.request_animation_frame(callback.as_ref().unchecked_ref()).ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(window), Some(id)) = (window(), self.handle.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.closure.borrow_mut().take();
    }
}

/// Runs `f` once `frames` animation frames have passed.
pub fn after_frames(frames: u32, f: impl FnOnce() + 'static) -> Option<FrameLoop> {
    let mut remaining = frames.max(1);
    let mut f = Some(f);
    FrameLoop::start(move |_| {
        remaining -= 1;
        if remaining > 0 {
            return true;
        }
        if let Some(f) = f.take() {
            f();
        }
        false
    })
}

/// A scheduled step; dropping it cancels the step.
pub enum Pending {
    Timer(Timeout),
    Frames(FrameLoop),
}

impl Pending {
    pub fn cancel(self) {
        match self {
            Pending::Timer(timeout) => drop(timeout),
            Pending::Frames(frames) => frames.cancel(),
        }
    }
}

pub fn schedule(wait: Wait, f: impl FnOnce() + 'static) -> Option<Pending> {
    match wait {
        Wait::Millis(ms) => Some(Pending::Timer(Timeout::new(ms, f))),
        Wait::Frames(frames) => after_frames(frames, f).map(Pending::Frames),
    }
}

/// Walks a timeline from `from`, emitting each phase as it is entered.
/// Steps are parked in `pending`; a stale `ticket` stops the walk.
pub fn drive<T: Timeline + 'static>(
    from: T,
    config: Rc<PageConfig>,
    ticket: Ticket,
    pending: Rc<RefCell<Vec<Pending>>>,
    on_enter: Callback<T>,
) {
    let Some((wait, next)) = from.next(&config) else {
        return;
    };
    let parked = pending.clone();
    let step = schedule(wait, move || {
        if !ticket.is_current() {
            return;
        }
        on_enter.emit(next);
        if !ticket.is_current() {
            return;
        }
        drive(next, config, ticket, parked, on_enter);
    });
    if let Some(step) = step {
        pending.borrow_mut().push(step);
    }
}

/// IntersectionObserver on a single target, disconnected on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn observe(
        target: &Element,
        threshold: f64,
        root_margin: &str,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(target);
        Some(Self { observer, _callback: callback })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
