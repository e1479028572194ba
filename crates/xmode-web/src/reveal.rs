//! `IntersectionObserver` binding for the core reveal registry.
//!
//! Each page creates one [`RevealScope`] per threshold and tracks its
//! regions through it. The scope is released with the page: the observer
//! disconnects and every pending registration is dropped, so no callback
//! reaches a removed region.

use js_sys::Array;
use leptos::html::ElementType;
use leptos::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use xmode_core::{IntersectionSample, RevealRegistry, Threshold};

const REVEAL_ID_ATTR: &str = "data-reveal-id";

#[derive(Default)]
struct Tracked {
    registry: RevealRegistry<u32>,
    flags: HashMap<u32, WriteSignal<bool>>,
    next_id: u32,
}

struct ScopeState {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    tracked: Rc<RefCell<Tracked>>,
}

impl ScopeState {
    fn release(&self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        let mut tracked = self.tracked.borrow_mut();
        let released = tracked.registry.teardown();
        tracked.flags.clear();
        if !released.is_empty() {
            log::debug!("released {} unrevealed regions", released.len());
        }
    }
}

/// Reveal-on-scroll registrations sharing one threshold and one lifetime.
#[derive(Clone, Copy)]
pub struct RevealScope {
    threshold: Threshold,
    state: StoredValue<ScopeState, LocalStorage>,
}

impl RevealScope {
    /// Create a scope owned by the current reactive owner
    pub fn new(threshold: Threshold) -> Self {
        let tracked = Rc::new(RefCell::new(Tracked::default()));
        let (observer, callback) = match build_observer(threshold, Rc::clone(&tracked)) {
            Ok((observer, callback)) => (Some(observer), Some(callback)),
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {:?}", err);
                (None, None)
            }
        };

        let scope = Self {
            threshold,
            state: StoredValue::new_local(ScopeState {
                observer,
                _callback: callback,
                tracked,
            }),
        };

        on_cleanup(move || {
            scope.state.try_with_value(ScopeState::release);
        });

        scope
    }

    /// Watch the element behind `node`. The returned signal turns true
    /// once, when the element first crosses the scope's threshold.
    pub fn track<E>(&self, node: NodeRef<E>) -> ReadSignal<bool>
    where
        E: ElementType,
        E::Output: JsCast + Clone + 'static,
    {
        let (revealed, set_revealed) = signal(false);
        let threshold = self.threshold;

        let id = self.state.with_value(|state| {
            let mut tracked = state.tracked.borrow_mut();
            let id = tracked.next_id;
            tracked.next_id += 1;
            tracked.registry.register(id, threshold);
            tracked.flags.insert(id, set_revealed);
            id
        });

        let state = self.state;
        Effect::new(move |_| {
            let Some(mounted) = node.get() else { return };
            let element: &Element = mounted.unchecked_ref();
            if let Err(err) = element.set_attribute(REVEAL_ID_ATTR, &id.to_string()) {
                log::warn!("failed to tag reveal region: {:?}", err);
                return;
            }
            state.with_value(|state| match &state.observer {
                Some(observer) => observer.observe(element),
                // Without an observer there is nothing to wait for
                None => set_revealed.set(true),
            });
        });

        revealed
    }
}

fn build_observer(
    threshold: Threshold,
    tracked: Rc<RefCell<Tracked>>,
) -> Result<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>), JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(id) = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|raw| raw.parse::<u32>().ok())
                else {
                    continue;
                };

                let sample = IntersectionSample::new(entry.intersection_ratio(), entry.is_intersecting());
                let flag = {
                    let mut tracked = tracked.borrow_mut();
                    if tracked.registry.observe(&id, sample) {
                        tracked.flags.remove(&id)
                    } else {
                        None
                    }
                };

                if let Some(flag) = flag {
                    observer.unobserve(&target);
                    flag.set(true);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold.ratio()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    Ok((observer, callback))
}
