//! Scroll-triggered reveal tracking.
//!
//! Every section owns one reveal: a boolean that flips when the section
//! crosses a visibility threshold, latched permanently in the default
//! `trigger_once` mode. The DOM side is an IntersectionObserver registered
//! once the element exists and disconnected on cleanup; if the observer API
//! is unavailable the reveal fails open to "always visible" so content is
//! never hidden behind a missing enhancement.

use leptos::html::Section;
use leptos::logging::warn;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Visibility tracking for one element.
///
/// With `trigger_once` (the default for reveals), `entered` transitions
/// false to true at most once and never reverts; otherwise it mirrors the
/// latest intersection sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealState {
    entered: bool,
    trigger_once: bool,
}

impl RevealState {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            entered: false,
            trigger_once,
        }
    }

    /// Whether the element has entered the viewport.
    pub fn has_entered(&self) -> bool {
        self.entered
    }

    /// Feed one intersection sample and return the resulting visibility.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.trigger_once {
            self.entered = self.entered || intersecting;
        } else {
            self.entered = intersecting;
        }
        self.entered
    }
}

/// Configuration for [`use_scroll_reveal`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible, 0 to 1.
    pub threshold: f64,
    /// Latch permanently after the first entry.
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
        }
    }
}

impl RevealOptions {
    /// Default options with a custom threshold.
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// Observe `target` and return a signal that flips true when it enters the
/// viewport.
///
/// The observer is registered once the node exists and disconnected on
/// cleanup, so no callback can fire after the owning component unmounts.
/// In `trigger_once` mode the observer is also disconnected as soon as the
/// reveal latches. If the window or the IntersectionObserver API is
/// unavailable, the signal is set to true immediately (fail-open).
pub fn use_scroll_reveal(target: NodeRef<Section>, options: RevealOptions) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let observer = StoredValue::new_local(None::<RevealObserver>);

    Effect::new(move |_| {
        if observer.with_value(Option::is_some) || visible.get_untracked() {
            return;
        }
        let Some(element) = target.get() else {
            return;
        };
        if web_sys::window().is_none() {
            warn!("viewport observation unavailable; revealing content immediately");
            set_visible.set(true);
            return;
        }

        let mut state = RevealState::new(options.trigger_once);
        // Handle used by the callback to disconnect itself once latched.
        let self_handle: Rc<RefCell<Option<IntersectionObserver>>> = Rc::new(RefCell::new(None));
        let callback_handle = Rc::clone(&self_handle);

        let attached = RevealObserver::attach(&element, options.threshold, move |intersecting| {
            let entered = state.observe(intersecting);
            set_visible.set(entered);
            if entered && options.trigger_once {
                if let Some(handle) = callback_handle.borrow().as_ref() {
                    handle.disconnect();
                }
            }
        });

        match attached {
            Ok(reveal_observer) => {
                *self_handle.borrow_mut() = Some(reveal_observer.handle());
                observer.set_value(Some(reveal_observer));
            }
            Err(_) => {
                warn!("viewport observation unavailable; revealing content immediately");
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.update_value(|slot| {
            if let Some(reveal_observer) = slot.take() {
                reveal_observer.disconnect();
            }
        });
    });

    visible
}

/// An IntersectionObserver together with the closure it calls into.
///
/// The closure must outlive the observer registration; dropping this struct
/// disconnects the observer first, so no callback fires into freed state.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl RevealObserver {
    fn attach(
        element: &web_sys::Element,
        threshold: f64,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Clone of the underlying JS observer handle.
    fn handle(&self) -> IntersectionObserver {
        self.observer.clone()
    }

    fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_on_first_entry_when_trigger_once() {
        let mut state = RevealState::new(true);
        assert!(!state.has_entered());
        assert!(!state.observe(false));
        assert!(state.observe(true));
        // Leaving the viewport never reverts the latch.
        assert!(state.observe(false));
        assert!(state.has_entered());
    }

    #[test]
    fn mirrors_visibility_when_repeatable() {
        let mut state = RevealState::new(false);
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(state.observe(true));
    }

    #[test]
    fn transitions_at_most_once_under_any_sample_sequence() {
        let samples = [false, true, false, true, true, false];
        let mut state = RevealState::new(true);
        let mut transitions = 0;
        let mut previous = state.has_entered();
        for &sample in &samples {
            let now = state.observe(sample);
            if now != previous {
                transitions += 1;
            }
            previous = now;
        }
        assert_eq!(transitions, 1);
    }

    #[test]
    fn default_options_match_the_section_contract() {
        let options = RevealOptions::default();
        assert!((options.threshold - 0.1).abs() < f64::EPSILON);
        assert!(options.trigger_once);
        assert!((RevealOptions::threshold(0.2).threshold - 0.2).abs() < f64::EPSILON);
    }
}
