use std::sync::{Arc, Mutex};

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::RevealTracker;

/// Shared reveal bookkeeping for every [`ScrollReveal`] on the page.
#[derive(Debug, Clone, Copy)]
pub struct RevealContext {
    tracker: StoredValue<Arc<Mutex<RevealTracker<String>>>>,
    threshold: f64,
}

impl RevealContext {
    fn observe(&self, key: &str, intersecting: bool, ratio: f64) -> bool {
        self.tracker.with_value(|t| {
            t.lock()
                .expect("should be able to lock reveal tracker")
                .observe(key.to_string(), intersecting, ratio)
        })
    }
}

pub fn provide_reveal(threshold: f64) {
    let tracker = RevealTracker::new(threshold);
    provide_context(RevealContext {
        threshold: tracker.threshold(),
        tracker: StoredValue::new(Arc::new(Mutex::new(tracker))),
    });
}

/// Fades its children in the first time they scroll into view. Once revealed,
/// the element stays revealed and stops being observed.
#[component]
pub fn ScrollReveal(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = expect_context::<RevealContext>();
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    let key = id.clone();
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                if ctx.observe(&key, entry.is_intersecting(), entry.intersection_ratio()) {
                    set_revealed(true);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![ctx.threshold]),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    view! {
        <div
            node_ref=target
            data-reveal=id
            class=move || {
                if revealed.get() {
                    format!("{class} animate-on-scroll animate-in")
                } else {
                    format!("{class} animate-on-scroll")
                }
            }
        >
            {children()}
        </div>
    }
}
