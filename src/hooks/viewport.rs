use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::DomError;
use crate::motion::reveal::RevealLatch;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element and fires `on_enter` the first time it intersects
/// the viewport. Disconnects after that, and on drop.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportObserver {
    pub fn observe(
        element: &Element,
        root_margin: &str,
        on_enter: impl Fn() + 'static,
    ) -> Result<Self, DomError> {
        let mut latch = RevealLatch::default();

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if latch.observe(intersecting) {
                observer.disconnect();
                on_enter();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(DomError::observer)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Flips to `true` the first time `node` enters the viewport and stays there
/// for the life of the component.
#[hook]
pub fn use_in_view_once(node: NodeRef, root_margin: &'static str) -> bool {
    let in_view = use_state(|| false);

    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |(node, root_margin)| {
                let observer = node
                    .cast::<Element>()
                    .ok_or(DomError::NodeMissing)
                    .and_then(|element| {
                        let setter = setter.clone();
                        ViewportObserver::observe(&element, root_margin, move || setter.set(true))
                    });

                let observer = match observer {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        // Show the content rather than leave it hidden for good.
                        warn!("viewport observer unavailable, revealing immediately: {}", err);
                        setter.set(true);
                        None
                    }
                };

                move || drop(observer)
            },
            (node, root_margin),
        );
    }

    *in_view
}
