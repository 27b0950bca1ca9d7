use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::error::DomError;
use crate::motion::scroll::ScrollFlag;

/// Window `scroll` listener feeding a [`ScrollFlag`]. Detaches on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(threshold: f64, on_change: impl Fn(bool) + 'static) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let window_clone = window.clone();
        let mut flag = ScrollFlag::new(threshold);

        let callback = Closure::wrap(Box::new(move || {
            let offset = window_clone.scroll_y().unwrap_or(0.0);
            if flag.sample(offset) {
                on_change(flag.is_scrolled());
            }
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::listener("scroll", err))?;

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to detach scroll listener: {:?}", err);
        }
    }
}

/// `true` while the page is scrolled more than `threshold` pixels.
#[hook]
pub fn use_scroll_flag(threshold: f64) -> bool {
    let is_scrolled = use_state(|| false);

    {
        let setter = is_scrolled.setter();
        use_effect_with_deps(
            move |threshold| {
                let listener = match ScrollListener::attach(*threshold, move |scrolled| {
                    debug!("nav scrolled state -> {}", scrolled);
                    setter.set(scrolled);
                }) {
                    Ok(listener) => Some(listener),
                    Err(err) => {
                        log::error!("scroll flag disabled: {}", err);
                        None
                    }
                };

                move || drop(listener)
            },
            threshold,
        );
    }

    *is_scrolled
}
