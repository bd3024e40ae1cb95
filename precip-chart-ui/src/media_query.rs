//! CSS media query exposed as a Dioxus signal.

use dioxus::prelude::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

/// Keeps the `change` listener registered; unregisters it on drop.
struct MediaQueryListener {
    list: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl Drop for MediaQueryListener {
    fn drop(&mut self) {
        let _ = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

fn match_media(query: &str) -> Option<MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

/// Track whether `query` currently matches.
///
/// The signal starts at the current match state and flips on every `change`
/// event. Changes are not debounced. The listener lives as long as the
/// calling component.
pub fn use_media_query(query: &'static str) -> Signal<bool> {
    let mut matches = use_signal(|| match_media(query).map(|list| list.matches()).unwrap_or(false));

    use_hook(move || {
        let Some(list) = match_media(query) else {
            log::warn!("matchMedia unavailable for {}", query);
            return None;
        };
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::wrap(Box::new(
            move |event: MediaQueryListEvent| {
                log::debug!("media query {} -> {}", query, event.matches());
                matches.set(event.matches());
            },
        ));
        if let Err(e) =
            list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to observe {}: {:?}", query, e);
            return None;
        }
        Some(Rc::new(MediaQueryListener { list, callback }))
    });

    matches
}
