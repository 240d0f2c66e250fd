use dioxus::prelude::*;

use crate::shared::state::ScrollState;

/// Window scroll subscription tied to the calling component.
///
/// The listener is attached once on mount and removed in `use_drop`, so
/// mounting and unmounting the navbar repeatedly never stacks listeners.
/// Outside the browser the state stays `Top`.
pub fn use_scroll_state() -> Signal<ScrollState> {
    #[allow(unused_mut)]
    let mut scroll_state = use_signal(ScrollState::default);

    #[cfg(target_arch = "wasm32")]
    {
        use crate::shared::logging::{
            log_scroll_listener_attached, log_scroll_listener_detached,
            log_scroll_listener_error, log_scroll_state_change,
        };
        use std::rc::Rc;

        let listener = use_hook(move || {
            let on_offset = move |offset: f64| {
                let next = ScrollState::from_offset(offset);
                if *scroll_state.peek() != next {
                    log_scroll_state_change(offset, next);
                    scroll_state.set(next);
                }
            };

            match listener::ScrollListener::attach(on_offset) {
                Ok(listener) => {
                    log_scroll_listener_attached(listener.offset());
                    Some(Rc::new(listener))
                }
                Err(e) => {
                    log_scroll_listener_error(&e);
                    None
                }
            }
        });

        // A page restored mid-scroll must not start in the top theme
        let initial_listener = listener.clone();
        use_effect(move || {
            if let Some(listener) = &initial_listener {
                let next = ScrollState::from_offset(listener.offset());
                if *scroll_state.peek() != next {
                    scroll_state.set(next);
                }
            }
        });

        use_drop(move || {
            if let Some(listener) = listener {
                match listener.detach() {
                    Ok(()) => log_scroll_listener_detached(),
                    Err(e) => log_scroll_listener_error(&e),
                }
            }
        });
    }

    scroll_state
}

#[cfg(target_arch = "wasm32")]
mod listener {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::shared::errors::{AppError, Result};

    const SCROLL_EVENT: &str = "scroll";

    /// A registered `scroll` listener on `window`
    pub struct ScrollListener {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl ScrollListener {
        pub fn attach(mut on_offset: impl FnMut(f64) + 'static) -> Result<Self> {
            let window = web_sys::window()
                .ok_or_else(|| AppError::Listener("no global window".to_string()))?;

            let window_for_callback = window.clone();
            let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                on_offset(window_for_callback.scroll_y().unwrap_or(0.0));
            }) as Box<dyn FnMut(web_sys::Event)>);

            window
                .add_event_listener_with_callback(SCROLL_EVENT, callback.as_ref().unchecked_ref())
                .map_err(|e| AppError::Listener(format!("{:?}", e)))?;

            Ok(Self { window, callback })
        }

        pub fn offset(&self) -> f64 {
            self.window.scroll_y().unwrap_or(0.0)
        }

        pub fn detach(&self) -> Result<()> {
            self.window
                .remove_event_listener_with_callback(
                    SCROLL_EVENT,
                    self.callback.as_ref().unchecked_ref(),
                )
                .map_err(|e| AppError::Listener(format!("{:?}", e)))
        }
    }
}
