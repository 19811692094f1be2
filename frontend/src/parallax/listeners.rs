use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};

/// Window listeners that live exactly as long as this value.
///
/// Every event that registered successfully is removed again on drop, so an
/// unmounted component can never be called back.
pub struct ListenerScope {
    window: Window,
    events: Vec<&'static str>,
    callback: Closure<dyn FnMut()>,
}

impl ListenerScope {
    /// Registers `callback` for each event. Events are registered passive.
    pub fn attach<F>(window: &Window, events: &[&'static str], callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let mut options = AddEventListenerOptions::new();
        options.passive(true);

        let mut registered = Vec::with_capacity(events.len());
        for &event in events {
            match window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(()) => registered.push(event),
                Err(e) => warn!("Failed to listen for {} events: {:?}", event, e),
            }
        }

        Self {
            window: window.clone(),
            events: registered,
            callback,
        }
    }

    pub fn events(&self) -> &[&'static str] {
        &self.events
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        for event in self.events.drain(..) {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}
