use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::BeforeUnloadEvent;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no window")]
    NoWindow,
    #[error("failed to add event listener: {0}")]
    Listener(String),
}

/// Asks the browser to confirm leaving the page while `message` returns a message.
///
/// The listener is removed when the guard is dropped. Browsers may show their own text instead of
/// the given message.
pub struct BeforeUnloadGuard {
    window: web_sys::Window,
    closure: Closure<dyn FnMut(BeforeUnloadEvent)>,
}

impl BeforeUnloadGuard {
    /// # Errors
    ///
    /// Returns an error if the listener could not be registered.
    pub fn install(message: impl Fn() -> Option<&'static str> + 'static) -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let closure = Closure::<dyn FnMut(BeforeUnloadEvent)>::new(move |event: BeforeUnloadEvent| {
            if let Some(message) = message() {
                event.prevent_default();
                event.set_return_value(message);
            }
        });
        window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
            .map_err(|err| Error::Listener(format!("{err:?}")))?;
        Ok(Self { window, closure })
    }
}

impl Drop for BeforeUnloadGuard {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "beforeunload",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
