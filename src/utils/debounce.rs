use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// Delays an action until input has been quiet for `delay_ms`.
///
/// Each call to [`Debouncer::schedule`] cancels the pending action, so only
/// the last edit in a burst of keystrokes reaches the request parameters.
/// Dropping the debouncer cancels whatever is still pending.
///
/// # Example
///
/// ```rust,ignore
/// let debouncer = use_mut_ref(|| Debouncer::new(Config::PARAM_DEBOUNCE_MS));
/// let on_input = Callback::from(move |value: String| {
///     let on_change = on_change.clone();
///     debouncer.borrow().schedule(move || on_change.emit(value));
/// });
/// ```
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn schedule<F>(&self, action: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        *self.pending.borrow_mut() = Some(Timeout::new(self.delay_ms, action));
    }

    fn cancel(&self) {
        // Dropping a Timeout clears it
        if let Some(handle) = self.pending.borrow_mut().take() {
            drop(handle);
        }
    }
}
