use super::fetch_state::{FetchGuard, FetchState};
use crate::models::error::AppError;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Handle returned by the data hooks
#[derive(PartialEq)]
pub struct FetchHandle<T> {
    pub state: FetchState<T>,
    /// Re-runs the request with the current parameters
    pub retry: Callback<()>,
}

impl<T> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            retry: self.retry.clone(),
        }
    }
}

/// Fetches on mount, whenever `deps` changes, and on retry.
///
/// Each run owns a [`FetchGuard`]; the effect cleanup invalidates it, so a
/// response for superseded parameters never lands in state.
#[hook]
pub fn use_fetch<D, T, F, Fut>(label: &'static str, deps: D, fetcher: F) -> FetchHandle<T>
where
    D: PartialEq + Clone + 'static,
    T: 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let state = use_state(|| FetchState::Loading);
    let attempt = use_state(|| 0u32); // Retry trigger

    {
        let state = state.clone();
        let attempt_value = *attempt;

        use_effect_with((deps, attempt_value), move |(deps, _)| {
            let guard = FetchGuard::new();
            let in_flight = guard.clone();

            // Reset to loading when parameters change
            state.set(FetchState::Loading);
            gloo::console::debug!(&format!("Fetching {label}"));

            let request = fetcher(deps.clone());
            spawn_local(async move {
                let result = request.await;
                let applied = in_flight.settle(result, |result| match result {
                    Ok(data) => state.set(FetchState::Loaded(Rc::new(data))),
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to fetch {label}: {e}"));
                        state.set(FetchState::Failed(e.to_string()));
                    }
                });

                if !applied {
                    gloo::console::debug!(&format!("Discarded stale {label} response"));
                }
            });

            move || guard.invalidate()
        });
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |()| attempt.set(*attempt + 1))
    };

    FetchHandle {
        state: (*state).clone(),
        retry,
    }
}
