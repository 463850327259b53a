use std::cell::Cell;
use std::rc::Rc;

/// State of one view's remote data.
#[derive(Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(Rc<T>),
    Failed(String),
}

// Manual impl: cloning only bumps the Rc, so `T` need not be `Clone`.
impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Loaded(data) => Self::Loaded(Rc::clone(data)),
            Self::Failed(msg) => Self::Failed(msg.clone()),
        }
    }
}

impl<T> FetchState<T> {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Data to keep on screen. A loaded value replaces what `last` holds;
    /// while a refetch is pending or after it fails, `last` is kept.
    pub fn latest(&self, last: &mut Option<Rc<T>>) -> Option<Rc<T>> {
        if let Self::Loaded(data) = self {
            *last = Some(Rc::clone(data));
        }
        last.clone()
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Data-free summary, used by the status component
    pub fn phase(&self) -> FetchPhase {
        match self {
            Self::Loading => FetchPhase::Loading,
            Self::Loaded(_) => FetchPhase::Loaded,
            Self::Failed(msg) => FetchPhase::Failed(msg.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    Loading,
    Loaded,
    Failed(String),
}

/// Marks whether a spawned request still belongs to the current effect run.
///
/// Requests are never aborted. When the effect's dependencies change or the
/// view unmounts, the cleanup invalidates the guard and whatever the old
/// request returns is dropped instead of overwriting newer state.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    stale: Rc<Cell<bool>>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_current(&self) -> bool {
        !self.stale.get()
    }

    pub fn invalidate(&self) {
        self.stale.set(true);
    }

    /// Applies `result` through `apply` unless the guard has been invalidated.
    /// Returns whether it was applied.
    pub fn settle<T, F>(&self, result: T, apply: F) -> bool
    where
        F: FnOnce(T),
    {
        if self.is_current() {
            apply(result);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_fetch_state_accessors() {
        let loaded = FetchState::Loaded(Rc::new(vec![1, 2, 3]));
        assert_eq!(loaded.data().map(|d| d.len()), Some(3));
        assert!(!loaded.is_loading());
        assert_eq!(loaded.phase(), FetchPhase::Loaded);

        let failed: FetchState<Vec<i32>> = FetchState::Failed("500 Internal Server Error".into());
        assert!(failed.data().is_none());
        assert_eq!(failed.error(), Some("500 Internal Server Error"));

        let loading: FetchState<Vec<i32>> = FetchState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.phase(), FetchPhase::Loading);
    }

    #[test]
    fn test_latest_keeps_previous_data_during_refetch() {
        let mut last = None;
        let first = Rc::new(vec![1, 2]);

        let loading: FetchState<Vec<i32>> = FetchState::Loading;
        assert_eq!(loading.latest(&mut last), None);

        assert_eq!(FetchState::Loaded(first.clone()).latest(&mut last), Some(first.clone()));

        // Refetch after a parameter change
        assert_eq!(loading.latest(&mut last), Some(first.clone()));
        let failed: FetchState<Vec<i32>> = FetchState::Failed("503 Service Unavailable".into());
        assert_eq!(failed.latest(&mut last), Some(first));

        let second = Rc::new(vec![3]);
        assert_eq!(FetchState::Loaded(second.clone()).latest(&mut last), Some(second));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let state = RefCell::new(Vec::new());

        let first = FetchGuard::new();
        // Parameters change before the first response arrives
        first.invalidate();
        let second = FetchGuard::new();

        assert!(second.settle("second", |v| state.borrow_mut().push(v)));
        assert!(!first.settle("first", |v| state.borrow_mut().push(v)));

        assert_eq!(*state.borrow(), vec!["second"]);
    }

    #[test]
    fn test_guard_clones_share_state() {
        let guard = FetchGuard::new();
        let in_flight = guard.clone();
        assert!(in_flight.is_current());
        guard.invalidate();
        assert!(!in_flight.is_current());
    }
}
