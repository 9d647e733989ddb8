//! Resource Loading
//!
//! One-shot fetch run when the dashboard mounts. A completion that lands
//! after the view is gone is dropped instead of written into its state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::api::{ApiError, ResourceSource};

/// Liveness flag of a mounted view, cleared from `on_cleanup`
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// What a load did to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// Response arrived after unmount
    Discarded,
}

/// Fetch the listing once and hand `Data.objects` to `apply`.
///
/// On failure `report` is called with the error and `apply` never runs, so
/// whatever the view held before stays in place.
pub async fn load_resources<S, A, R>(
    source: &S,
    guard: &MountGuard,
    apply: A,
    report: R,
) -> LoadOutcome
where
    S: ResourceSource,
    A: FnOnce(Value),
    R: FnOnce(&ApiError),
{
    match source.fetch_resources().await {
        Ok(data) => {
            if !guard.is_mounted() {
                log::debug!("[HOME] view unmounted, dropping resource listing");
                return LoadOutcome::Discarded;
            }
            log::debug!("[HOME] loaded {}", serde_json::to_string(&data).unwrap_or_default());
            apply(data.objects);
            LoadOutcome::Applied
        }
        Err(err) => {
            report(&err);
            LoadOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{decode_resources, empty_resources};
    use crate::models::ResourceData;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::{Cell, RefCell};

    enum FakeSource {
        Body(&'static str),
        Down,
    }

    impl ResourceSource for FakeSource {
        async fn fetch_resources(&self) -> Result<ResourceData, ApiError> {
            match self {
                FakeSource::Body(body) => decode_resources(body),
                FakeSource::Down => Err(ApiError::Network("connection refused".to_string())),
            }
        }
    }

    /// Mirrors how the dashboard wires the loader into its state
    fn run(source: &FakeSource, guard: &MountGuard, state: &RefCell<Value>, errors: &Cell<u32>) -> LoadOutcome {
        block_on(load_resources(
            source,
            guard,
            |objects| *state.borrow_mut() = objects,
            |_| errors.set(errors.get() + 1),
        ))
    }

    #[test]
    fn test_success_stores_objects() {
        let state = RefCell::new(empty_resources());
        let errors = Cell::new(0);
        let outcome = run(&FakeSource::Body(r#"{"Data":{"objects":[1,2,3]}}"#), &MountGuard::new(), &state, &errors);

        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(*state.borrow(), json!([1, 2, 3]));
        assert_eq!(errors.get(), 0);
    }

    #[test]
    fn test_rejection_keeps_initial_state_and_reports_once() {
        let state = RefCell::new(empty_resources());
        let errors = Cell::new(0);
        let outcome = run(&FakeSource::Down, &MountGuard::new(), &state, &errors);

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(*state.borrow(), json!({}));
        assert_eq!(errors.get(), 1);
    }

    #[test]
    fn test_bad_body_keeps_previous_state() {
        let state = RefCell::new(json!(["stale"]));
        let errors = Cell::new(0);
        let outcome = run(&FakeSource::Body(r#"{"Data":null}"#), &MountGuard::new(), &state, &errors);

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(*state.borrow(), json!(["stale"]));
        assert_eq!(errors.get(), 1);
    }

    #[test]
    fn test_completion_after_unmount_is_discarded() {
        let state = RefCell::new(empty_resources());
        let errors = Cell::new(0);
        let guard = MountGuard::new();
        guard.clone().unmount();
        let outcome = run(&FakeSource::Body(r#"{"Data":{"objects":[1]}}"#), &guard, &state, &errors);

        assert_eq!(outcome, LoadOutcome::Discarded);
        assert_eq!(*state.borrow(), json!({}));
        assert_eq!(errors.get(), 0);
    }

    #[test]
    fn test_guard_clones_share_flag() {
        let guard = MountGuard::new();
        let other = guard.clone();
        assert!(other.is_mounted());
        guard.unmount();
        assert!(!other.is_mounted());
    }
}
