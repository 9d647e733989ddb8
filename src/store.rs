//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;

use crate::api::empty_resources;

/// State owned by one mounted dashboard view
#[derive(Clone, Debug, Store)]
pub struct DashboardState {
    /// `Data.objects` of the last successful listing
    pub resources: Value,
    /// Side menu collapsed
    pub is_collapse: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            resources: empty_resources(),
            is_collapse: true,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Flip the side menu between collapsed and expanded
pub fn toggle_menu(store: &DashboardStore) {
    store.is_collapse().update(|collapsed| *collapsed = !*collapsed);
}
