//! Home View
//!
//! Operator dashboard: loads the resource listing once per mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpResourceSource;
use crate::components::ResourceList;
use crate::loader::{load_resources, MountGuard};
use crate::store::{toggle_menu, DashboardState, DashboardStateStoreFields, DashboardStore};

#[component]
pub fn HomeView() -> impl IntoView {
    let state: DashboardStore = Store::new(DashboardState::new());

    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.unmount()
    });

    spawn_local(async move {
        let source = HttpResourceSource::default();
        load_resources(
            &source,
            &guard,
            move |objects| state.resources().update(|resources| *resources = objects),
            |err| log::error!("[HOME] {}", err),
        )
        .await;
        log::debug!("[HOME] update");
    });

    let menu_class = move || {
        if state.is_collapse().get() { "side-menu collapsed" } else { "side-menu" }
    };

    view! {
        <div class="dashboard">
            <aside class=menu_class>
                <button
                    class="side-menu-toggle"
                    on:click=move |_| toggle_menu(&state)
                >
                    {move || if state.is_collapse().get() { "»" } else { "«" }}
                </button>
                <nav class="side-menu-items">
                    <span class="side-menu-item">"Releases"</span>
                    <span class="side-menu-item">"Repositories"</span>
                    <span class="side-menu-item">"Charts"</span>
                </nav>
            </aside>
            <section class="dashboard-content">
                <h2>"Resources"</h2>
                <ResourceList resources=Signal::derive(move || state.resources().get()) />
            </section>
        </div>
    }
}
