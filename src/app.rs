//! Dashboard App
//!
//! Root component: router mounted under the history base, one route per
//! entry of the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{NavigationView, NotFound, SelectView};
use crate::config;
use crate::routes::{self, View};

/// Paths given to the router, in `ROUTES` order
const ROUTED_PATHS: [&str; 2] = ["/", "/charts/sublink"];

#[component]
pub fn App() -> impl IntoView {
    let base = config::base_path();
    log::info!("[ROUTER] history {}", if base.is_empty() { "/" } else { base.as_str() });

    view! {
        <Router base=base>
            <main class="app-layout">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| route_view(ROUTED_PATHS[0]) />
                    <Route path=path!("/charts/sublink") view=|| route_view(ROUTED_PATHS[1]) />
                </Routes>
            </main>
        </Router>
    }
}

/// View the route table registers for `path`
fn route_view(path: &'static str) -> AnyView {
    match routes::resolve(path).map(|route| route.view) {
        Some(View::Select) => view! { <SelectView /> }.into_any(),
        Some(View::Navigation) => view! { <NavigationView /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ROUTES;

    #[test]
    fn test_every_table_entry_is_routed() {
        assert_eq!(ROUTED_PATHS.len(), ROUTES.len());
        for (path, route) in ROUTED_PATHS.iter().zip(ROUTES) {
            assert_eq!(routes::resolve(path), Some(route));
        }
    }
}
