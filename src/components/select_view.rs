//! Select View
//!
//! Landing page: route links plus the dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::HomeView;
use crate::routes::ROUTES;

#[component]
pub fn SelectView() -> impl IntoView {
    view! {
        <div class="select">
            <nav class="route-links">
                {ROUTES.iter()
                    .map(|route| view! { <A href=route.path>{route.name}</A> })
                    .collect_view()}
            </nav>
            <HomeView />
        </div>
    }
}
