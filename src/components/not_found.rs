//! Not Found View
//!
//! Fallback for paths outside the route table.

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <div class="not-found">"404 - Not Found"</div> }
}
