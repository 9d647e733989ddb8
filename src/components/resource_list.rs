//! Resource List Component
//!
//! Renders the stored listing payload as-is.

use leptos::prelude::*;
use serde_json::Value;

/// Display entries of a listing. Arrays get one row per element.
pub fn resource_entries(resources: &Value) -> Vec<String> {
    match resources {
        Value::Array(items) => items.iter().map(pretty).collect(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        other => vec![pretty(other)],
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[component]
pub fn ResourceList(#[prop(into)] resources: Signal<Value>) -> impl IntoView {
    let entries = move || resources.with(resource_entries);

    view! {
        <div class="resource-list">
            {move || {
                let rows = entries();
                if rows.is_empty() {
                    view! { <p class="resource-empty">"No resources"</p> }.into_any()
                } else {
                    view! {
                        <ul>
                            {rows.into_iter()
                                .map(|row| view! { <li class="resource-item"><pre>{row}</pre></li> })
                                .collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}
