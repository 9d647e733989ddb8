//! Navigation View
//!
//! Chart pages with the sticky header and its settings form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::FixedHeader;
use crate::fixed_header::NavigationState;

#[component]
pub fn NavigationView() -> impl IntoView {
    let NavigationState { fixed_status, props_data, form_data } = NavigationState::new();
    let (fixed_status, set_fixed_status) = signal(fixed_status);
    let (props_data, _) = signal(props_data);
    let (form_data, set_form_data) = signal(form_data);

    view! {
        <div class="navigation">
            <FixedHeader config=props_data set_status=set_fixed_status>
                <A href="/">"Dashboard"</A>
                <span class="header-title">"Charts"</span>
                <span class="header-state">
                    {move || if fixed_status.get().header_is_fixed { "fixed" } else { "" }}
                </span>
            </FixedHeader>

            <form class="header-settings" on:submit=|ev| ev.prevent_default()>
                <label>
                    "Threshold"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || form_data.get().threshold.to_string()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            set_form_data.update(|form| {
                                form.threshold = raw.trim().parse().unwrap_or(form.threshold);
                            });
                        }
                    />
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form_data.get().hide_scroll_up
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            set_form_data.update(|form| form.hide_scroll_up = checked);
                        }
                    />
                    "Hide on scroll up"
                </label>
            </form>

            <section class="charts-content">
                <h2>"Charts"</h2>
            </section>
        </div>
    }
}
