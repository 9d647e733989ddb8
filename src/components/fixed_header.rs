//! Fixed Header Component
//!
//! Page header that sticks once the window scrolls past the threshold.

use leptos::ev;
use leptos::prelude::*;

use crate::fixed_header::HeaderScroll;
use crate::models::{FixedHeaderConfig, FixedStatus};

#[component]
pub fn FixedHeader(
    config: ReadSignal<FixedHeaderConfig>,
    set_status: WriteSignal<FixedStatus>,
    children: Children,
) -> impl IntoView {
    let (scroll, set_scroll) = signal(HeaderScroll::default());

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        let next = config.with_untracked(|config| {
            let mut next = scroll.get_untracked();
            next.on_scroll(config, y);
            next
        });
        if next.is_fixed != scroll.get_untracked().is_fixed {
            set_status.set(FixedStatus { header_is_fixed: next.is_fixed });
        }
        set_scroll.set(next);
    });
    on_cleanup(move || handle.remove());

    let class = move || {
        let state = scroll.get();
        let mut class = config.with(|config| config.class_for(state.is_fixed));
        if state.hidden {
            class.push_str(" is-hidden");
        }
        class
    };

    view! {
        <header class=class>
            {children()}
        </header>
    }
}
