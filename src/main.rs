//! Helm Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod fixed_header;
mod loader;
mod models;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());
    mount_to_body(App);
}
