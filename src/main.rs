//! Todos Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod edit;
mod filter;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("[APP] Starting todos");
    mount_to_body(App);
}
