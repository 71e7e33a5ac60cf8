#![allow(warnings)]
//! Todo Cards Frontend Entry Point

mod app;
mod browser_storage;
mod components;
mod config;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(config::LOG_LEVEL) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
