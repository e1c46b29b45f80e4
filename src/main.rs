//! Picto Finder Frontend Entry Point

mod app;
mod catalog;
mod components;
mod context;
mod export;
mod models;
mod pager;
mod progress;
mod state;
mod storage;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
