//! Campus Dashboard
//!
//! Single-student academic dashboard built with Leptos (WASM).
//!
//! # Pages
//!
//! - Dashboard: headline metrics, progress rings, attendance chart
//! - Academics: CGPA trend and per-subject detail
//! - Schedule: filterable timeline and quick calendar
//! - Profile: student details
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Navigation lives in the URL fragment; charts are drawn by Chart.js, loaded
//! by `index.html` and reached through `js_sys::Reflect`.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route tracing events to the browser console
    tracing_wasm::set_as_global_default();

    mount_to_body(|| view! { <app::App /> });
}
