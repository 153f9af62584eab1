//! Cosmogram
//!
//! Natal chart generator frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Animated starfield background
//! - Birth data form with city autocomplete
//! - Chart result cards with per-body detail views
//! - PDF report download
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Chart computation, geocoding and PDF rendering happen on
//! external HTTP services; this crate is the interaction layer.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
