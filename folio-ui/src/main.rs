//! Folio
//!
//! Portfolio site front end built with Leptos (WASM).
//!
//! # Features
//!
//! - Public pages: home, about, works, certifications, blog, contact
//! - Password-gated admin panel for adding and deleting content
//! - Dark/light theme and a mobile menu
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Content comes from the portfolio backend over HTTP, or from
//! the embedded defaults when no backend URL is configured.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
