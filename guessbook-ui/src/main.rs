//! GuessBook Page
//!
//! Baby guess book built with Leptos (WASM).
//!
//! # Features
//!
//! - Guess form bound to the book's draft
//! - Sex distribution and averages charts
//! - Full listing of every guess
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly. The
//! guess list is kept in `window.localStorage`; there is no server.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
