//! SocialAuto Dashboard
//!
//! Social media scheduling dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing, sign-in and legal pages
//! - Session-gated dashboard with user stats
//! - Post composition
//! - Team chat over the user directory
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the SocialAuto API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
