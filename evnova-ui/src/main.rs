//! EVNOVA frontend
//!
//! Client-side rendered Leptos application for browsing hackathons,
//! registering teams and organising events. All data comes from the
//! `evnova` core's mock dataset; the only persistence is the browser's
//! local storage (session and theme).

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
