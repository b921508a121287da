//! Toast Notification Component
//!
//! Renders the global toast queue.

use leptos::*;

use crate::state::{use_global, ToastMessage, ToastVariant};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global();

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2 w-80">
            <For
                each=move || state.toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: ToastMessage) -> impl IntoView {
    let state = use_global();
    let (icon, bg_class) = match toast.variant {
        ToastVariant::Success => ("✓", "bg-emerald-600"),
        ToastVariant::Error => ("✕", "bg-red-600"),
    };
    let id = toast.id;

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <div class="flex-1">
                <div class="text-sm font-semibold">{toast.title}</div>
                {toast.description.map(|d| view! { <div class="text-sm opacity-90">{d}</div> })}
            </div>
            <button class="text-white/70 hover:text-white" on:click=move |_| state.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
