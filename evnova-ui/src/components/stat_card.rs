//! Stat Card Component

use leptos::*;

/// Icon, big number, label and an optional trend note
#[component]
pub fn StatCard(
    #[prop(into)] icon: String,
    #[prop(into)] value: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] change: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-100 dark:bg-gray-800 rounded-xl p-5 border border-gray-300 dark:border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-sm text-gray-500 dark:text-gray-400">{label}</span>
                <span class="text-xl">{icon}</span>
            </div>
            <div class="text-3xl font-bold mt-2">{value}</div>
            {change.map(|c| view! { <div class="mt-1 text-xs text-emerald-400">{c}</div> })}
        </div>
    }
}
