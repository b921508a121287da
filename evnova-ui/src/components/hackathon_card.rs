//! Hackathon Card Component
//!
//! Catalogue tile used on the landing and browse pages.

use evnova::dashboard::format_count;
use evnova::model::Hackathon;
use evnova::navigation::hackathon_path;
use leptos::*;
use leptos_router::*;

use super::badge::{StatusBadge, ThemeBadge};

#[component]
pub fn HackathonCard(
    hackathon: Hackathon,
    /// Compact tiles (landing page) show fewer themes and no dates
    #[prop(default = false)]
    compact: bool,
) -> impl IntoView {
    let theme_count = if compact { 2 } else { 3 };
    let themes = hackathon
        .themes
        .iter()
        .take(theme_count)
        .map(|t| view! { <ThemeBadge label=t.clone() /> })
        .collect_view();

    view! {
        <A
            href=hackathon_path(&hackathon.id)
            class="group block overflow-hidden rounded-xl border border-gray-300 dark:border-gray-700 bg-gray-100 dark:bg-gray-800
                   hover:border-indigo-500/60 hover:shadow-lg transition-all"
        >
            <div class=format!("h-32 p-4 bg-gradient-to-br {}", hackathon.banner_gradient)>
                <StatusBadge status=hackathon.status />
            </div>
            <div class="p-4 space-y-3">
                <h3 class="font-semibold leading-tight group-hover:text-indigo-300">
                    {hackathon.title.clone()}
                </h3>
                <p class="text-sm text-gray-500 dark:text-gray-400 line-clamp-2">{hackathon.description.clone()}</p>
                <div class="flex flex-wrap gap-1">{themes}</div>
                {(!compact).then(|| view! {
                    <div class="flex items-center gap-3 text-xs text-gray-500 dark:text-gray-400">
                        <span>{hackathon.mode.label()}</span>
                        <span>{format!("📅 {}", hackathon.short_start_date())}</span>
                    </div>
                })}
                <div class="flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
                    <span>{format!("{} joined", format_count(hackathon.participants))}</span>
                    <span class="font-semibold text-indigo-400">{hackathon.prize_pool.clone()}</span>
                </div>
            </div>
        </A>
    }
}
