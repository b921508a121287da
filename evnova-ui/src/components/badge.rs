//! Badges for hackathon status and themes

use evnova::model::HackathonStatus;
use leptos::*;

fn status_class(status: HackathonStatus) -> &'static str {
    match status {
        HackathonStatus::Open => "bg-emerald-500/90 text-white",
        HackathonStatus::Upcoming => "bg-blue-500/90 text-white",
        HackathonStatus::Ongoing => "bg-orange-500/90 text-white",
        HackathonStatus::Completed => "bg-gray-500/60 text-gray-200",
    }
}

#[component]
pub fn StatusBadge(status: HackathonStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block px-2.5 py-0.5 rounded-full text-xs font-semibold {}",
            status_class(status)
        )>
            {status.title()}
        </span>
    }
}

#[component]
pub fn ThemeBadge(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class="inline-block px-2 py-0.5 rounded-full text-xs border border-gray-300 dark:border-gray-600 text-gray-600 dark:text-gray-300">
            {label}
        </span>
    }
}
