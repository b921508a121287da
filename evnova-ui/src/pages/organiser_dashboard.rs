//! Organiser Dashboard Page

use evnova::dashboard::{self, format_count};
use evnova::model::OrgHackathonStatus;
use evnova::navigation::{hackathon_path, CREATE_HACKATHON};
use leptos::*;
use leptos_router::*;

use crate::components::StatCard;

const DOMAIN_COLOURS: [&str; 5] = [
    "bg-purple-500",
    "bg-blue-500",
    "bg-emerald-500",
    "bg-orange-500",
    "bg-pink-500",
];

fn org_status_class(status: OrgHackathonStatus) -> &'static str {
    match status {
        OrgHackathonStatus::Draft => "bg-gray-500/60 text-gray-200",
        OrgHackathonStatus::Open => "bg-emerald-500/90 text-white",
        OrgHackathonStatus::Ongoing => "bg-orange-500/90 text-white",
        OrgHackathonStatus::Completed => "bg-blue-500/90 text-white",
    }
}

/// Bar height as a percentage of the tallest bar
fn bar_height(value: u32, peak: u32) -> String {
    let pct = if peak == 0 { 0 } else { value * 100 / peak };
    format!("height: {pct}%")
}

#[component]
pub fn OrganiserDashboard() -> impl IntoView {
    let data = dashboard::OrganiserDashboard::mock();
    let peak = data.trend_peak();

    let stats = data
        .stats
        .iter()
        .map(|s| {
            view! {
                <StatCard
                    icon=s.icon.glyph()
                    value=format_count(s.value)
                    label=s.label.clone()
                    change=s.change.clone()
                />
            }
        })
        .collect_view();

    let bars = data
        .trend
        .iter()
        .map(|p| {
            view! {
                <div class="flex flex-1 flex-col items-center gap-2">
                    <div class="flex h-48 w-full items-end justify-center gap-1">
                        <div
                            class="w-3 rounded-t bg-purple-500"
                            style=bar_height(p.participants, peak)
                            title=format!("Participants: {}", p.participants)
                        />
                        <div
                            class="w-3 rounded-t bg-blue-500"
                            style=bar_height(p.teams, peak)
                            title=format!("Teams: {}", p.teams)
                        />
                    </div>
                    <span class="text-xs text-gray-500 dark:text-gray-400">{p.month.clone()}</span>
                </div>
            }
        })
        .collect_view();

    let domains = data
        .domains
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let colour = DOMAIN_COLOURS[i % DOMAIN_COLOURS.len()];
            view! {
                <div class="space-y-1">
                    <div class="flex justify-between text-sm">
                        <span class="flex items-center gap-2">
                            <span class=format!("inline-block h-2.5 w-2.5 rounded-full {colour}") />
                            {d.name.clone()}
                        </span>
                        <span class="text-gray-500 dark:text-gray-400">{format!("{}%", d.percent)}</span>
                    </div>
                    <div class="h-2 rounded-full bg-gray-100 dark:bg-gray-800">
                        <div class=format!("h-2 rounded-full {colour}") style=format!("width: {}%", d.percent) />
                    </div>
                </div>
            }
        })
        .collect_view();

    let rows = data
        .hackathons
        .iter()
        .map(|h| {
            view! {
                <tr class="border-b border-gray-200 dark:border-gray-800 last:border-0">
                    <td class="py-3 font-medium">{h.title.clone()}</td>
                    <td class="py-3">
                        <span class=format!(
                            "inline-block px-2.5 py-0.5 rounded-full text-xs font-semibold capitalize {}",
                            org_status_class(h.status)
                        )>
                            {h.status.to_string()}
                        </span>
                    </td>
                    <td class="hidden py-3 sm:table-cell">{format_count(h.participants)}</td>
                    <td class="hidden py-3 sm:table-cell">{format_count(h.teams)}</td>
                    <td class="hidden py-3 text-gray-500 dark:text-gray-400 md:table-cell">{h.date_range()}</td>
                    <td class="py-3 text-right">
                        <A href=hackathon_path(&h.id) class="text-sm text-indigo-400 hover:text-indigo-300">
                            "View"
                        </A>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="container mx-auto px-4 py-12">
            <div class="mb-8 flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Organiser Dashboard"</h1>
                    <p class="text-gray-500 dark:text-gray-400">"Manage your hackathons and track performance"</p>
                </div>
                <A
                    href=CREATE_HACKATHON
                    class="px-5 py-2.5 rounded-lg bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-semibold"
                >
                    "+ Create Hackathon"
                </A>
            </div>

            <div class="mb-8 grid gap-4 sm:grid-cols-2 lg:grid-cols-4">{stats}</div>

            <div class="mb-8 grid gap-6 lg:grid-cols-3">
                <div class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-6 lg:col-span-2">
                    <h2 class="mb-4 text-lg font-semibold">"Participation Trend"</h2>
                    <div class="flex items-end gap-2">{bars}</div>
                    <div class="mt-4 flex gap-4 text-xs text-gray-500 dark:text-gray-400">
                        <span class="flex items-center gap-1">
                            <span class="inline-block h-2.5 w-2.5 rounded bg-purple-500" />
                            "Participants"
                        </span>
                        <span class="flex items-center gap-1">
                            <span class="inline-block h-2.5 w-2.5 rounded bg-blue-500" />
                            "Teams"
                        </span>
                    </div>
                </div>
                <div class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-6">
                    <h2 class="mb-4 text-lg font-semibold">"Domain Distribution"</h2>
                    <div class="space-y-4">{domains}</div>
                </div>
            </div>

            <div class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-6">
                <h2 class="mb-4 text-lg font-semibold">"Your Hackathons"</h2>
                <div class="overflow-x-auto">
                    <table class="w-full text-left text-sm">
                        <thead>
                            <tr class="border-b border-gray-200 dark:border-gray-800 text-gray-500 dark:text-gray-400">
                                <th class="pb-3 font-medium">"Title"</th>
                                <th class="pb-3 font-medium">"Status"</th>
                                <th class="hidden pb-3 font-medium sm:table-cell">"Participants"</th>
                                <th class="hidden pb-3 font-medium sm:table-cell">"Teams"</th>
                                <th class="hidden pb-3 font-medium md:table-cell">"Dates"</th>
                                <th class="pb-3 text-right font-medium">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
