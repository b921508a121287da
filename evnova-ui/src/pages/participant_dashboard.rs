//! Participant Dashboard Page
//!
//! Registrations and team requests for the signed-in participant. Request
//! answers live in page state only.

use evnova::dashboard::{self, greeting};
use evnova::model::{RegistrationStatus, TeamRequest, TeamRequestStatus};
use evnova::navigation::{hackathon_path, HACKATHONS};
use leptos::*;
use leptos_router::*;

use crate::components::{StatCard, ThemeBadge};
use crate::state::{use_auth, use_global};

const STAT_ICONS: [&str; 4] = ["📅", "📄", "🏆", "🔔"];

fn registration_class(status: RegistrationStatus) -> &'static str {
    match status {
        RegistrationStatus::Registered => "bg-blue-500/90 text-white",
        RegistrationStatus::Submitted => "bg-purple-500/90 text-white",
        RegistrationStatus::Shortlisted => "bg-orange-500/90 text-white",
        RegistrationStatus::Winner => "bg-emerald-500/90 text-white",
    }
}

#[component]
pub fn ParticipantDashboard() -> impl IntoView {
    let auth = use_auth();
    let board = create_rw_signal(dashboard::ParticipantDashboard::mock());

    let title = move || greeting(auth.user().as_ref());

    let stats = board.with_untracked(|b| {
        b.stat_cards()
            .into_iter()
            .zip(STAT_ICONS)
            .map(|(card, icon)| view! { <StatCard icon=icon value=card.value label=card.label /> })
            .collect_view()
    });

    let registrations = board.with_untracked(|b| {
        b.registrations
            .iter()
            .map(|r| {
                let repo = r.has_repo().then(|| {
                    view! {
                        <a
                            href=r.github_repo.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-3 py-1 rounded-lg border border-gray-300 dark:border-gray-700 text-xs hover:bg-gray-100 dark:hover:bg-gray-800"
                        >
                            "↗ Repo"
                        </a>
                    }
                });
                view! {
                    <div class="flex flex-col gap-3 rounded-xl border border-gray-200 dark:border-gray-800 p-4 sm:flex-row sm:items-center sm:justify-between">
                        <div>
                            <h3 class="font-semibold">{r.hackathon_title.clone()}</h3>
                            <p class="text-sm text-gray-500 dark:text-gray-400">{r.team_summary()}</p>
                        </div>
                        <div class="flex items-center gap-2">
                            <span class=format!(
                                "inline-block px-2.5 py-0.5 rounded-full text-xs font-semibold capitalize {}",
                                registration_class(r.status)
                            )>
                                {r.status.to_string()}
                            </span>
                            {repo}
                            <A href=hackathon_path(&r.hackathon_id) class="px-3 py-1 text-xs text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white">
                                "View"
                            </A>
                        </div>
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <div class="container mx-auto px-4 py-12">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{title}</h1>
                <p class="text-gray-500 dark:text-gray-400">"Here's your hackathon activity at a glance."</p>
            </div>

            <div class="mb-8 grid gap-4 sm:grid-cols-2 lg:grid-cols-4">{stats}</div>

            <div class="grid gap-6 lg:grid-cols-3">
                <div class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-6 lg:col-span-2">
                    <div class="mb-4 flex items-center justify-between">
                        <h2 class="text-xl font-bold">"My Hackathons"</h2>
                        <A href=HACKATHONS class="text-sm text-indigo-400 hover:text-indigo-300">"Browse more"</A>
                    </div>
                    <div class="space-y-3">{registrations}</div>
                </div>

                <div class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-6">
                    <h2 class="mb-4 text-xl font-bold">"Team Requests"</h2>
                    <div class="space-y-4">
                        <For
                            each=move || board.with(|b| b.team_requests.clone())
                            key=|r| (r.id.clone(), r.status)
                            children=move |request| view! { <RequestCard request=request board=board /> }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RequestCard(
    request: TeamRequest,
    board: RwSignal<dashboard::ParticipantDashboard>,
) -> impl IntoView {
    let global = use_global();
    let id = store_value(request.id.clone());
    let from = store_value(request.from.clone());

    let respond = move |accept: bool| {
        let changed = board.try_update(|b| b.respond(&id.get_value(), accept)).unwrap_or(false);
        if changed {
            let title = if accept {
                format!("Joined {}'s team", from.get_value())
            } else {
                format!("Declined {}'s request", from.get_value())
            };
            global.show_success(&title, None);
        }
    };

    let footer = match request.status {
        TeamRequestStatus::Pending => view! {
            <div class="flex gap-2">
                <button
                    class="flex-1 rounded-lg bg-emerald-600 py-1.5 text-sm font-semibold hover:bg-emerald-700"
                    on:click=move |_| respond(true)
                >
                    "✓ Accept"
                </button>
                <button
                    class="flex-1 rounded-lg border border-gray-300 dark:border-gray-700 py-1.5 text-sm hover:bg-gray-100 dark:hover:bg-gray-800"
                    on:click=move |_| respond(false)
                >
                    "✕ Decline"
                </button>
            </div>
        }
        .into_view(),
        TeamRequestStatus::Accepted => {
            view! { <p class="text-sm text-emerald-400">"Accepted"</p> }.into_view()
        }
        TeamRequestStatus::Rejected => {
            view! { <p class="text-sm text-gray-500">"Declined"</p> }.into_view()
        }
    };

    view! {
        <div class="space-y-3 rounded-xl border border-gray-200 dark:border-gray-800 p-4">
            <div class="flex items-center gap-3">
                <div class="flex h-9 w-9 items-center justify-center rounded-full bg-gradient-to-br from-indigo-500 to-purple-500 text-sm font-bold">
                    {request.avatar}
                </div>
                <span class="font-semibold">{request.from}</span>
            </div>
            <p class="text-sm text-gray-500 dark:text-gray-400">{request.message}</p>
            <div class="flex flex-wrap gap-1">
                {request.skills.into_iter().map(|s| view! { <ThemeBadge label=s /> }).collect_view()}
            </div>
            {footer}
        </div>
    }
}
