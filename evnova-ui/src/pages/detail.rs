//! Hackathon Detail Page

use evnova::catalogue::Catalogue;
use evnova::dashboard::format_count;
use evnova::model::Hackathon;
use evnova::navigation::{register_target, HACKATHONS};
use leptos::*;
use leptos_router::*;

use crate::components::{StatusBadge, ThemeBadge};
use crate::state::use_auth;

/// Looks up `:id` in the mock catalogue
pub(crate) fn use_hackathon() -> Memo<Option<Hackathon>> {
    let params = use_params_map();
    create_memo(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        Catalogue::mock().get(&id).ok().cloned()
    })
}

#[component]
pub(crate) fn NotFoundNotice() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-24 text-center space-y-4">
            <p class="text-xl text-gray-500 dark:text-gray-400">"Hackathon not found."</p>
            <A href=HACKATHONS class="text-indigo-400 hover:underline">"Browse hackathons"</A>
        </div>
    }
}

#[component]
pub fn HackathonDetail() -> impl IntoView {
    let hackathon = use_hackathon();

    move || match hackathon.get() {
        Some(h) => view! { <DetailView hackathon=h /> }.into_view(),
        None => view! { <NotFoundNotice /> }.into_view(),
    }
}

#[component]
fn DetailView(hackathon: Hackathon) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let id = hackathon.id.clone();
    let on_register = move |_: ev::MouseEvent| {
        let target = register_target(auth.user().as_ref(), &id);
        navigate(&target, Default::default());
    };

    let h = hackathon;
    let details = vec![
        ("Start", h.start_date.format("%b %-d, %Y").to_string()),
        ("End", h.end_date.format("%b %-d, %Y").to_string()),
        ("Registration Deadline", h.registration_deadline.format("%b %-d, %Y").to_string()),
        ("Max Team Size", format!("{} members", h.max_team_size)),
    ];

    view! {
        <div class="container mx-auto px-4 py-12">
            <A href=HACKATHONS class="inline-block mb-6 text-sm text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white">
                "← Back to hackathons"
            </A>

            <div class=format!("rounded-2xl p-8 md:p-12 mb-8 text-white bg-gradient-to-br {}", h.banner_gradient)>
                <div class="flex flex-wrap gap-2 mb-4">
                    <StatusBadge status=h.status />
                    <span class="px-2.5 py-0.5 rounded-full text-xs bg-black/20">{h.mode.label()}</span>
                </div>
                <h1 class="text-3xl md:text-5xl font-bold mb-2">{h.title.clone()}</h1>
                <p class="text-lg max-w-2xl text-white/80">{h.description.clone()}</p>
                <p class="text-sm mt-4 text-white/60">{format!("Organised by {}", h.organiser)}</p>
            </div>

            <div class="grid md:grid-cols-3 gap-8">
                <div class="md:col-span-2 space-y-6">
                    <section class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-xl p-6">
                        <h2 class="text-lg font-semibold mb-4">"Details"</h2>
                        <dl class="grid sm:grid-cols-2 gap-4">
                            {details
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <div>
                                        <dt class="text-sm text-gray-500 dark:text-gray-400">{label}</dt>
                                        <dd class="font-medium">{value}</dd>
                                    </div>
                                })
                                .collect_view()}
                            {h.venue.clone().map(|venue| view! {
                                <div>
                                    <dt class="text-sm text-gray-500 dark:text-gray-400">"Venue"</dt>
                                    <dd class="font-medium">{venue}</dd>
                                </div>
                            })}
                        </dl>
                    </section>

                    <section class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-xl p-6">
                        <h2 class="text-lg font-semibold mb-4">"Themes"</h2>
                        <div class="flex flex-wrap gap-2">
                            {h.themes.iter().map(|t| view! { <ThemeBadge label=t.clone() /> }).collect_view()}
                        </div>
                    </section>
                </div>

                <aside class="space-y-6">
                    <section class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-xl p-6 space-y-4">
                        <div>
                            <div class="text-sm text-gray-500 dark:text-gray-400">"Prize Pool"</div>
                            <div class="text-3xl font-bold text-indigo-400">{h.prize_pool.clone()}</div>
                        </div>
                        <div class="grid grid-cols-2 gap-4 text-center">
                            <div>
                                <div class="text-2xl font-bold">{format_count(h.participants)}</div>
                                <div class="text-xs text-gray-500 dark:text-gray-400">"Participants"</div>
                            </div>
                            <div>
                                <div class="text-2xl font-bold">{format_count(h.teams)}</div>
                                <div class="text-xs text-gray-500 dark:text-gray-400">"Teams"</div>
                            </div>
                        </div>
                        {h.accepts_registrations().then(|| view! {
                            <button
                                class="w-full bg-indigo-600 text-white hover:bg-indigo-700 rounded-lg py-3 font-semibold"
                                on:click=on_register
                            >
                                "Register Now"
                            </button>
                        })}
                    </section>
                </aside>
            </div>
        </div>
    }
}
