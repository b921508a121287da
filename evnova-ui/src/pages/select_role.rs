//! Select Role Page
//!
//! Bounces to /login when signed out and to / when a role is already set.

use evnova::model::UserRole;
use evnova::navigation::{after_role_selected, select_role_redirect};
use leptos::*;
use leptos_router::*;

use crate::state::{use_auth, use_global};

#[component]
pub fn SelectRole() -> impl IntoView {
    let auth = use_auth();
    let global = use_global();
    let navigate = use_navigate();

    let redirect_nav = navigate.clone();
    create_effect(move |_| {
        if let Some(target) = select_role_redirect(auth.user().as_ref()) {
            redirect_nav(target, Default::default());
        }
    });

    let choose = move |role: UserRole| match auth.select_role(role) {
        Ok(_) => {
            global.show_success(&role.confirmation(), Some("Redirecting to your dashboard..."));
            navigate(after_role_selected(role), Default::default());
        }
        Err(e) => global.show_error(&e.to_string(), None),
    };

    view! {
        <div class="flex min-h-[80vh] items-center justify-center px-4">
            <div class="w-full max-w-2xl">
                <h1 class="mb-2 text-center text-3xl font-bold">"Choose your role"</h1>
                <p class="mb-8 text-center text-gray-500 dark:text-gray-400">"How would you like to use EVNOVA?"</p>
                <div class="grid gap-6 sm:grid-cols-2">
                    {UserRole::all()
                        .iter()
                        .map(|&role| {
                            let choose = choose.clone();
                            let icon = match role {
                                UserRole::Organiser => "🚀",
                                UserRole::Participant => "👥",
                            };
                            view! {
                                <button
                                    class="text-left bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-6
                                           hover:border-indigo-500/60 hover:shadow-lg transition-all"
                                    on:click=move |_| choose(role)
                                >
                                    <div class="text-3xl mb-4">{icon}</div>
                                    <h2 class="text-xl font-semibold">{role.title()}</h2>
                                    <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">{role.description()}</p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
