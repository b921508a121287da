//! Navigation Component
//!
//! Header bar: brand, links (plus Dashboard for organisers), theme toggle
//! and either the user chip or the Log in / Sign Up buttons. The chip
//! leads to the user's own dashboard.

use evnova::navigation::{after_logout, nav_links, user_chip_target, LOGIN, SIGNUP};
use leptos::*;
use leptos_router::*;

use crate::state::{use_auth, use_global, Theme};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_auth();
    let global = use_global();
    let navigate = use_navigate();

    let logout = move |_: ev::MouseEvent| {
        auth.logout();
        navigate(after_logout(), Default::default());
    };

    view! {
        <nav class="sticky top-0 z-40 bg-white/80 dark:bg-gray-900/80 backdrop-blur border-b border-gray-200 dark:border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="text-xl font-bold bg-gradient-to-r from-indigo-400 to-purple-400 bg-clip-text text-transparent">
                        "EVNOVA"
                    </A>

                    <div class="hidden md:flex items-center space-x-1">
                        {move || {
                            nav_links(auth.user().as_ref())
                                .into_iter()
                                .map(|link| view! { <NavLink href=link.href label=link.label /> })
                                .collect_view()
                        }}
                    </div>

                    <div class="flex items-center space-x-3">
                        <button
                            title="Toggle theme"
                            class="p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                            on:click=move |_| global.toggle_theme()
                        >
                            {move || match global.theme.get() {
                                Theme::Dark => "☀️",
                                Theme::Light => "🌙",
                            }}
                        </button>

                        {move || match auth.user() {
                            Some(user) => {
                                let logout = logout.clone();
                                let role = user.role.map(|r| r.to_string()).unwrap_or_default();
                                let chip = view! {
                                    <span class="w-8 h-8 rounded-full bg-indigo-600 text-white flex items-center justify-center font-semibold">
                                        {user.initial().to_string()}
                                    </span>
                                    <div class="hidden sm:block leading-tight">
                                        <div class="text-sm font-medium">{user.first_name().to_string()}</div>
                                        <div class="text-xs text-gray-500 dark:text-gray-400 capitalize">{role}</div>
                                    </div>
                                };
                                let chip = match user_chip_target(Some(&user)) {
                                    Some(href) => view! {
                                        <A href=href class="flex items-center space-x-2">{chip}</A>
                                    }
                                    .into_view(),
                                    None => view! { <div class="flex items-center space-x-2">{chip}</div> }.into_view(),
                                };
                                view! {
                                    <div class="flex items-center space-x-2">
                                        {chip}
                                        <button
                                            class="px-3 py-1.5 text-sm rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                                            on:click=logout
                                        >
                                            "Log out"
                                        </button>
                                    </div>
                                }
                                .into_view()
                            }
                            None => view! {
                                <div class="flex items-center space-x-2">
                                    <A href=LOGIN class="px-3 py-1.5 text-sm rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800">
                                        "Log in"
                                    </A>
                                    <A href=SIGNUP class="px-3 py-1.5 text-sm rounded-lg bg-indigo-600 text-white hover:bg-indigo-700 font-medium">
                                        "Sign Up"
                                    </A>
                                </div>
                            }
                            .into_view(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: String, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
            active_class="bg-gray-100 dark:bg-gray-800 text-gray-900 dark:text-white"
        >
            {label}
        </A>
    }
}
