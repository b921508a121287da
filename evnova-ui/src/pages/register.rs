//! Register Team Page
//!
//! Signed-out visitors are sent to /login. On submit a receipt screen
//! replaces the form; nothing is stored.

use evnova::model::{Hackathon, Registration};
use evnova::navigation::{hackathon_path, HACKATHONS, LOGIN};
use evnova::registration::{success_message, TeamRegistrationForm};
use leptos::*;
use leptos_router::*;

use super::detail::{use_hackathon, NotFoundNotice};
use super::PRIMARY_BUTTON;
use crate::state::{use_auth, use_global};

#[component]
pub fn RegisterTeam() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let hackathon = use_hackathon();

    create_effect(move |_| {
        if !auth.is_authenticated() {
            navigate(LOGIN, Default::default());
        }
    });

    move || match hackathon.get() {
        Some(h) if h.accepts_registrations() => view! { <RegisterForm hackathon=h /> }.into_view(),
        Some(h) => view! {
            <div class="container mx-auto px-4 py-24 text-center space-y-4">
                <p class="text-xl text-gray-500 dark:text-gray-400">"Registration is closed for this hackathon."</p>
                <A href=hackathon_path(&h.id) class="text-indigo-400 hover:underline">"Back to details"</A>
            </div>
        }
        .into_view(),
        None => view! { <NotFoundNotice /> }.into_view(),
    }
}

/// Text input with an Add button; Enter also adds
#[component]
fn AddInput<F>(
    #[prop(into)] label: String,
    placeholder: &'static str,
    on_add: F,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView
where
    F: Fn(String) -> bool + Copy + 'static,
{
    let input = create_rw_signal(String::new());
    let submit = move || {
        if on_add(input.get()) {
            input.set(String::new());
        }
    };

    view! {
        <div>
            <span class="block text-sm text-gray-500 dark:text-gray-400 mb-1.5">{label}</span>
            <div class="flex gap-2">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    prop:disabled=move || disabled.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                    class="flex-1 bg-gray-100 dark:bg-gray-800 rounded-lg px-4 py-2.5 border border-gray-300 dark:border-gray-700 focus:border-indigo-500 focus:outline-none"
                />
                <button
                    type="button"
                    disabled=move || disabled.get()
                    class="px-4 rounded-lg bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 disabled:opacity-50"
                    on:click=move |_| submit()
                >
                    "Add"
                </button>
            </div>
        </div>
    }
}

#[component]
fn RegisterForm(hackathon: Hackathon) -> impl IntoView {
    let global = use_global();
    let hackathon = store_value(hackathon);
    let form = create_rw_signal(TeamRegistrationForm::new());
    let receipt = create_rw_signal(None::<Registration>);

    let text_field = move |label: &'static str, placeholder: &'static str, get: fn(&TeamRegistrationForm) -> String, set: fn(&mut TeamRegistrationForm, String)| {
        view! {
            <label class="block">
                <span class="block text-sm text-gray-500 dark:text-gray-400 mb-1.5">{label}</span>
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                    class="w-full bg-gray-100 dark:bg-gray-800 rounded-lg px-4 py-2.5 border border-gray-300 dark:border-gray-700 focus:border-indigo-500 focus:outline-none"
                />
            </label>
        }
    };

    let add_member = move |name: String| {
        let result = hackathon.with_value(|h| form.try_update(|f| f.add_member(h, &name)));
        match result {
            Some(Ok(())) => true,
            Some(Err(e)) => {
                global.show_error(&e.to_string(), None);
                false
            }
            None => false,
        }
    };

    let add_skill = move |skill: String| match form.try_update(|f| f.add_skill(&skill)) {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            global.show_error(&e.to_string(), None);
            false
        }
        None => false,
    };

    let team_full = Signal::derive(move || {
        hackathon.with_value(|h| form.with(|f| !f.can_add_member(h)))
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = hackathon.with_value(|h| form.with(|f| f.submit(h)));
        match result {
            Ok(r) => {
                global.show_success("Registration successful!", Some(&success_message(&r)));
                receipt.set(Some(r));
            }
            Err(e) => global.show_error(&e.to_string(), None),
        }
    };

    let (title, max_invitees) = hackathon.with_value(|h| (h.title.clone(), h.max_invitees()));

    view! {
        <div class="container mx-auto px-4 py-12 max-w-2xl">
            {move || match receipt.get() {
                Some(r) => view! {
                    <div class="text-center space-y-4 py-16">
                        <div class="text-5xl">"🎉"</div>
                        <h1 class="text-3xl font-bold">"You're In!"</h1>
                        <p class="text-gray-500 dark:text-gray-400">
                            {format!("Team {} is registered for {}", r.team_name, r.hackathon_title)}
                        </p>
                        <div class="flex justify-center gap-3 pt-4">
                            <A href=evnova::navigation::PARTICIPANT_DASHBOARD class="px-5 py-2.5 rounded-lg bg-indigo-600 text-white hover:bg-indigo-700">
                                "Dashboard"
                            </A>
                            <A href=HACKATHONS class="px-5 py-2.5 rounded-lg border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-gray-800">
                                "Browse More"
                            </A>
                        </div>
                    </div>
                }
                .into_view(),
                None => view! {
                    <h1 class="text-3xl font-bold">"Register your team"</h1>
                    <p class="mt-1 mb-8 text-gray-500 dark:text-gray-400">{title.clone()}</p>
                    <form on:submit=on_submit class="space-y-5 bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-6">
                        {text_field("Team Name *", "e.g. Neural Ninjas", |f| f.team_name.clone(), |f, v| f.team_name = v)}

                        <AddInput
                            label=format!("Team Members (up to {} besides you)", max_invitees)
                            placeholder="Member name"
                            on_add=add_member
                            disabled=team_full
                        />
                        <div class="flex flex-wrap gap-2">
                            {move || form.with(|f| f.members.clone())
                                .into_iter()
                                .enumerate()
                                .map(|(i, m)| view! {
                                    <span class="inline-flex items-center gap-1 px-2.5 py-1 rounded-full bg-gray-100 dark:bg-gray-800 text-sm">
                                        {m}
                                        <button type="button" class="text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white"
                                            on:click=move |_| form.update(|f| f.remove_member(i))>"×"</button>
                                    </span>
                                })
                                .collect_view()}
                        </div>

                        {text_field("College / Organisation", "e.g. MIT", |f| f.college.clone(), |f, v| f.college = v)}

                        <AddInput label="Skills" placeholder="e.g. React" on_add=add_skill />
                        <div class="flex flex-wrap gap-2">
                            {move || form.with(|f| f.skills.clone())
                                .into_iter()
                                .map(|s| {
                                    let key = s.clone();
                                    view! {
                                        <span class="inline-flex items-center gap-1 px-2.5 py-1 rounded-full bg-indigo-500/20 text-indigo-200 text-sm">
                                            {s}
                                            <button type="button" class="text-indigo-600 dark:text-indigo-300 hover:text-gray-900 dark:hover:text-white"
                                                on:click=move |_| form.update(|f| f.remove_skill(&key))>"×"</button>
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>

                        {text_field("GitHub Repository", "https://github.com/...", |f| f.github_repo.clone(), |f, v| f.github_repo = v)}

                        <button type="submit" class=PRIMARY_BUTTON>"Complete Registration"</button>
                    </form>
                }
                .into_view(),
            }}
        </div>
    }
}
