//! Create Hackathon Page
//!
//! Four-step wizard over `CreateHackathonWizard`. Publishing builds the
//! record, toasts and returns to the organiser dashboard.

use evnova::catalogue::Catalogue;
use evnova::model::HackathonMode;
use evnova::navigation::ORGANISER_DASHBOARD;
use evnova::wizard::{CreateHackathonWizard, HackathonDraft, WizardStep, SUGGESTED_THEMES};
use leptos::*;
use leptos_router::*;

use crate::state::{use_auth, use_global};

const INPUT: &str = "w-full bg-gray-100 dark:bg-gray-800 rounded-lg px-4 py-2.5 border border-gray-300 dark:border-gray-700 \
    focus:border-indigo-500 focus:outline-none";

type Getter = fn(&HackathonDraft) -> String;
type Setter = fn(&mut HackathonDraft, String);

#[component]
pub fn CreateHackathon() -> impl IntoView {
    let auth = use_auth();
    let global = use_global();
    let navigate = use_navigate();
    let wizard = create_rw_signal(CreateHackathonWizard::new());

    let step = create_memo(move |_| wizard.with(|w| w.step()));

    let publish = move |_: ev::MouseEvent| {
        let id = (Catalogue::mock().len() + 1).to_string();
        let organiser = auth.user().map(|u| u.name).unwrap_or_default();
        match wizard.with(|w| w.publish(id, organiser)) {
            Ok(_) => {
                let message = wizard.with(|w| w.draft.published_message());
                global.show_success("Hackathon Created! 🎉", Some(&message));
                navigate(ORGANISER_DASHBOARD, Default::default());
            }
            Err(e) => global.show_error(&e.to_string(), None),
        }
    };

    view! {
        <div class="container mx-auto max-w-3xl px-4 py-12">
            <A href=ORGANISER_DASHBOARD class="inline-block mb-4 text-sm text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white">
                "← Back to Dashboard"
            </A>
            <h1 class="mb-2 text-3xl font-bold">"Create Hackathon"</h1>
            <p class="mb-8 text-gray-500 dark:text-gray-400">"Fill in the details to launch your hackathon"</p>

            <Stepper step=step />

            <div class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-6 space-y-5">
                {move || match step.get() {
                    WizardStep::BasicInfo => view! { <BasicInfoStep wizard=wizard /> }.into_view(),
                    WizardStep::Details => view! { <DetailsStep wizard=wizard /> }.into_view(),
                    WizardStep::ThemesRules => view! { <ThemesStep wizard=wizard /> }.into_view(),
                    WizardStep::Review => view! { <ReviewStep wizard=wizard /> }.into_view(),
                }}
            </div>

            <div class="mt-6 flex justify-between">
                <button
                    class="px-5 py-2.5 rounded-lg border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-gray-800 disabled:opacity-40"
                    disabled=move || !wizard.with(|w| w.can_go_back())
                    on:click=move |_| {
                        wizard.update(|w| {
                            w.previous();
                        })
                    }
                >
                    "← Previous"
                </button>
                {move || {
                    if step.get().is_last() {
                        let publish = publish.clone();
                        view! {
                            <button
                                class="px-5 py-2.5 rounded-lg bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-semibold"
                                on:click=publish
                            >
                                "🚀 Publish Hackathon"
                            </button>
                        }
                        .into_view()
                    } else {
                        view! {
                            <button
                                class="px-5 py-2.5 rounded-lg bg-indigo-600 text-white hover:bg-indigo-700 font-semibold disabled:bg-gray-700 disabled:cursor-not-allowed"
                                disabled=move || !wizard.with(|w| w.can_advance())
                                on:click=move |_| {
                                    wizard.update(|w| {
                                        let _ = w.next();
                                    })
                                }
                            >
                                "Next →"
                            </button>
                        }
                        .into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn Stepper(step: Memo<WizardStep>) -> impl IntoView {
    let steps = WizardStep::all();
    view! {
        <div class="mb-8 flex items-center gap-2">
            {steps
                .iter()
                .map(|&s| {
                    let reached = move || s.index() <= step.get().index();
                    let done = move || s.index() < step.get().index();
                    view! {
                        <div class="flex items-center gap-2 flex-1">
                            <div class=move || {
                                if reached() {
                                    "flex h-8 w-8 shrink-0 items-center justify-center rounded-full text-xs font-bold bg-gradient-to-br from-indigo-500 to-purple-500"
                                } else {
                                    "flex h-8 w-8 shrink-0 items-center justify-center rounded-full text-xs font-bold bg-gray-100 dark:bg-gray-800 text-gray-500 dark:text-gray-400"
                                }
                            }>
                                {move || if done() { "✓".to_string() } else { (s.index() + 1).to_string() }}
                            </div>
                            <span class=move || {
                                if reached() { "hidden sm:block text-xs font-medium" } else { "hidden sm:block text-xs text-gray-500" }
                            }>
                                {s.title()}
                            </span>
                            {(!s.is_last()).then(|| view! {
                                <div class=move || if done() { "mx-1 h-0.5 flex-1 rounded bg-indigo-500" } else { "mx-1 h-0.5 flex-1 rounded bg-gray-100 dark:bg-gray-800" } />
                            })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Draft text field; `multiline` renders a textarea
#[component]
fn DraftField(
    wizard: RwSignal<CreateHackathonWizard>,
    label: &'static str,
    get: Getter,
    set: Setter,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = 0)] rows: u32,
) -> impl IntoView {
    let value = move || wizard.with(|w| get(&w.draft));
    let on_input = move |ev: ev::Event| wizard.update(|w| set(&mut w.draft, event_target_value(&ev)));

    let control = if rows > 0 {
        view! {
            <textarea rows=rows placeholder=placeholder class=INPUT prop:value=value on:input=on_input />
        }
        .into_view()
    } else {
        view! {
            <input type=input_type placeholder=placeholder class=INPUT prop:value=value on:input=on_input />
        }
        .into_view()
    };

    view! {
        <label class="block space-y-2">
            <span class="block text-sm text-gray-600 dark:text-gray-300">{label}</span>
            {control}
        </label>
    }
}

#[component]
fn BasicInfoStep(wizard: RwSignal<CreateHackathonWizard>) -> impl IntoView {
    view! {
        <DraftField wizard=wizard label="Hackathon Title *" placeholder="e.g. AI Innovation Challenge"
            get=|d| d.title.clone() set=|d, v| d.title = v />
        <DraftField wizard=wizard label="Description *" placeholder="Describe your hackathon..." rows=4
            get=|d| d.description.clone() set=|d, v| d.description = v />
        <div class="space-y-2">
            <span class="block text-sm text-gray-600 dark:text-gray-300">"Type"</span>
            <div class="flex gap-3">
                {HackathonMode::all()
                    .iter()
                    .map(|&mode| view! {
                        <button
                            type="button"
                            class=move || {
                                if wizard.with(|w| w.draft.mode == mode) {
                                    "px-4 py-2 rounded-lg bg-gradient-to-r from-indigo-600 to-purple-600 text-white"
                                } else {
                                    "px-4 py-2 rounded-lg border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-gray-800"
                                }
                            }
                            on:click=move |_| wizard.update(|w| w.draft.mode = mode)
                        >
                            {mode.label()}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DetailsStep(wizard: RwSignal<CreateHackathonWizard>) -> impl IntoView {
    let offline = move || wizard.with(|w| w.draft.shows_venue());

    view! {
        <div class="grid gap-4 sm:grid-cols-2">
            <DraftField wizard=wizard label="Start Date *" input_type="date"
                get=|d| d.start_date.clone() set=|d, v| d.start_date = v />
            <DraftField wizard=wizard label="End Date *" input_type="date"
                get=|d| d.end_date.clone() set=|d, v| d.end_date = v />
        </div>
        <DraftField wizard=wizard label="Registration Deadline *" input_type="date"
            get=|d| d.registration_deadline.clone() set=|d, v| d.registration_deadline = v />
        <Show when=offline>
            <DraftField wizard=wizard label="Venue" placeholder="e.g. MIT Campus, Boston"
                get=|d| d.venue.clone() set=|d, v| d.venue = v />
        </Show>
        <div class="grid gap-4 sm:grid-cols-2">
            <DraftField wizard=wizard label="Prize Pool *" placeholder="e.g. $10,000"
                get=|d| d.prize_pool.clone() set=|d, v| d.prize_pool = v />
            <DraftField wizard=wizard label="Max Team Size" input_type="number"
                get=|d| d.max_team_size.to_string() set=|d, v| d.set_max_team_size(&v) />
        </div>
    }
}

#[component]
fn ThemesStep(wizard: RwSignal<CreateHackathonWizard>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <span class="block text-sm text-gray-600 dark:text-gray-300">"Select Themes * (pick at least one)"</span>
            <div class="flex flex-wrap gap-2">
                {SUGGESTED_THEMES
                    .iter()
                    .map(|&theme| view! {
                        <button
                            type="button"
                            class=move || {
                                if wizard.with(|w| w.draft.has_theme(theme)) {
                                    "px-3 py-1 rounded-full text-sm bg-gradient-to-r from-indigo-600 to-purple-600 text-white"
                                } else {
                                    "px-3 py-1 rounded-full text-sm border border-gray-300 dark:border-gray-700 hover:bg-gray-100 dark:hover:bg-gray-800"
                                }
                            }
                            on:click=move |_| wizard.update(|w| w.draft.toggle_theme(theme))
                        >
                            {theme}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
        <DraftField wizard=wizard label="Rules & Guidelines" rows=5
            placeholder="List rules, eligibility criteria, judging criteria..."
            get=|d| d.rules.clone() set=|d, v| d.rules = v />
    }
}

#[component]
fn ReviewStep(wizard: RwSignal<CreateHackathonWizard>) -> impl IntoView {
    view! {
        <h2 class="text-lg font-semibold">"Review & Publish"</h2>
        <dl class="divide-y divide-gray-800">
            {move || {
                wizard.with(|w| w.draft.review_rows())
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="grid grid-cols-3 gap-4 py-3">
                            <dt class="text-sm text-gray-500 dark:text-gray-400">{label}</dt>
                            <dd class="col-span-2 text-sm whitespace-pre-line">{value}</dd>
                        </div>
                    })
                    .collect_view()
            }}
        </dl>
    }
}
