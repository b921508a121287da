//! Page Components

pub mod browse;
pub mod create_hackathon;
pub mod detail;
pub mod forgot_password;
pub mod index;
pub mod login;
pub mod organiser_dashboard;
pub mod participant_dashboard;
pub mod register;
pub mod select_role;
pub mod signup;

pub use browse::BrowseHackathons;
pub use create_hackathon::CreateHackathon;
pub use detail::HackathonDetail;
pub use forgot_password::ForgotPassword;
pub use index::Index;
pub use login::Login;
pub use organiser_dashboard::OrganiserDashboard;
pub use participant_dashboard::ParticipantDashboard;
pub use register::RegisterTeam;
pub use select_role::SelectRole;
pub use signup::Signup;

use leptos::*;

/// Centered card used by the auth pages
#[component]
pub(crate) fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex min-h-[80vh] items-center justify-center px-4 py-12">
            <div class="w-full max-w-md">
                <div class="mb-8 text-center">
                    <div class="text-2xl font-bold bg-gradient-to-r from-indigo-400 to-purple-400 bg-clip-text text-transparent">
                        "EVNOVA"
                    </div>
                </div>
                <div class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-2xl p-8 shadow-xl">
                    <h1 class="text-2xl font-bold text-center">{title}</h1>
                    <p class="mt-1 mb-6 text-center text-sm text-gray-500 dark:text-gray-400">{subtitle}</p>
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Labelled text input bound to a signal
#[component]
pub(crate) fn Field(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-500 dark:text-gray-400 mb-1.5">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-100 dark:bg-gray-800 rounded-lg px-4 py-2.5 text-gray-900 dark:text-white
                       border border-gray-300 dark:border-gray-700 focus:border-indigo-500 focus:outline-none"
            />
        </label>
    }
}

pub(crate) const PRIMARY_BUTTON: &str = "w-full bg-indigo-600 text-white hover:bg-indigo-700 disabled:bg-gray-700 \
    disabled:cursor-not-allowed rounded-lg py-2.5 font-semibold transition-colors";
