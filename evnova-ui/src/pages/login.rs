//! Login Page

use evnova::navigation::{after_login, FORGOT_PASSWORD, SIGNUP};
use leptos::*;
use leptos_router::*;

use super::{AuthCard, Field, PRIMARY_BUTTON};
use crate::state::{use_auth, use_global};

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let global = use_global();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match auth.login(&email.get(), &password.get()) {
            Ok(_) => {
                global.show_success("Welcome back!", Some("You've been logged in successfully."));
                navigate(after_login(), Default::default());
            }
            Err(e) => global.show_error("Login failed", Some(&e.to_string())),
        }
    };

    view! {
        <AuthCard title="Welcome back" subtitle="Log in to your EVNOVA account">
            <form on:submit=on_submit class="space-y-4">
                <Field label="Email" value=email input_type="email" placeholder="you@example.com" />
                <Field label="Password" value=password input_type="password" placeholder="••••••••" />
                <div class="text-right">
                    <A href=FORGOT_PASSWORD class="text-sm text-indigo-400 hover:underline">
                        "Forgot password?"
                    </A>
                </div>
                <button type="submit" class=PRIMARY_BUTTON>"Log in"</button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                "Don't have an account? "
                <A href=SIGNUP class="text-indigo-400 hover:underline">"Sign up"</A>
            </p>
        </AuthCard>
    }
}
