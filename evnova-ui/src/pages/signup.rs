//! Signup Page
//!
//! Field checks run first and surface as toast titles; directory failures
//! (duplicate email) use the "Signup failed" toast.

use evnova::auth::SignupForm;
use evnova::navigation::{after_signup, LOGIN};
use leptos::*;
use leptos_router::*;

use super::{AuthCard, Field, PRIMARY_BUTTON};
use crate::state::{use_auth, use_global};

#[component]
pub fn Signup() -> impl IntoView {
    let auth = use_auth();
    let global = use_global();
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm::new(name.get(), email.get(), password.get()).confirm(confirm.get());

        if let Err(e) = form.validate() {
            global.show_error(&e.to_string(), None);
            return;
        }

        match auth.signup(&form) {
            Ok(_) => {
                global.show_success("Account created!", Some("Now choose your role."));
                navigate(after_signup(), Default::default());
            }
            Err(e) => global.show_error("Signup failed", Some(&e.to_string())),
        }
    };

    view! {
        <AuthCard title="Create your account" subtitle="Join the EVNOVA community">
            <form on:submit=on_submit class="space-y-4">
                <Field label="Full Name" value=name placeholder="John Doe" />
                <Field label="Email" value=email input_type="email" placeholder="you@example.com" />
                <Field label="Password" value=password input_type="password" placeholder="••••••••" />
                <Field label="Confirm Password" value=confirm input_type="password" placeholder="••••••••" />
                <button type="submit" class=PRIMARY_BUTTON>"Create Account"</button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                "Already have an account? "
                <A href=LOGIN class="text-indigo-400 hover:underline">"Log in"</A>
            </p>
        </AuthCard>
    }
}
