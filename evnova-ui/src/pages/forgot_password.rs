//! Forgot Password Page
//!
//! Mock reset: nothing is sent.

use evnova::navigation::LOGIN;
use leptos::*;
use leptos_router::*;

use super::{AuthCard, Field, PRIMARY_BUTTON};
use crate::state::use_global;

#[component]
pub fn ForgotPassword() -> impl IntoView {
    let global = use_global();
    let email = create_rw_signal(String::new());
    let (sent, set_sent) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_sent.set(true);
        global.show_success("Reset link sent!", Some("Check your email for the reset link (mock)."));
    };

    let try_again = move |_: ev::MouseEvent| {
        set_sent.set(false);
        email.set(String::new());
    };

    view! {
        <AuthCard title="Reset password" subtitle="We'll email you a link to reset it">
            <Show
                when=move || sent.get()
                fallback=move || view! {
                    <form on:submit=on_submit class="space-y-4">
                        <Field label="Email" value=email input_type="email" placeholder="you@example.com" />
                        <button type="submit" class=PRIMARY_BUTTON>"Send reset link"</button>
                    </form>
                }
            >
                <div class="text-center space-y-4">
                    <div class="text-4xl">"📬"</div>
                    <p class="text-gray-600 dark:text-gray-300">
                        {move || format!("We sent a reset link to {}", email.get())}
                    </p>
                    <p class="text-sm text-gray-500 dark:text-gray-400">"Didn't receive it? Check spam or try again."</p>
                    <button class="text-indigo-400 hover:underline text-sm" on:click=try_again>
                        "Try again"
                    </button>
                </div>
            </Show>
            <p class="mt-6 text-center text-sm text-gray-500 dark:text-gray-400">
                <A href=LOGIN class="text-indigo-400 hover:underline">"Back to login"</A>
            </p>
        </AuthCard>
    }
}
