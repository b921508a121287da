//! Site footer

use evnova::navigation::{ABOUT, COMMUNITY, HACKATHONS};
use leptos::*;
use leptos_router::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="border-t border-gray-200 dark:border-gray-800 bg-white/60 dark:bg-gray-900/60 py-10">
            <div class="container mx-auto px-4 grid gap-8 md:grid-cols-3 text-sm">
                <div>
                    <div class="text-xl font-bold bg-gradient-to-r from-indigo-400 to-purple-400 bg-clip-text text-transparent">
                        "EVNOVA"
                    </div>
                    <p class="mt-2 text-gray-500 dark:text-gray-400">"Build. Compete. Innovate."</p>
                </div>
                <div class="space-y-2">
                    <div class="font-semibold">"Platform"</div>
                    <A href=HACKATHONS class="block text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white">"Hackathons"</A>
                    <A href=COMMUNITY class="block text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white">"Community"</A>
                    <A href=ABOUT class="block text-gray-500 dark:text-gray-400 hover:text-gray-900 dark:hover:text-white">"About"</A>
                </div>
                <div class="text-gray-500 md:text-right">
                    {format!("© {} EVNOVA. All rights reserved.", year)}
                </div>
            </div>
        </footer>
    }
}
