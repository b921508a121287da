//! Landing Page
//!
//! Hero, platform stats, featured hackathons, audience blurbs and a CTA.

use evnova::catalogue::Catalogue;
use evnova::dashboard::format_count;
use evnova::data;
use evnova::navigation::{HACKATHONS, SIGNUP};
use leptos::*;
use leptos_router::*;

use crate::components::HackathonCard;

const FEATURED_COUNT: usize = 4;

#[component]
pub fn Index() -> impl IntoView {
    let stats = data::platform_stats();
    let featured = Catalogue::mock().featured(FEATURED_COUNT).to_vec();

    let stat_tiles = [
        ("📅", stats.hackathons_hosted.to_string(), "Hackathons Hosted"),
        ("👥", format_count(stats.total_participants), "Participants"),
        ("💻", format_count(stats.teams_formed), "Teams Formed"),
        ("🏆", stats.prizes_awarded.clone(), "Prizes Awarded"),
    ];

    view! {
        // Hero
        <section class="relative overflow-hidden">
            <div class="container mx-auto px-4 py-24 md:py-36 text-center max-w-3xl">
                <span class="inline-block mb-6 px-3 py-1 rounded-full text-xs border border-indigo-500/30 bg-indigo-500/10 text-indigo-300">
                    "⚡ The Future of Hackathons"
                </span>
                <h1 class="text-4xl md:text-6xl font-bold leading-tight tracking-tight">
                    "Build. Compete. "
                    <span class="bg-gradient-to-r from-indigo-400 via-purple-400 to-emerald-400 bg-clip-text text-transparent">
                        "Innovate."
                    </span>
                </h1>
                <p class="mx-auto mt-6 max-w-xl text-lg text-gray-500 dark:text-gray-400">
                    "The ultimate platform for organizing and participating in hackathons. \
                     Connect with developers, form teams, and build the future."
                </p>
                <div class="mt-8 flex flex-col sm:flex-row gap-4 justify-center">
                    <A href=SIGNUP class="px-6 py-3 rounded-lg bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-semibold">
                        "🚀 Organize a Hackathon"
                    </A>
                    <A href=HACKATHONS class="px-6 py-3 rounded-lg border border-indigo-500/30 hover:bg-gray-50 dark:hover:bg-gray-900">
                        "Join a Hackathon →"
                    </A>
                </div>
            </div>
        </section>

        // Stats
        <section class="border-y border-gray-200 dark:border-gray-800 bg-white/40 dark:bg-gray-900/40">
            <div class="container mx-auto grid grid-cols-2 md:grid-cols-4 gap-6 px-4 py-12">
                {stat_tiles
                    .into_iter()
                    .map(|(icon, value, label)| view! {
                        <div class="text-center">
                            <div class="text-2xl mb-2">{icon}</div>
                            <div class="text-3xl font-bold">{value}</div>
                            <div class="mt-1 text-sm text-gray-500 dark:text-gray-400">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        // Featured
        <section class="py-20">
            <div class="container mx-auto px-4">
                <div class="mb-10 text-center">
                    <h2 class="text-3xl font-bold">"Featured Hackathons"</h2>
                    <p class="mt-2 text-gray-500 dark:text-gray-400">"Discover exciting challenges and competitions"</p>
                </div>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                    {featured
                        .into_iter()
                        .map(|h| view! { <HackathonCard hackathon=h compact=true /> })
                        .collect_view()}
                </div>
                <div class="mt-10 text-center">
                    <A href=HACKATHONS class="inline-block px-5 py-2.5 rounded-lg border border-indigo-500/30 hover:bg-gray-50 dark:hover:bg-gray-900">
                        "View All Hackathons →"
                    </A>
                </div>
            </div>
        </section>

        // Why EVNOVA
        <section class="border-t border-gray-200 dark:border-gray-800 bg-white/40 dark:bg-gray-900/40 py-20">
            <div class="container mx-auto px-4">
                <div class="mx-auto max-w-2xl text-center">
                    <h2 class="text-3xl font-bold">"Why EVNOVA?"</h2>
                    <p class="mt-4 text-gray-500 dark:text-gray-400">
                        "We're building the most vibrant hackathon ecosystem in the world, connecting \
                         organisers, developers and sponsors to create unforgettable innovation experiences."
                    </p>
                </div>
                <div class="mt-12 grid gap-6 md:grid-cols-3">
                    <Feature icon="🚀" title="For Organisers"
                        desc="Create, manage, and run hackathons effortlessly with our powerful tools." />
                    <Feature icon="👥" title="For Participants"
                        desc="Discover hackathons, form teams, submit projects, and build your portfolio." />
                    <Feature icon="🏆" title="For Everyone"
                        desc="A thriving community of innovators pushing the boundaries of technology." />
                </div>
            </div>
        </section>

        // CTA
        <section class="py-20">
            <div class="container mx-auto px-4">
                <div class="rounded-2xl bg-gradient-to-r from-indigo-600 to-purple-600 text-white p-12 text-center">
                    <h2 class="text-3xl font-bold">"Ready to build something amazing?"</h2>
                    <p class="mt-3 text-indigo-100">"Join thousands of developers shaping the future."</p>
                    <A href=SIGNUP class="mt-6 inline-block px-6 py-3 rounded-lg bg-white text-indigo-700 font-semibold">
                        "Get Started Free"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Feature(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-50 dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-xl p-6 text-center">
            <div class="text-3xl mb-4">{icon}</div>
            <h3 class="text-lg font-semibold">{title}</h3>
            <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">{desc}</p>
        </div>
    }
}
