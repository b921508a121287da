//! Browse Hackathons Page
//!
//! Search plus type, status and domain chips over the mock catalogue.

use evnova::catalogue::{results_label, Catalogue, HackathonFilter, DOMAIN_FILTERS};
use evnova::model::{HackathonMode, HackathonStatus};
use leptos::*;

use crate::components::HackathonCard;

fn chip_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1.5 rounded-lg text-sm bg-indigo-600 text-white"
    } else {
        "px-3 py-1.5 rounded-lg text-sm border border-gray-300 dark:border-gray-700 text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
    }
}

#[component]
pub fn BrowseHackathons() -> impl IntoView {
    let catalogue = store_value(Catalogue::mock());
    let filter = create_rw_signal(HackathonFilter::new());

    let results = create_memo(move |_| {
        filter.with(|f| catalogue.with_value(|c| c.filter(f).into_iter().cloned().collect::<Vec<_>>()))
    });

    let mode_chips = move || {
        let options = std::iter::once(None).chain(HackathonMode::all().iter().copied().map(Some));
        options
            .map(|mode| {
                let label = mode.map(|m| m.title()).unwrap_or("All");
                view! {
                    <button
                        class=move || chip_class(filter.with(|f| f.mode == mode))
                        on:click=move |_| filter.update(|f| f.mode = mode)
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let status_chips = move || {
        let options = std::iter::once(None).chain(HackathonStatus::all().iter().copied().map(Some));
        options
            .map(|status| {
                let label = status.map(|s| s.title()).unwrap_or("All");
                view! {
                    <button
                        class=move || chip_class(filter.with(|f| f.status == status))
                        on:click=move |_| filter.update(|f| f.status = status)
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    let domain_chips = move || {
        DOMAIN_FILTERS
            .iter()
            .map(|&domain| {
                let is_active = move || filter.with(|f| f.domain.as_deref() == Some(domain));
                view! {
                    <button
                        class=move || chip_class(is_active())
                        on:click=move |_| {
                            filter.update(|f| {
                                f.domain = if f.domain.as_deref() == Some(domain) {
                                    None
                                } else {
                                    Some(domain.to_string())
                                }
                            })
                        }
                    >
                        {domain}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="container mx-auto px-4 py-12 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Browse Hackathons"</h1>
                <p class="mt-1 text-gray-500 dark:text-gray-400">"Discover and join exciting hackathons from around the world."</p>
            </div>

            <div class="space-y-4">
                <input
                    type="text"
                    placeholder="Search hackathons..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                    class="w-full bg-gray-50 dark:bg-gray-900 rounded-lg px-4 py-3 border border-gray-200 dark:border-gray-800 focus:border-indigo-500 focus:outline-none"
                />
                <div class="flex flex-wrap items-center gap-2">
                    <span class="text-sm text-gray-500 dark:text-gray-400 w-16">"Type"</span>
                    {mode_chips}
                </div>
                <div class="flex flex-wrap items-center gap-2">
                    <span class="text-sm text-gray-500 dark:text-gray-400 w-16">"Status"</span>
                    {status_chips}
                </div>
                <div class="flex flex-wrap items-center gap-2">
                    <span class="text-sm text-gray-500 dark:text-gray-400 w-16">"Domain"</span>
                    {domain_chips}
                </div>
            </div>

            <div class="flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
                <span>{move || results_label(results.with(|r| r.len()))}</span>
                <Show when=move || !filter.with(|f| f.is_empty())>
                    <button class="text-indigo-400 hover:underline" on:click=move |_| filter.update(|f| f.clear())>
                        "Clear filters"
                    </button>
                </Show>
            </div>

            <Show
                when=move || results.with(|r| !r.is_empty())
                fallback=|| view! {
                    <div class="py-20 text-center text-gray-500 dark:text-gray-400">"No hackathons match your filters."</div>
                }
            >
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=move || results.get()
                        key=|h| h.id.clone()
                        children=|h| view! { <HackathonCard hackathon=h /> }
                    />
                </div>
            </Show>
        </div>
    }
}
