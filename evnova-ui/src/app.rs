//! App Root Component
//!
//! Routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Footer, Nav, Toast};
use crate::pages::{
    BrowseHackathons, CreateHackathon, ForgotPassword, HackathonDetail, Index, Login,
    OrganiserDashboard, ParticipantDashboard, RegisterTeam, SelectRole, Signup,
};
use crate::state::{provide_auth, provide_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_auth();

    view! {
        <Router>
            <div class="min-h-screen bg-white dark:bg-gray-950 text-gray-900 dark:text-white flex flex-col">
                <Nav />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Index />
                        <Route path="/login" view=Login />
                        <Route path="/signup" view=Signup />
                        <Route path="/forgot-password" view=ForgotPassword />
                        <Route path="/select-role" view=SelectRole />
                        <Route path="/hackathons" view=BrowseHackathons />
                        <Route path="/hackathons/:id" view=HackathonDetail />
                        <Route path="/hackathons/:id/register" view=RegisterTeam />
                        <Route path="/organiser/dashboard" view=OrganiserDashboard />
                        <Route path="/organiser/create-hackathon" view=CreateHackathon />
                        <Route path="/participant/dashboard" view=ParticipantDashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    create_effect(move |_| {
        web_sys::console::error_1(
            &format!("404: no route for {}", location.pathname.get()).into(),
        );
    });

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl font-bold mb-4">"404"</div>
            <p class="text-xl text-gray-500 dark:text-gray-400 mb-6">"Oops! Page not found"</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 text-white hover:bg-indigo-700 rounded-lg font-medium transition-colors"
            >
                "Return to Home"
            </A>
        </div>
    }
}
