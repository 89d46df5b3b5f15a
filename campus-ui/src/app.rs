//! App Root Component
//!
//! Application shell with navigation and the page for the current route.

use campus::Route;
use leptos::*;

use crate::components::{MobileHeader, MobileNav, Sidebar};
use crate::pages::{Academics, Dashboard, Profile, Schedule};
use crate::state::global::provide_app_state;
use crate::state::navigation::provide_navigation;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    if let Err(message) = provide_app_state() {
        return view! { <LoadError message=message /> }.into_view();
    }

    let navigation = provide_navigation();
    let route = navigation.route();

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 flex">
            <Sidebar />

            <div class="flex-1 flex flex-col">
                <MobileHeader />

                // A page mounts when its route becomes current and unmounts
                // (tearing down its charts) when another route replaces it
                <main class="flex-1 container mx-auto px-4 py-8 pb-24 md:pb-8">
                    {move || match route.get() {
                        Route::Dashboard => view! { <Dashboard /> }.into_view(),
                        Route::Academics => view! { <Academics /> }.into_view(),
                        Route::Schedule => view! { <Schedule /> }.into_view(),
                        Route::Profile => view! { <Profile /> }.into_view(),
                    }}
                </main>
            </div>

            <MobileNav />
        </div>
    }
    .into_view()
}

/// Shown instead of the pages when the student record fails validation
#[component]
fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center px-4">
            <div class="text-6xl mb-4">"⚠️"</div>
            <h1 class="text-3xl font-bold mb-2">"Could not load student record"</h1>
            <p class="text-gray-500 font-mono text-sm">{message}</p>
        </div>
    }
}
