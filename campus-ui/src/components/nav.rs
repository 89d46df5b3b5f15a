//! Navigation Components
//!
//! Desktop sidebar, mobile header and mobile bottom bar. All three render the
//! same [`nav_items`] and highlight from the shared navigation path.

use campus::router::{nav_items, NavItem, Route};
use leptos::*;

use crate::state::global::use_app_state;
use crate::state::navigation::use_navigation;

/// Desktop sidebar
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="hidden md:flex md:flex-col w-64 bg-white border-r border-gray-200 min-h-screen">
            <div class="flex items-center space-x-3 px-6 h-16 border-b border-gray-200">
                <span class="text-2xl">"🎓"</span>
                <span class="text-xl font-bold text-gray-900">"Campus"</span>
            </div>

            <nav class="flex-1 px-3 py-4 space-y-1">
                {nav_items()
                    .into_iter()
                    .map(|item| view! { <NavLink item=item /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Top bar on small screens, with the student's avatar linking to the profile
#[component]
pub fn MobileHeader() -> impl IntoView {
    let state = use_app_state();
    let navigation = use_navigation();
    let profile = &state.record.profile;

    let on_avatar = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        navigation.go(Route::Profile);
    };

    view! {
        <header class="md:hidden sticky top-0 z-10 flex items-center justify-between bg-white border-b border-gray-200 h-14 px-4">
            <span class="text-lg font-bold text-gray-900">"🎓 Campus"</span>
            <div class="flex items-center space-x-3">
                <div class="text-right hidden sm:block">
                    <p class="text-sm font-medium text-gray-800">{profile.name.clone()}</p>
                    <p class="text-xs text-gray-500">{profile.branch.clone()}</p>
                </div>
                <a
                    href=Route::Profile.href()
                    on:click=on_avatar
                    class="w-9 h-9 rounded-full bg-cyan-600 flex items-center justify-center text-white font-bold hover:ring-2 ring-teal-400"
                >
                    {profile.initial().to_string()}
                </a>
            </div>
        </header>
    }
}

/// Bottom tab bar on small screens
#[component]
pub fn MobileNav() -> impl IntoView {
    view! {
        <nav class="md:hidden fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 flex justify-around py-2">
            {nav_items()
                .into_iter()
                .map(|item| view! { <NavLink item=item compact=true /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn NavLink(
    item: NavItem,
    /// Icon above a small label instead of a full-width row
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let navigation = use_navigation();
    let path = navigation.path();
    let route = item.route;

    let is_active = create_memo(move |_| path.with(|p| route.is_active_for(p)));

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        navigation.go(route);
    };

    let base = if compact {
        "flex flex-col items-center text-xs px-3 py-1 rounded-lg transition-colors"
    } else {
        "flex items-center space-x-3 px-4 py-2 rounded-lg font-medium transition-colors"
    };

    view! {
        <a
            href=item.href()
            on:click=on_click
            class=move || {
                if is_active.get() {
                    format!("{} bg-cyan-50 text-cyan-700", base)
                } else {
                    format!("{} text-gray-600 hover:bg-gray-100 hover:text-gray-900", base)
                }
            }
        >
            <span class="text-lg">{item.icon.glyph()}</span>
            <span>{item.label}</span>
        </a>
    }
}
