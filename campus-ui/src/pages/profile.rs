//! Profile Page

use campus::views::ProfileView;
use leptos::*;

use crate::state::global::use_app_state;

#[component]
pub fn Profile() -> impl IntoView {
    let state = use_app_state();
    let profile = ProfileView::build(&state.record);

    view! {
        <div class="max-w-3xl space-y-8">
            <section class="bg-white rounded-xl p-6 shadow-sm border border-gray-100 flex items-center space-x-6">
                <div class="w-20 h-20 rounded-full bg-cyan-600 text-white flex items-center justify-center text-3xl font-bold">
                    {profile.initial.to_string()}
                </div>
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{profile.name}</h1>
                    <p class="text-gray-500">{profile.branch}</p>
                    <span class="inline-block mt-2 text-xs font-medium px-2 py-1 rounded-full bg-teal-100 text-teal-700">
                        {profile.badge}
                    </span>
                </div>
            </section>

            <section class="bg-white rounded-xl shadow-sm border border-gray-100 divide-y divide-gray-100">
                {profile.details
                    .into_iter()
                    .map(|detail| view! {
                        <div class="flex items-center px-6 py-4">
                            <span class="text-xl w-8">{detail.icon.glyph()}</span>
                            <span class="w-48 text-sm text-gray-500">{detail.label}</span>
                            <span class="font-medium text-gray-900">{detail.value}</span>
                        </div>
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
