//! Dashboard Page
//!
//! Headline metrics, progress rings, the attendance chart and the next few
//! calendar entries.

use campus::chart::ATTENDANCE_CHART_ID;
use campus::views::DashboardView;
use leptos::*;

use crate::components::{ChartCanvas, ProgressRing, SummaryCard};
use crate::pages::schedule::EventRow;
use crate::state::global::use_app_state;
use crate::state::navigation::use_navigation;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let navigation = use_navigation();
    let view_model = DashboardView::build(&state.record, &state.config);
    let policy = state.config.chart.retry_policy();
    let upcoming_link = view_model.upcoming_link;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">{format!("Welcome back, {}", view_model.name)}</h1>
                <p class="text-gray-500 mt-1">{view_model.subtitle}</p>
            </div>

            <section class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                {view_model.cards
                    .into_iter()
                    .map(|card| view! { <SummaryCard card=card /> })
                    .collect_view()}
            </section>

            <section class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="bg-white rounded-xl p-6 shadow-sm border border-gray-100 flex justify-around">
                    {view_model.rings
                        .into_iter()
                        .map(|ring| view! { <ProgressRing ring=ring /> })
                        .collect_view()}
                </div>

                <div class="lg:col-span-2 bg-white rounded-xl p-6 shadow-sm border border-gray-100">
                    <h2 class="text-lg font-semibold mb-4">"Attendance vs Target"</h2>
                    <ChartCanvas
                        id=ATTENDANCE_CHART_ID
                        spec=view_model.attendance_chart
                        policy=policy
                        height="h-40"
                    />
                </div>
            </section>

            <section class="bg-white rounded-xl p-6 shadow-sm border border-gray-100">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold">"Upcoming"</h2>
                    <button
                        class="text-sm text-cyan-600 hover:underline"
                        on:click=move |_| navigation.go(upcoming_link)
                    >
                        "View schedule"
                    </button>
                </div>
                <ul class="divide-y divide-gray-100">
                    {view_model.upcoming
                        .into_iter()
                        .map(|event| view! { <EventRow event=event compact=true link=upcoming_link /> })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
