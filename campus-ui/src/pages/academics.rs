//! Academics Page
//!
//! CGPA trend chart and an accordion of current subjects, one open at a time.

use campus::chart::CGPA_CHART_ID;
use campus::views::{AcademicsView, ExpansionState, SubjectRow};
use leptos::*;

use crate::components::ChartCanvas;
use crate::state::global::use_app_state;

#[component]
pub fn Academics() -> impl IntoView {
    let state = use_app_state();
    let view_model = AcademicsView::build(&state.record, &state.config);
    let policy = state.config.chart.retry_policy();

    // Local to this page; discarded on unmount
    let expansion = create_rw_signal(ExpansionState::default());

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-gray-900">{view_model.title}</h1>

            <section class="bg-white rounded-xl p-6 shadow-sm border border-gray-100">
                <h2 class="text-lg font-semibold mb-4">"CGPA Trend"</h2>
                <ChartCanvas id=CGPA_CHART_ID spec=view_model.trend_chart policy=policy />
            </section>

            <section class="space-y-3">
                <h2 class="text-lg font-semibold">"Subjects"</h2>
                {view_model.subjects
                    .into_iter()
                    .map(|row| view! { <SubjectItem row=row expansion=expansion /> })
                    .collect_view()}
            </section>
        </div>
    }
}

#[component]
fn SubjectItem(row: SubjectRow, expansion: RwSignal<ExpansionState>) -> impl IntoView {
    let code = row.code.clone();
    let is_open = {
        let code = code.clone();
        create_memo(move |_| expansion.with(|e| e.is_expanded(&code)))
    };

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100">
            <button
                class="w-full flex items-center justify-between p-4 text-left"
                on:click=move |_| expansion.update(|e| e.toggle(&code))
            >
                <div>
                    <div class="font-medium text-gray-900">{row.name}</div>
                    <div class="text-sm text-gray-500">{format!("{} | {}", row.code, row.faculty)}</div>
                </div>
                <div class="flex items-center space-x-3">
                    <span class=format!("text-xs font-medium px-2 py-1 rounded-full {}", row.badge_class)>
                        {row.status.label()}
                    </span>
                    <span>{move || if is_open.get() { "▴" } else { "▾" }}</span>
                </div>
            </button>

            <Show when=move || is_open.get()>
                <div class="grid grid-cols-2 gap-4 px-4 pb-4 text-sm">
                    <div>
                        <div class="text-gray-500">"Attendance"</div>
                        <div class=format!("text-lg font-semibold {}", row.attendance_tier.text_class())>
                            {row.attendance.clone()}
                        </div>
                    </div>
                    <div>
                        <div class="text-gray-500">"Internal Marks"</div>
                        <div class="text-lg font-semibold text-gray-900">{row.internal_marks.clone()}</div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
