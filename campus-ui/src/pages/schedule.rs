//! Schedule Page
//!
//! Tab-filtered timeline of calendar entries next to a month calendar with
//! critical days highlighted.

use campus::views::{timeline_dot_class, CalendarMonth, ScheduleTab, WEEKDAY_HEADERS};
use campus::{CalendarEvent, Route};
use leptos::*;

use crate::state::global::use_app_state;
use crate::state::navigation::use_navigation;

#[component]
pub fn Schedule() -> impl IntoView {
    let state = use_app_state();
    let tab = create_rw_signal(ScheduleTab::default());

    let events = state.record.events.clone();
    let visible = move || {
        let tab = tab.get();
        let shown: Vec<CalendarEvent> = tab.filter(&events).into_iter().cloned().collect();
        if shown.is_empty() {
            view! {
                <p class="text-center text-gray-500 py-12">{tab.empty_message()}</p>
            }
            .into_view()
        } else {
            view! {
                <ol class="relative border-l-2 border-gray-200 ml-3 space-y-6">
                    {shown
                        .into_iter()
                        .map(|event| view! { <EventRow event=event /> })
                        .collect_view()}
                </ol>
            }
            .into_view()
        }
    };

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-gray-900">"Schedule"</h1>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <section class="lg:col-span-2 bg-white rounded-xl p-6 shadow-sm border border-gray-100">
                    <div class="flex space-x-2 mb-6">
                        {ScheduleTab::all()
                            .iter()
                            .map(|&t| view! { <TabButton tab=t selected=tab /> })
                            .collect_view()}
                    </div>
                    {visible}
                </section>

                <QuickCalendar />
            </div>
        </div>
    }
}

#[component]
fn TabButton(tab: ScheduleTab, selected: RwSignal<ScheduleTab>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| selected.set(tab)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if selected.get() == tab {
                    format!("{} bg-cyan-600 text-white", base)
                } else {
                    format!("{} bg-gray-100 text-gray-600 hover:bg-gray-200", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}

/// One calendar entry; `compact` drops the timeline dot and detail line
#[component]
pub fn EventRow(
    event: CalendarEvent,
    #[prop(optional)]
    compact: bool,
    /// Page opened when the row is clicked
    #[prop(optional)]
    link: Option<Route>,
) -> impl IntoView {
    if compact {
        let navigation = use_navigation();
        let on_click = move |_| {
            if let Some(route) = link {
                navigation.go(route);
            }
        };
        let class = if link.is_some() {
            "flex items-center justify-between py-3 px-2 -mx-2 rounded-lg cursor-pointer hover:bg-gray-50"
        } else {
            "flex items-center justify-between py-3"
        };

        return view! {
            <li class=class on:click=on_click>
                <div>
                    <div class="font-medium text-gray-900">{event.title.clone()}</div>
                    <div class="text-sm text-gray-500">{format!("{} | {}", event.short_date(), event.time)}</div>
                </div>
                <span class=format!("text-xs font-medium px-2 py-1 rounded-full {}", event.color_tag)>
                    {event.kind.name()}
                </span>
            </li>
        }
        .into_view();
    }

    view! {
        <li class="ml-6">
            <span class=format!(
                "absolute -left-[9px] w-4 h-4 rounded-full border-2 {}",
                timeline_dot_class(event.kind),
            ) />
            <div class="flex items-center space-x-2">
                <span class=format!("text-xs font-medium px-2 py-0.5 rounded {}", event.color_tag)>
                    {event.kind.name()}
                </span>
                <span class="text-sm text-gray-500">{format!("{} at {}", event.long_date(), event.time)}</span>
            </div>
            <div class="font-semibold text-gray-900 mt-1">{event.title.clone()}</div>
            <p class="text-sm text-gray-600">{event.detail.clone()}</p>
        </li>
    }
    .into_view()
}

#[component]
fn QuickCalendar() -> impl IntoView {
    let state = use_app_state();

    let Some(month) = CalendarMonth::build(&state.config.calendar) else {
        tracing::warn!("Calendar month {:?} is invalid", state.config.calendar);
        return view! {}.into_view();
    };

    view! {
        <section class="bg-white rounded-xl p-6 shadow-sm border border-gray-100">
            <h2 class="text-lg font-semibold mb-4">{month.title.clone()}</h2>
            <div class="grid grid-cols-7 gap-1 text-center text-sm">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|d| view! { <div class="text-gray-400 font-medium py-1">{*d}</div> })
                    .collect_view()}
                {(0..month.leading_blanks)
                    .map(|_| view! { <div /> })
                    .collect_view()}
                {month.days
                    .iter()
                    .map(|day| {
                        let class = if day.critical {
                            "py-1 rounded-full bg-red-100 text-red-700 font-semibold"
                        } else {
                            "py-1 rounded-full text-gray-700"
                        };
                        view! { <div class=class>{day.day}</div> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
    .into_view()
}
