//! Circular progress indicator drawn with two SVG circles

use campus::views::ProgressRing as Ring;
use leptos::*;

#[component]
pub fn ProgressRing(ring: Ring) -> impl IntoView {
    let center = ring.size / 2.0;
    let radius = ring.radius();
    let circumference = ring.circumference();
    let offset = ring.dash_offset();

    view! {
        <div class="flex flex-col items-center">
            <div class="relative" style=format!("width: {}px; height: {}px", ring.size, ring.size)>
                <svg width=ring.size height=ring.size class="-rotate-90">
                    <circle
                        cx=center
                        cy=center
                        r=radius
                        fill="transparent"
                        stroke-width=Ring::STROKE
                        class="stroke-gray-200"
                    />
                    <circle
                        cx=center
                        cy=center
                        r=radius
                        fill="transparent"
                        stroke-width=Ring::STROKE
                        stroke-linecap="round"
                        stroke-dasharray=circumference
                        stroke-dashoffset=offset
                        class=format!("stroke-{}-500 transition-all duration-700", ring.color)
                    />
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-2xl font-bold text-gray-900">{format!("{}%", ring.value)}</span>
                </div>
            </div>
            <span class="mt-2 text-sm text-gray-600">{ring.label}</span>
        </div>
    }
}
