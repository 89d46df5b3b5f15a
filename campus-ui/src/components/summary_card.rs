//! Summary Card Component
//!
//! One headline metric; clicking it opens the page the card links to.

use campus::views::SummaryCard as Card;
use leptos::*;

use crate::state::navigation::use_navigation;

#[component]
pub fn SummaryCard(card: Card) -> impl IntoView {
    let navigation = use_navigation();
    let link = card.link;

    view! {
        <button
            on:click=move |_| navigation.go(link)
            class="text-left bg-white rounded-xl p-5 shadow-sm border border-gray-100 hover:shadow-md hover:border-cyan-200 transition"
        >
            <div class="flex items-center justify-between">
                <span class="text-sm text-gray-500">{card.title}</span>
                <span class="text-xl">{card.icon.glyph()}</span>
            </div>
            <div class=format!("text-3xl font-bold mt-2 {}", card.tier.text_class())>
                {card.value}
            </div>
        </button>
    }
}
