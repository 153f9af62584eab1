//! Placement Card Components
//!
//! Grid of result cards, one per body returned by the chart endpoint.

use leptos::*;

use crate::state::global::{card_label, glyph, ordered_placements, AppState, Placement};

/// Card grid for the current chart
#[component]
pub fn PlacementGrid() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div id="results" class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4">
            {move || {
                state.chart.get().map(|chart| {
                    ordered_placements(&chart)
                        .into_iter()
                        .map(|(body, placement)| view! {
                            <PlacementCard body=body placement=placement />
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// A single body's card; opens the detail view on click
#[component]
fn PlacementCard(body: &'static str, placement: Placement) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div
            on:click=move |_| state.open_detail(body)
            class="bg-slate-800/80 rounded-lg p-4 text-center cursor-pointer border border-slate-700
                   hover:border-indigo-400 transition"
        >
            <span class="block text-3xl text-indigo-300">{glyph(body)}</span>
            <h2 class="mt-2 text-sm font-semibold tracking-widest">{card_label(body)}</h2>
            <p class="mt-1 font-semibold text-lg">{placement.sign.clone()}</p>
            <small class="text-indigo-200/70">{format!("House {}", placement.house)}</small>
        </div>
    }
}
