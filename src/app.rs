//! App Root Component
//!
//! Top-level layout, global providers and the grid/detail view toggle.

use leptos::*;

use crate::api;
use crate::components::{BirthForm, DetailView, PdfExport, PlacementGrid, Starfield, Toast};
use crate::state::global::{provide_app_state, AppState, View};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    let state = use_context::<AppState>().expect("AppState not found");

    // Load the interpretation tables once at startup. A failure leaves the
    // tables empty and detail views simply render without text.
    let state_for_load = state.clone();
    create_effect(move |_| {
        let state = state_for_load.clone();
        spawn_local(async move {
            match api::fetch_interpretations().await {
                Ok(tables) => {
                    state.interpretations.set(tables);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load interpretations: {}", e).into());
                    state.show_error("Interpretation texts are unavailable");
                }
            }
        });
    });

    view! {
        <Starfield />

        <div class="relative z-10 min-h-screen text-white">
            <main class="container mx-auto px-4 py-10">
                {move || match state.view.get() {
                    View::Grid => view! { <MainView /> }.into_view(),
                    View::Detail(body) => view! { <DetailView body=body /> }.into_view(),
                }}
            </main>
        </div>

        // Toast notifications
        <Toast />
    }
}

/// Grid view: header, birth form, result cards and the PDF section
#[component]
fn MainView() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <div id="mainUI" class="max-w-3xl mx-auto space-y-10">
            <header class="text-center">
                <h1 class="text-4xl font-bold tracking-widest">"COSMOGRAM"</h1>
                <p class="text-indigo-200 mt-2">"Cast your natal chart"</p>
            </header>

            <section class="bg-slate-900/70 rounded-xl p-6">
                <BirthForm />
            </section>

            <PlacementGrid />

            {move || state.chart.get().is_some().then(|| view! { <PdfExport /> })}
        </div>
    }
}
