//! Birth Form Component
//!
//! Birth data inputs, city autocomplete and chart submission.

use leptos::*;

use crate::api;
use crate::state::global::{AppState, BirthInput};

/// Queries shorter than this never reach the geocoder
const MIN_QUERY_LEN: usize = 3;

const IDLE_LABEL: &str = "GENERATE CHART";
const BUSY_LABEL: &str = "CALCULATING...";

fn should_query(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Birth data form component
#[component]
pub fn BirthForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (date, set_date) = create_signal(String::new());
    let (time, set_time) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (suggestions, set_suggestions) = create_signal(Vec::<String>::new());
    let (submitting, set_submitting) = create_signal(false);

    // Bumped on every keystroke; a response is applied only while its
    // generation is still current, so stale results never win
    let query_generation = store_value(0u64);

    let on_city_input = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        set_city.set(query.clone());

        let generation = query_generation.with_value(|g| g + 1);
        query_generation.set_value(generation);

        if !should_query(&query) {
            set_suggestions.set(Vec::new());
            return;
        }

        spawn_local(async move {
            match api::search_places(&query).await {
                Ok(places) => {
                    if query_generation.get_value() == generation {
                        set_suggestions.set(places.into_iter().map(|p| p.display_name).collect());
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Place search failed: {}", e).into());
                }
            }
        });
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = BirthInput {
            date: date.get(),
            time: time.get(),
            city: city.get(),
        };

        set_submitting.set(true);
        set_suggestions.set(Vec::new());

        let state_clone = state_for_submit.clone();
        spawn_local(async move {
            match api::compute_chart(&input).await {
                Ok(chart) => {
                    state_clone.chart.set(Some(chart));
                    state_clone.birth.set(Some(input));
                }
                Err(e) => {
                    state_clone.show_error(&format!("Chart calculation failed: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form id="astroForm" on:submit=on_submit class="space-y-4">
            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <label class="block text-sm text-indigo-200 mb-2">"Birth date"</label>
                    <input
                        type="date"
                        id="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        class="w-full bg-slate-800 rounded-lg px-4 py-3
                               border border-slate-600 focus:border-indigo-400 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-indigo-200 mb-2">"Birth time"</label>
                    <input
                        type="time"
                        id="time"
                        prop:value=move || time.get()
                        on:input=move |ev| set_time.set(event_target_value(&ev))
                        class="w-full bg-slate-800 rounded-lg px-4 py-3
                               border border-slate-600 focus:border-indigo-400 focus:outline-none"
                    />
                </div>
            </div>

            <div class="relative">
                <label class="block text-sm text-indigo-200 mb-2">"Birth place"</label>
                <input
                    type="text"
                    id="city"
                    placeholder="Start typing a city..."
                    autocomplete="off"
                    prop:value=move || city.get()
                    on:input=on_city_input
                    class="w-full bg-slate-800 rounded-lg px-4 py-3
                           border border-slate-600 focus:border-indigo-400 focus:outline-none"
                />

                <ul id="suggestions" class="absolute z-20 w-full bg-slate-800 rounded-lg shadow-lg divide-y divide-slate-700">
                    {move || {
                        suggestions.get().into_iter().map(|name| {
                            let fill = name.clone();
                            view! {
                                <li
                                    on:click=move |_| {
                                        set_city.set(fill.clone());
                                        set_suggestions.set(Vec::new());
                                    }
                                    class="px-4 py-2 text-sm cursor-pointer hover:bg-slate-700"
                                >
                                    {name}
                                </li>
                            }
                        }).collect_view()
                    }}
                </ul>
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-indigo-600 hover:bg-indigo-500 disabled:bg-slate-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold tracking-widest
                       transition-colors"
            >
                {move || if submitting.get() { BUSY_LABEL } else { IDLE_LABEL }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_do_not_search() {
        assert!(!should_query(""));
        assert!(!should_query("ab"));
    }

    #[test]
    fn test_three_characters_reach_the_geocoder() {
        assert!(should_query("rio"));
        assert!(should_query("lisbon"));
    }

    #[test]
    fn test_query_threshold_counts_characters_not_bytes() {
        assert!(!should_query("sã"));
        assert!(should_query("são"));
    }
}
