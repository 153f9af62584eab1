//! Detail View Component
//!
//! Full-page view of one body: glyph, placement line and interpretation
//! text looked up from the tables loaded at startup.

use leptos::*;

use crate::state::global::{display_name, glyph, AppState, Placement};

fn headline(placement: &Placement) -> String {
    format!(
        "{} — {}° — House {}",
        placement.sign, placement.degree, placement.house
    )
}

/// Detail view for a single body key
#[component]
pub fn DetailView(#[prop(into)] body: String) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let name = display_name(&body);
    let symbol = glyph(&body);

    let state_for_placement = state.clone();
    let body_for_placement = body.clone();
    let placement = create_memo(move |_| {
        state_for_placement
            .chart
            .get()
            .and_then(|chart| chart.get(&body_for_placement).cloned())
    });

    let state_for_back = state.clone();
    let state_for_body = state;
    let name_for_body = name.clone();

    view! {
        <div id="detailView" class="max-w-2xl mx-auto py-12">
            <button
                on:click=move |_| state_for_back.show_grid()
                class="mb-8 px-4 py-2 bg-slate-800 hover:bg-slate-700 rounded-lg text-sm transition-colors"
            >
                "← Back to chart"
            </button>

            <div class="text-center">
                <span id="detailGlyph" class="block text-6xl text-indigo-300">{symbol}</span>
                <h1 id="detailTitle" class="mt-4 text-3xl font-bold">{name}</h1>
            </div>

            <div id="detailBody" class="mt-8">
                {move || {
                    placement.get().map(|p| {
                        let tables = state_for_body.interpretations.get();
                        let sign_text = tables.sign_text(&name_for_body, &p.sign);
                        let house_text = tables.house_text(&name_for_body, p.house);

                        view! {
                            <p class="text-lg font-bold text-center text-indigo-200">
                                {headline(&p)}
                            </p>
                            <hr class="my-8 border-slate-700" />
                            {sign_text.map(|text| view! {
                                <p class="leading-relaxed text-slate-200 mb-4">{text}</p>
                            })}
                            {house_text.map(|text| view! {
                                <p class="leading-relaxed text-slate-200">{text}</p>
                            })}
                        }
                    })
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_carries_sign_degree_and_house() {
        let placement = Placement {
            sign: "Aries".to_string(),
            house: 10,
            degree: 3.52,
        };
        assert_eq!(headline(&placement), "Aries — 3.52° — House 10");
    }

    #[test]
    fn test_headline_drops_trailing_zero_like_the_backend_sends() {
        let placement = Placement {
            sign: "Cancer".to_string(),
            house: 4,
            degree: 22.0,
        };
        assert_eq!(headline(&placement), "Cancer — 22° — House 4");
    }
}
