//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the chart domain
//! vocabulary: body keys, glyphs, display names and ordering.

use leptos::*;
use std::collections::HashMap;

/// Bodies and chart points in the order their cards are rendered.
/// Keys returned by the chart endpoint are always a subset of this list.
pub const DISPLAY_ORDER: [&str; 15] = [
    "sun",
    "moon",
    "mercury",
    "venus",
    "mars",
    "jupiter",
    "saturn",
    "uranus",
    "neptune",
    "pluto",
    "chiron",
    "part_of_fortune",
    "regulus",
    "juno",
    "rising",
];

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Interpretation lookup tables, loaded once at startup
    pub interpretations: RwSignal<Interpretations>,
    /// The last computed chart, overwritten on each submission
    pub chart: RwSignal<Option<Chart>>,
    /// Birth input that produced the current chart (resent on PDF export)
    pub birth: RwSignal<Option<BirthInput>>,
    /// Which top-level view is visible
    pub view: RwSignal<View>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Position of a single body or chart point
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Placement {
    pub sign: String,
    pub house: u32,
    pub degree: f64,
}

/// A computed chart: body key to placement
pub type Chart = HashMap<String, Placement>;

/// Birth data as submitted through the form
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct BirthInput {
    pub date: String,
    pub time: String,
    pub city: String,
}

/// Interpretation text tables keyed by display name.
///
/// House numbers arrive as JSON object keys, so the inner maps are keyed by
/// their string form.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Interpretations {
    #[serde(default)]
    pub planet_sign: HashMap<String, HashMap<String, String>>,
    #[serde(default)]
    pub planet_house: HashMap<String, HashMap<String, String>>,
}

impl Interpretations {
    /// Text for a body in a given sign, if the tables carry one
    pub fn sign_text(&self, name: &str, sign: &str) -> Option<String> {
        self.planet_sign
            .get(name)
            .and_then(|by_sign| by_sign.get(sign))
            .cloned()
    }

    /// Text for a body in a given house, if the tables carry one
    pub fn house_text(&self, name: &str, house: u32) -> Option<String> {
        self.planet_house
            .get(name)
            .and_then(|by_house| by_house.get(&house.to_string()))
            .cloned()
    }
}

/// Top-level view toggle between the card grid and a single body's detail
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Grid,
    Detail(String),
}

/// Glyph for a body key; unknown keys render as nothing
pub fn glyph(body: &str) -> &'static str {
    match body {
        "sun" => "☉",
        "moon" => "☽",
        "mercury" => "☿",
        "venus" => "♀",
        "mars" => "♂",
        "jupiter" => "♃",
        "saturn" => "♄",
        "uranus" => "♅",
        "neptune" => "♆",
        "pluto" => "♇",
        "chiron" => "⚷",
        "juno" => "⚵",
        "rising" => "ASC",
        "part_of_fortune" => "⊗",
        "regulus" => "★",
        _ => "",
    }
}

/// Human-readable name for a body key, used as the interpretation lookup key
pub fn display_name(body: &str) -> String {
    match body {
        "part_of_fortune" => "Part of Fortune".to_string(),
        "regulus" => "Regulus".to_string(),
        "rising" => "Rising".to_string(),
        _ => {
            let mut chars = body.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

/// Card heading for a body key: underscores to spaces, uppercased
pub fn card_label(body: &str) -> String {
    body.replace('_', " ").to_uppercase()
}

/// Placements present in the chart, in display order. Bodies the backend did
/// not return are skipped, not treated as an error.
pub fn ordered_placements(chart: &Chart) -> Vec<(&'static str, Placement)> {
    DISPLAY_ORDER
        .iter()
        .filter_map(|key| chart.get(*key).map(|placement| (*key, placement.clone())))
        .collect()
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        interpretations: create_rw_signal(Interpretations::default()),
        chart: create_rw_signal(None),
        birth: create_rw_signal(None),
        view: create_rw_signal(View::Grid),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl AppState {
    /// Open the detail view for a body and scroll back to the top
    pub fn open_detail(&self, body: &str) {
        self.view.set(View::Detail(body.to_string()));
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Restore the card grid
    pub fn show_grid(&self) {
        self.view.set(View::Grid);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(sign: &str, house: u32, degree: f64) -> Placement {
        Placement {
            sign: sign.to_string(),
            house,
            degree,
        }
    }

    #[test]
    fn test_ordered_placements_follow_display_order() {
        let mut chart = Chart::new();
        chart.insert("rising".to_string(), placement("Leo", 1, 14.2));
        chart.insert("sun".to_string(), placement("Aries", 10, 3.52));
        chart.insert("moon".to_string(), placement("Cancer", 4, 22.0));

        let keys: Vec<&str> = ordered_placements(&chart).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["sun", "moon", "rising"]);
    }

    #[test]
    fn test_ordered_placements_skip_missing_bodies() {
        let mut chart = Chart::new();
        for key in DISPLAY_ORDER {
            chart.insert(key.to_string(), placement("Virgo", 6, 1.0));
        }
        chart.remove("regulus");

        let ordered = ordered_placements(&chart);
        assert_eq!(ordered.len(), DISPLAY_ORDER.len() - 1);
        assert!(ordered.iter().all(|(key, _)| *key != "regulus"));
    }

    #[test]
    fn test_ordered_placements_ignore_unknown_keys() {
        let mut chart = Chart::new();
        chart.insert("sun".to_string(), placement("Aries", 10, 3.52));
        chart.insert("vertex".to_string(), placement("Libra", 7, 9.9));

        let ordered = ordered_placements(&chart);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].0, "sun");
    }

    #[test]
    fn test_display_name_special_cases() {
        assert_eq!(display_name("part_of_fortune"), "Part of Fortune");
        assert_eq!(display_name("regulus"), "Regulus");
        assert_eq!(display_name("rising"), "Rising");
    }

    #[test]
    fn test_display_name_title_cases_planets() {
        assert_eq!(display_name("sun"), "Sun");
        assert_eq!(display_name("neptune"), "Neptune");
    }

    #[test]
    fn test_card_label_formats_underscores() {
        assert_eq!(card_label("part_of_fortune"), "PART OF FORTUNE");
        assert_eq!(card_label("sun"), "SUN");
    }

    #[test]
    fn test_glyphs_cover_display_order() {
        for key in DISPLAY_ORDER {
            assert!(!glyph(key).is_empty(), "no glyph for {}", key);
        }
        assert_eq!(glyph("vertex"), "");
    }

    #[test]
    fn test_interpretation_lookup() {
        let json = r#"{
            "planet_sign": {"Sun": {"Aries": "Bold and direct."}},
            "planet_house": {"Sun": {"10": "Ambition shapes the public life."}}
        }"#;
        let tables: Interpretations = serde_json::from_str(json).unwrap();

        assert_eq!(tables.sign_text("Sun", "Aries").as_deref(), Some("Bold and direct."));
        assert_eq!(tables.sign_text("Sun", "Leo"), None);
        assert_eq!(
            tables.house_text("Sun", 10).as_deref(),
            Some("Ambition shapes the public life.")
        );
        assert_eq!(tables.house_text("Moon", 4), None);
    }

    #[test]
    fn test_interpretations_default_to_empty_tables() {
        let tables: Interpretations = serde_json::from_str("{}").unwrap();
        assert!(tables.sign_text("Sun", "Aries").is_none());
        assert!(tables.house_text("Sun", 1).is_none());
    }
}
