//! HTTP API Client
//!
//! Functions for communicating with the chart backend and the Nominatim
//! geocoding service.

use gloo_net::http::Request;

use crate::state::global::{BirthInput, Chart, Interpretations};

/// Default API base URL; empty means same-origin
pub const DEFAULT_API_BASE: &str = "";

/// Place-search endpoint of the geocoding service
const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Maximum number of autocomplete suggestions requested per query
pub const PLACE_LIMIT: usize = 5;

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("cosmogram_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Wire Types ============

#[derive(Debug, serde::Deserialize)]
struct ChartResponse {
    chart: Chart,
}

/// A place match from the geocoder; only the display name is used
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Place {
    pub display_name: String,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: String,
}

#[derive(serde::Serialize)]
struct ExportRequest<'a> {
    chart: &'a Chart,
    user: &'a BirthInput,
}

// ============ API Functions ============

/// Fetch the interpretation tables, once at startup
pub async fn fetch_interpretations() -> Result<Interpretations, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/interpretations", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Search the geocoder for places matching a partial city name
pub async fn search_places(query: &str) -> Result<Vec<Place>, String> {
    let response = Request::get(&place_search_url(query))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Place search failed: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Post birth data and receive the computed chart
pub async fn compute_chart(input: &BirthInput) -> Result<Chart, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chart", api_base))
        .json(input)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    let result: ChartResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.chart)
}

/// Post the current chart plus its birth input and receive the PDF bytes
pub async fn export_pdf(chart: &Chart, user: &BirthInput) -> Result<Vec<u8>, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/export-pdf", api_base))
        .json(&ExportRequest { chart, user })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response).await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

fn place_search_url(query: &str) -> String {
    format!(
        "{}?format=json&q={}&limit={}",
        NOMINATIM_URL,
        urlencoding::encode(query),
        PLACE_LIMIT
    )
}

async fn read_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(api_error) => api_error.error,
        Err(_) => format!("HTTP {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::global::Placement;

    #[test]
    fn test_chart_response_deserializes() {
        let json = r#"{"chart": {"sun": {"sign": "Aries", "house": 10, "degree": 3.52}}}"#;
        let response: ChartResponse = serde_json::from_str(json).unwrap();

        let sun = &response.chart["sun"];
        assert_eq!(sun.sign, "Aries");
        assert_eq!(sun.house, 10);
        assert!((sun.degree - 3.52).abs() < f64::EPSILON);
    }

    #[test]
    fn test_place_ignores_extra_fields() {
        let json = r#"[{"display_name": "Lisboa, Portugal", "lat": "38.72", "lon": "-9.14"}]"#;
        let places: Vec<Place> = serde_json::from_str(json).unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].display_name, "Lisboa, Portugal");
    }

    #[test]
    fn test_place_search_url_encodes_query() {
        let url = place_search_url("são paulo");
        assert!(url.starts_with(NOMINATIM_URL));
        assert!(url.contains("q=s%C3%A3o%20paulo"));
        assert!(url.ends_with("limit=5"));
    }

    #[test]
    fn test_export_request_shape() {
        let mut chart = Chart::new();
        chart.insert(
            "moon".to_string(),
            Placement {
                sign: "Cancer".to_string(),
                house: 4,
                degree: 22.0,
            },
        );
        let user = BirthInput {
            date: "1990-04-01".to_string(),
            time: "08:30".to_string(),
            city: "Lisboa, Portugal".to_string(),
        };

        let value = serde_json::to_value(ExportRequest {
            chart: &chart,
            user: &user,
        })
        .unwrap();

        assert_eq!(value["user"]["date"], "1990-04-01");
        assert_eq!(value["user"]["time"], "08:30");
        assert_eq!(value["chart"]["moon"]["sign"], "Cancer");
        assert_eq!(value["chart"]["moon"]["house"], 4);
    }
}
