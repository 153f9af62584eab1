//! PDF Export Component
//!
//! Posts the current chart back to the export service and hands the
//! returned bytes to the browser as a file download.

use js_sys::{Array, Uint8Array};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::api;
use crate::state::global::AppState;

/// Fixed name of the downloaded report
pub const REPORT_FILENAME: &str = "Cosmic_Report.pdf";

const IDLE_LABEL: &str = "DOWNLOAD COSMIC REPORT (PDF)";
const BUSY_LABEL: &str = "PREPARING REPORT...";

/// PDF download section, rendered once a chart exists
#[component]
pub fn PdfExport() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (exporting, set_exporting) = create_signal(false);

    let state_for_export = state;
    let on_export = move |_| {
        let chart = match state_for_export.chart.get() {
            Some(chart) => chart,
            None => return,
        };
        let birth = state_for_export.birth.get().unwrap_or_default();

        set_exporting.set(true);

        let state_clone = state_for_export.clone();
        spawn_local(async move {
            match api::export_pdf(&chart, &birth).await {
                Ok(bytes) => {
                    if trigger_download(&bytes, REPORT_FILENAME).is_some() {
                        state_clone.show_success("Report downloaded");
                    } else {
                        state_clone.show_error("Could not start the report download");
                    }
                }
                Err(e) => {
                    state_clone.show_error(&format!("Report export failed: {}", e));
                }
            }
            set_exporting.set(false);
        });
    };

    view! {
        <section id="pdf-section" class="mt-10 text-center">
            <button
                id="pdfBtn"
                on:click=on_export
                disabled=move || exporting.get()
                class="px-8 py-3 bg-indigo-600 hover:bg-indigo-500 disabled:bg-slate-600
                       rounded-lg font-semibold tracking-widest transition-colors"
            >
                {move || if exporting.get() { BUSY_LABEL } else { IDLE_LABEL }}
            </button>
        </section>
    }
}

/// Wrap the PDF bytes in an object URL and click a synthetic anchor at it
fn trigger_download(bytes: &[u8], filename: &str) -> Option<()> {
    let array = Uint8Array::new_with_length(bytes.len() as u32);
    array.copy_from(bytes);
    let parts = Array::new();
    parts.push(&array.buffer().into());

    let bag = BlobPropertyBag::new();
    bag.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(parts.as_ref(), &bag).ok()?;
    let url = Url::create_object_url_with_blob(&blob).ok()?;

    let document = web_sys::window()?.document()?;
    let anchor = document.create_element("a").ok()?;
    let _ = anchor.set_attribute("href", &url);
    let _ = anchor.set_attribute("download", filename);
    anchor.dyn_ref::<web_sys::HtmlElement>()?.click();
    let _ = Url::revoke_object_url(&url);

    Some(())
}
