//! UI Components
//!
//! Reusable Leptos components for the chart page.

pub mod birth_form;
pub mod detail_view;
pub mod pdf_export;
pub mod placement_card;
pub mod starfield;
pub mod toast;

pub use birth_form::BirthForm;
pub use detail_view::DetailView;
pub use pdf_export::PdfExport;
pub use placement_card::PlacementGrid;
pub use starfield::Starfield;
pub use toast::Toast;
