//! HTTP API Client
//!
//! Network glue to the chart, interpretation, export and geocoding services.

pub mod client;

pub use client::*;
