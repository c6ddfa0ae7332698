#![forbid(unsafe_code)]
//! Filter core of the wastemap application.
//!
//! Pure, synchronous evaluation over immutable snapshots: the caller fetches
//! waste records and holds UI filter state; this crate decides which records
//! are eligible under the active facet filters, resolves river selections
//! against the tributary hierarchy, and aggregates per-token facet counts.

mod counts;
mod eligibility;
mod scope;
mod selection;
mod timeframe;
mod token;

pub use counts::{facet_counts, FacetCounts};
pub use eligibility::is_eligible;
pub use scope::{resolve_scope, selectable_rivers, RiverScope};
pub use selection::FilterSelection;
pub use timeframe::{report_window, ReportWindow};
pub use token::FilterToken;

pub const CRATE_NAME: &str = "wastemap-query";
