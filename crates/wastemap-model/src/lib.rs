#![forbid(unsafe_code)]
//! Wastemap model SSOT.
//!
//! Domain types shared by the filter core: the closed facet enumerations
//! used by the upstream reporting API, the minimal waste-record projection,
//! and the immutable river hierarchy with its compiled-in Danube basin table.
//!
//! ```compile_fail
//! use wastemap_model::Status;
//!
//! fn exhaustive_match(s: Status) -> &'static str {
//!     match s {
//!         Status::StillHere => "here",
//!         Status::Cleaned => "cleaned",
//!     }
//! }
//! ```

mod basin;
mod river;
mod waste;

pub use basin::{danube_basin, trunk_rivers, TRUNK_RIVER_TOKENS};
pub use river::{HierarchyError, RiverHierarchy, RiverName, RiverNode};
pub use waste::{Country, ParseError, Size, Status, WasteRecord, WasteType};

pub const CRATE_NAME: &str = "wastemap-model";
