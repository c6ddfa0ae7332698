// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};

use wastemap_model::WasteRecord;

use crate::scope::RiverScope;
use crate::selection::FilterSelection;

/// Whether one record passes every active filter.
///
/// A fixed short-circuit conjunction; the order only matters for speed.
/// Country, size and status are all-or-nothing facets: an empty set rejects
/// every record, so callers keep at least one value selected per facet. The
/// time bound is inclusive ("activity since the cutoff"), and the type facet
/// is conjunctive: a record must carry every selected type.
#[must_use]
pub fn is_eligible(
    authenticated: bool,
    record: &WasteRecord,
    selection: &FilterSelection,
    cutoff: DateTime<Utc>,
    scope: &RiverScope,
) -> bool {
    if record.hidden && !authenticated {
        return false;
    }
    if cutoff > record.update_time {
        return false;
    }
    if !selection.countries.contains(&record.country) {
        return false;
    }
    if !scope.admits(&record.river) {
        return false;
    }
    if !selection.sizes.contains(&record.size) {
        return false;
    }
    if !selection.statuses.contains(&record.status) {
        return false;
    }
    selection
        .types
        .iter()
        .all(|waste_type| record.types.contains(waste_type))
}
