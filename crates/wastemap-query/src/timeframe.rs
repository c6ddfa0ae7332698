// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Months, Utc};

/// Bounds for the report-time slider: one year of history, defaulting to the
/// oldest end (show everything).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub earliest: DateTime<Utc>,
    pub latest: DateTime<Utc>,
    pub default_cutoff: DateTime<Utc>,
}

/// Takes `now` as a parameter so the core stays deterministic; only the
/// embedding UI reads the wall clock.
#[must_use]
pub fn report_window(now: DateTime<Utc>) -> ReportWindow {
    let earliest = now
        .checked_sub_months(Months::new(12))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    ReportWindow {
        earliest,
        latest: now,
        default_cutoff: earliest,
    }
}
