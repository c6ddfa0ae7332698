// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use wastemap_model::{Country, RiverHierarchy, Size, Status, WasteRecord, WasteType};

use crate::eligibility::is_eligible;
use crate::scope::{resolve_scope, selectable_rivers};
use crate::selection::FilterSelection;
use crate::token::FilterToken;

/// Result of one facet count sweep: the current eligible count plus, per
/// candidate token, how many records would be eligible with that token
/// selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCounts {
    pub eligible: usize,
    pub by_token: BTreeMap<String, usize>,
}

impl FacetCounts {
    #[must_use]
    pub fn count_for(&self, token: &str) -> Option<usize> {
        self.by_token.get(token).copied()
    }
}

/// Sweeps every candidate facet token over the record set.
///
/// Candidates are all countries, the currently selectable rivers, all sizes,
/// all types and all statuses. Already-selected tokens reuse the current
/// eligible count. For the rest, the facets split two ways:
///
/// - type and river only narrow the selection, so the trial count walks the
///   currently eligible records;
/// - country, size and status only widen it, so the trial count walks the
///   currently ineligible records and adds the current eligible count.
///
/// O(tokens x records); no caching beyond the reuse above.
#[must_use]
pub fn facet_counts(
    records: &[WasteRecord],
    hierarchy: &RiverHierarchy,
    selection: &FilterSelection,
    cutoff: DateTime<Utc>,
    authenticated: bool,
) -> FacetCounts {
    let scope = resolve_scope(hierarchy, &selection.rivers);
    let (eligible, ineligible): (Vec<&WasteRecord>, Vec<&WasteRecord>) = records
        .iter()
        .partition(|record| is_eligible(authenticated, record, selection, cutoff, &scope));
    let current = eligible.len();

    let candidates: Vec<FilterToken> = Country::ALL
        .iter()
        .map(|c| FilterToken::Country(*c))
        .chain(
            selectable_rivers(hierarchy, selection)
                .into_iter()
                .map(FilterToken::River),
        )
        .chain(Size::ALL.iter().map(|s| FilterToken::Size(*s)))
        .chain(WasteType::ALL.iter().map(|t| FilterToken::Type(*t)))
        .chain(Status::ALL.iter().map(|s| FilterToken::Status(*s)))
        .collect();

    let mut by_token: BTreeMap<String, usize> = BTreeMap::new();
    for token in candidates {
        let count = if selection.contains(&token) {
            current
        } else {
            let narrowing = matches!(token, FilterToken::Type(_) | FilterToken::River(_));
            let trial = selection.with(token.clone());
            let trial_scope = resolve_scope(hierarchy, &trial.rivers);
            if narrowing {
                eligible
                    .iter()
                    .filter(|record| {
                        is_eligible(authenticated, record, &trial, cutoff, &trial_scope)
                    })
                    .count()
            } else {
                current
                    + ineligible
                        .iter()
                        .filter(|record| {
                            is_eligible(authenticated, record, &trial, cutoff, &trial_scope)
                        })
                        .count()
            }
        };
        by_token.insert(token.as_token().to_string(), count);
    }

    tracing::debug!(
        records = records.len(),
        eligible = current,
        tokens = by_token.len(),
        "facet count sweep complete"
    );
    FacetCounts {
        eligible: current,
        by_token,
    }
}
