// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use wastemap_model::{Country, RiverHierarchy, RiverName, Size, Status, WasteType};

use crate::token::FilterToken;

/// Active facet filters, one set per facet.
///
/// Structured replacement for the upstream UI's flat string-token set: the
/// observable matching behavior is unchanged, but each token lives in its
/// facet. River names are only admitted here after classification against a
/// hierarchy, so every name in `rivers` is known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub countries: BTreeSet<Country>,
    pub sizes: BTreeSet<Size>,
    pub statuses: BTreeSet<Status>,
    pub types: BTreeSet<WasteType>,
    pub rivers: BTreeSet<RiverName>,
}

impl FilterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from a flat token list. Tokens that classify to no
    /// facet are ignored, matching the permissive upstream behavior.
    #[must_use]
    pub fn from_tokens<'a, I>(hierarchy: &RiverHierarchy, tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut selection = Self::default();
        for raw in tokens {
            match FilterToken::classify(hierarchy, raw) {
                Some(token) => selection.select(token),
                None => tracing::debug!(token = raw, "ignoring unknown filter token"),
            }
        }
        selection
    }

    #[must_use]
    pub fn contains(&self, token: &FilterToken) -> bool {
        match token {
            FilterToken::Country(country) => self.countries.contains(country),
            FilterToken::Size(size) => self.sizes.contains(size),
            FilterToken::Status(status) => self.statuses.contains(status),
            FilterToken::Type(waste_type) => self.types.contains(waste_type),
            FilterToken::River(name) => self.rivers.contains(name),
        }
    }

    pub fn select(&mut self, token: FilterToken) {
        match token {
            FilterToken::Country(country) => {
                self.countries.insert(country);
            }
            FilterToken::Size(size) => {
                self.sizes.insert(size);
            }
            FilterToken::Status(status) => {
                self.statuses.insert(status);
            }
            FilterToken::Type(waste_type) => {
                self.types.insert(waste_type);
            }
            FilterToken::River(name) => {
                self.rivers.insert(name);
            }
        }
    }

    /// Removes a token. Deselecting a river also deselects every selected
    /// river of equal or higher rank, keeping the remaining selection on a
    /// single branch the way the upstream filter menu does.
    pub fn deselect(&mut self, hierarchy: &RiverHierarchy, token: &FilterToken) {
        match token {
            FilterToken::Country(country) => {
                self.countries.remove(country);
            }
            FilterToken::Size(size) => {
                self.sizes.remove(size);
            }
            FilterToken::Status(status) => {
                self.statuses.remove(status);
            }
            FilterToken::Type(waste_type) => {
                self.types.remove(waste_type);
            }
            FilterToken::River(name) => {
                self.rivers.remove(name);
                if let Some(node) = hierarchy.get(name) {
                    let rank = node.rank;
                    self.rivers
                        .retain(|river| hierarchy.get(river).is_some_and(|n| n.rank < rank));
                }
            }
        }
    }

    /// Non-destructive add, used by the facet count sweep to evaluate
    /// "what if this token were selected".
    #[must_use]
    pub fn with(&self, token: FilterToken) -> Self {
        let mut trial = self.clone();
        trial.select(token);
        trial
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
            && self.sizes.is_empty()
            && self.statuses.is_empty()
            && self.types.is_empty()
            && self.rivers.is_empty()
    }
}
