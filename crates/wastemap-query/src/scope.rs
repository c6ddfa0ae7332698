// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use wastemap_model::{trunk_rivers, RiverHierarchy, RiverName, RiverNode};

use crate::selection::FilterSelection;

/// The set of river names a record may sit on to pass the river facet.
///
/// `Unrestricted` means the facet is inactive; it is deliberately distinct
/// from an empty `Within` set, which would reject every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiverScope {
    Unrestricted,
    Within(BTreeSet<RiverName>),
}

impl RiverScope {
    /// Whether a record's raw river field passes this scope. The raw value is
    /// compared as a case-normalized name; values unknown to the hierarchy
    /// never match a restricted scope but always pass an unrestricted one.
    #[must_use]
    pub fn admits(&self, river: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Within(names) => {
                RiverName::parse(river).is_ok_and(|name| names.contains(&name))
            }
        }
    }
}

/// The selected node with the highest rank; ties go to the first name in
/// lexicographic order (the upstream source never defined a tie-break).
fn max_rank_node<'a>(
    hierarchy: &'a RiverHierarchy,
    selected: &BTreeSet<RiverName>,
) -> Option<&'a RiverNode> {
    let mut anchor: Option<&RiverNode> = None;
    for name in selected {
        let Some(node) = hierarchy.get(name) else {
            continue;
        };
        match anchor {
            Some(best) if node.rank <= best.rank => {}
            _ => anchor = Some(node),
        }
    }
    anchor
}

/// Resolves the selected rivers into the effective matching set.
///
/// An empty selection is unrestricted. Otherwise the highest-rank selected
/// segment anchors the scope and the result is its downstream closure;
/// selected rivers outside that branch are dropped, matching the upstream
/// single-branch behavior.
#[must_use]
pub fn resolve_scope(hierarchy: &RiverHierarchy, selected: &BTreeSet<RiverName>) -> RiverScope {
    let Some(anchor) = max_rank_node(hierarchy, selected) else {
        return RiverScope::Unrestricted;
    };
    let closure = hierarchy.downstream_closure(&anchor.name);
    for name in selected {
        if hierarchy.contains(name) && !closure.contains(name) {
            tracing::debug!(river = %name, anchor = %anchor.name, "selected river outside resolved branch, dropped from scope");
        }
    }
    RiverScope::Within(closure)
}

/// The river names the filter menu should offer next: the trunks when no
/// river is selected, otherwise the current selection followed by the
/// highest-rank selected segment's immediate tributaries.
#[must_use]
pub fn selectable_rivers(hierarchy: &RiverHierarchy, selection: &FilterSelection) -> Vec<RiverName> {
    if selection.rivers.is_empty() {
        return trunk_rivers();
    }
    let mut out: Vec<RiverName> = selection.rivers.iter().cloned().collect();
    if let Some(anchor) = max_rank_node(hierarchy, &selection.rivers) {
        for tributary in &anchor.tributaries {
            if !out.contains(tributary) {
                out.push(tributary.clone());
            }
        }
    }
    out
}
