// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use crate::waste::ParseError;

/// Case-normalized (uppercase) name of one river segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct RiverName(String);

impl RiverName {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("river name"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("river name"));
        }
        Ok(Self(input.to_uppercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RiverName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HierarchyError {
    DuplicateName(RiverName),
    UnknownTributary { river: RiverName, tributary: RiverName },
    ZeroRank(RiverName),
    Cycle(RiverName),
}

impl Display for HierarchyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => write!(f, "duplicate river name: {name}"),
            Self::UnknownTributary { river, tributary } => {
                write!(f, "river {river} references unknown tributary {tributary}")
            }
            Self::ZeroRank(name) => write!(f, "river {name} must have rank >= 1"),
            Self::Cycle(name) => write!(f, "tributary graph has a cycle through {name}"),
        }
    }
}

impl std::error::Error for HierarchyError {}

/// One named river segment: its place in the tributary forest and its rank
/// (1 = trunk, higher = more distant tributary). Tributaries are non-owning
/// references by name, resolved against the hierarchy the node lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct RiverNode {
    pub name: RiverName,
    pub tributaries: Vec<RiverName>,
    pub rank: u32,
}

impl RiverNode {
    #[must_use]
    pub fn new(name: RiverName, tributaries: Vec<RiverName>, rank: u32) -> Self {
        Self {
            name,
            tributaries,
            rank,
        }
    }
}

/// Immutable name-to-node map over a forest of river segments.
///
/// Built once from reference data and never mutated; every lookup the filter
/// core performs goes through this map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiverHierarchy {
    nodes: BTreeMap<RiverName, RiverNode>,
}

impl RiverHierarchy {
    /// Validates the node list: unique names, every referenced tributary
    /// present, ranks >= 1, and an acyclic tributary graph.
    pub fn new(nodes: Vec<RiverNode>) -> Result<Self, HierarchyError> {
        let mut map: BTreeMap<RiverName, RiverNode> = BTreeMap::new();
        for node in nodes {
            if node.rank == 0 {
                return Err(HierarchyError::ZeroRank(node.name));
            }
            let name = node.name.clone();
            if map.insert(name.clone(), node).is_some() {
                return Err(HierarchyError::DuplicateName(name));
            }
        }
        for node in map.values() {
            for tributary in &node.tributaries {
                if !map.contains_key(tributary) {
                    return Err(HierarchyError::UnknownTributary {
                        river: node.name.clone(),
                        tributary: tributary.clone(),
                    });
                }
            }
        }
        let hierarchy = Self { nodes: map };
        hierarchy.check_acyclic()?;
        Ok(hierarchy)
    }

    fn check_acyclic(&self) -> Result<(), HierarchyError> {
        // Iterative DFS with an explicit on-path set, one walk per root.
        let mut done: BTreeSet<&RiverName> = BTreeSet::new();
        for root in self.nodes.keys() {
            if done.contains(root) {
                continue;
            }
            let mut on_path: BTreeSet<&RiverName> = BTreeSet::new();
            let mut stack: Vec<(&RiverName, usize)> = vec![(root, 0)];
            on_path.insert(root);
            while let Some((name, next_child)) = stack.pop() {
                let node = &self.nodes[name];
                if next_child < node.tributaries.len() {
                    stack.push((name, next_child + 1));
                    let child = &node.tributaries[next_child];
                    if on_path.contains(child) {
                        return Err(HierarchyError::Cycle(child.clone()));
                    }
                    if !done.contains(child) {
                        on_path.insert(child);
                        stack.push((child, 0));
                    }
                } else {
                    on_path.remove(name);
                    done.insert(name);
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &RiverName) -> Option<&RiverNode> {
        self.nodes.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &RiverName) -> bool {
        self.nodes.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RiverNode> {
        self.nodes.values()
    }

    /// The segment itself plus every transitively reachable tributary.
    /// Names absent from the hierarchy yield an empty set.
    #[must_use]
    pub fn downstream_closure(&self, start: &RiverName) -> BTreeSet<RiverName> {
        let mut visited: BTreeSet<RiverName> = BTreeSet::new();
        let Some(start_node) = self.nodes.get(start) else {
            return visited;
        };
        let mut queue: Vec<&RiverNode> = vec![start_node];
        visited.insert(start_node.name.clone());
        while let Some(node) = queue.pop() {
            for tributary in &node.tributaries {
                if visited.insert(tributary.clone()) {
                    if let Some(child) = self.nodes.get(tributary) {
                        queue.push(child);
                    }
                }
            }
        }
        visited
    }
}
