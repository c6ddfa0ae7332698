// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

use wastemap_model::{Country, RiverHierarchy, RiverName, Size, Status, WasteType};

/// One facet filter value, tagged by the facet it belongs to.
///
/// The upstream UI passes filters around as one flat set of uppercase string
/// tokens; [`FilterToken::classify`] recovers the facet from the token. The
/// token sets are disjoint by construction (river names never collide with
/// the closed enumerations).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum FilterToken {
    Country(Country),
    Size(Size),
    Status(Status),
    Type(WasteType),
    River(RiverName),
}

impl FilterToken {
    /// Classifies a raw token against the closed facets first, then against
    /// the river hierarchy. Unknown tokens are inert: `None`, never an error.
    #[must_use]
    pub fn classify(hierarchy: &RiverHierarchy, raw: &str) -> Option<Self> {
        if let Ok(country) = Country::parse(raw) {
            return Some(Self::Country(country));
        }
        if let Ok(size) = Size::parse(raw) {
            return Some(Self::Size(size));
        }
        if let Ok(status) = Status::parse(raw) {
            return Some(Self::Status(status));
        }
        if let Ok(waste_type) = WasteType::parse(raw) {
            return Some(Self::Type(waste_type));
        }
        let name = RiverName::parse(raw).ok()?;
        if hierarchy.contains(&name) {
            Some(Self::River(name))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::Country(country) => country.as_token(),
            Self::Size(size) => size.as_token(),
            Self::Status(status) => status.as_token(),
            Self::Type(waste_type) => waste_type.as_token(),
            Self::River(name) => name.as_str(),
        }
    }
}

impl Display for FilterToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}
