// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    UnknownToken { facet: &'static str, token: String },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::UnknownToken { facet, token } => {
                write!(f, "unknown {facet} token: {token}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Country {
    Hungary,
    Ukraine,
    Romania,
    Serbia,
    Slovakia,
}

impl Country {
    pub const ALL: [Self; 5] = [
        Self::Hungary,
        Self::Ukraine,
        Self::Romania,
        Self::Serbia,
        Self::Slovakia,
    ];

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "HUNGARY" => Ok(Self::Hungary),
            "UKRAINE" => Ok(Self::Ukraine),
            "ROMANIA" => Ok(Self::Romania),
            "SERBIA" => Ok(Self::Serbia),
            "SLOVAKIA" => Ok(Self::Slovakia),
            _ => Err(ParseError::UnknownToken {
                facet: "country",
                token: raw.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Hungary => "HUNGARY",
            Self::Ukraine => "UKRAINE",
            Self::Romania => "ROMANIA",
            Self::Serbia => "SERBIA",
            Self::Slovakia => "SLOVAKIA",
        }
    }
}

/// Reported size of one waste heap, in terms of what it takes to carry it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Size {
    Bag,
    Wheelbarrow,
    Car,
}

impl Size {
    pub const ALL: [Self; 3] = [Self::Bag, Self::Wheelbarrow, Self::Car];

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "BAG" => Ok(Self::Bag),
            "WHEELBARROW" => Ok(Self::Wheelbarrow),
            "CAR" => Ok(Self::Car),
            _ => Err(ParseError::UnknownToken {
                facet: "size",
                token: raw.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Bag => "BAG",
            Self::Wheelbarrow => "WHEELBARROW",
            Self::Car => "CAR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Status {
    StillHere,
    Cleaned,
    More,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::StillHere, Self::More, Self::Cleaned];

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "STILLHERE" => Ok(Self::StillHere),
            "CLEANED" => Ok(Self::Cleaned),
            "MORE" => Ok(Self::More),
            _ => Err(ParseError::UnknownToken {
                facet: "status",
                token: raw.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::StillHere => "STILLHERE",
            Self::Cleaned => "CLEANED",
            Self::More => "MORE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[non_exhaustive]
pub enum WasteType {
    Plastic,
    Metal,
    Glass,
    Domestic,
    Construction,
    Liquid,
    Dangerous,
    Automotive,
    Electronic,
    Organic,
    DeadAnimals,
}

impl WasteType {
    pub const ALL: [Self; 11] = [
        Self::Plastic,
        Self::Metal,
        Self::Glass,
        Self::Domestic,
        Self::Construction,
        Self::Liquid,
        Self::Dangerous,
        Self::Automotive,
        Self::Electronic,
        Self::Organic,
        Self::DeadAnimals,
    ];

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "PLASTIC" => Ok(Self::Plastic),
            "METAL" => Ok(Self::Metal),
            "GLASS" => Ok(Self::Glass),
            "DOMESTIC" => Ok(Self::Domestic),
            "CONSTRUCTION" => Ok(Self::Construction),
            "LIQUID" => Ok(Self::Liquid),
            "DANGEROUS" => Ok(Self::Dangerous),
            "AUTOMOTIVE" => Ok(Self::Automotive),
            "ELECTRONIC" => Ok(Self::Electronic),
            "ORGANIC" => Ok(Self::Organic),
            "DEADANIMALS" => Ok(Self::DeadAnimals),
            _ => Err(ParseError::UnknownToken {
                facet: "type",
                token: raw.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Plastic => "PLASTIC",
            Self::Metal => "METAL",
            Self::Glass => "GLASS",
            Self::Domestic => "DOMESTIC",
            Self::Construction => "CONSTRUCTION",
            Self::Liquid => "LIQUID",
            Self::Dangerous => "DANGEROUS",
            Self::Automotive => "AUTOMOTIVE",
            Self::Electronic => "ELECTRONIC",
            Self::Organic => "ORGANIC",
            Self::DeadAnimals => "DEADANIMALS",
        }
    }
}

/// Minimal projection of one reported waste location, as fetched from the
/// upstream API. Snapshots are classified by the filter core, never mutated.
///
/// Decoding is deliberately tolerant of extra fields: the upstream "expanded"
/// payload is a superset of this projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct WasteRecord {
    pub id: u64,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Country,
    pub size: Size,
    pub status: Status,
    pub types: BTreeSet<WasteType>,
    /// Name of the river segment nearest this record. Matched against the
    /// hierarchy by case-normalized name; may name a segment the hierarchy
    /// does not know.
    pub river: String,
    pub update_time: DateTime<Utc>,
    pub hidden: bool,
}

impl WasteRecord {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: u64,
        latitude: f64,
        longitude: f64,
        country: Country,
        size: Size,
        status: Status,
        types: BTreeSet<WasteType>,
        river: String,
        update_time: DateTime<Utc>,
        hidden: bool,
    ) -> Self {
        Self {
            id,
            latitude,
            longitude,
            country,
            size,
            status,
            types,
            river,
            update_time,
            hidden,
        }
    }
}
