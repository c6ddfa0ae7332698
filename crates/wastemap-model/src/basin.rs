// SPDX-License-Identifier: Apache-2.0

//! Compiled-in river reference data for the Danube basin, as published by the
//! reporting application. Two trunks (DUNA, ZALA); ranks grow toward smaller
//! streams.

use std::sync::LazyLock;

use crate::river::{RiverHierarchy, RiverName, RiverNode};

/// Default selectable trunks offered before any river filter is chosen.
pub const TRUNK_RIVER_TOKENS: [&str; 2] = ["DUNA", "ZALA"];

/// (name, rank, tributaries), mirroring the upstream filter table.
const BASIN_TABLE: &[(&str, u32, &[&str])] = &[
    (
        "DUNA",
        1,
        &[
            "RÁBCA", "TISZA", "SIÓ", "BENTA", "RÁBA", "LAJTA", "DRÁVA", "KARASICA", "GORTVA",
            "IPOLY",
        ],
    ),
    (
        "TISZA",
        2,
        &[
            "MAROS",
            "BORZA",
            "KRASZNA",
            "TÚR",
            "SZAMOS",
            "BODROG",
            "HEJŐ",
            "SAJÓ",
            "ZAGYVA",
            "HÁRMAS-KÖRÖS",
        ],
    ),
    ("SIÓ", 2, &["KAPOS"]),
    ("DRÁVA", 2, &["RINYA", "MURA"]),
    ("RÁBA", 2, &["GYÖNGYÖS", "MARCAL", "PINKA", "LAPINCS"]),
    ("MAROS", 3, &[]),
    ("SAJÓ", 3, &["BÓDVA", "HERNÁD"]),
    ("BÓDVA", 4, &[]),
    ("BORZA", 3, &[]),
    ("TÁPIÓ", 4, &[]),
    ("ZAGYVA", 3, &["TÁPIÓ", "SZUHA", "TARNA", "GALGA"]),
    ("SZUHA", 4, &[]),
    ("RÁBCA", 2, &["RÉPCE"]),
    ("BENTA", 2, &[]),
    (
        "HÁRMAS-KÖRÖS",
        3,
        &["KETTŐS-KÖRÖS", "SEBES-KÖRÖS", "HORTOBÁGY"],
    ),
    ("KETTŐS-KÖRÖS", 4, &["FEHÉR-KÖRÖS", "FEKETE-KÖRÖS"]),
    ("SEBES-KÖRÖS", 4, &["BERETTYÓ"]),
    ("FEHÉR-KÖRÖS", 5, &[]),
    ("FEKETE-KÖRÖS", 5, &[]),
    ("HORTOBÁGY", 4, &[]),
    ("LAJTA", 2, &[]),
    ("KRASZNA", 3, &[]),
    ("BERETTYÓ", 5, &[]),
    ("TÚR", 3, &[]),
    ("SZAMOS", 3, &[]),
    ("BODROG", 3, &["ONDAVA", "LATORCA"]),
    ("RÉPCE", 3, &[]),
    ("ZALA", 1, &[]),
    ("MARCAL", 3, &[]),
    ("RINYA", 3, &[]),
    ("KARASICA", 2, &[]),
    ("KAPOS", 3, &[]),
    ("PINKA", 3, &["STRÉM"]),
    ("STRÉM", 4, &[]),
    ("KERKA", 4, &[]),
    ("MURA", 3, &["KERKA", "LENDVA"]),
    ("LAPINCS", 3, &[]),
    ("LENDVA", 4, &[]),
    ("GORTVA", 2, &[]),
    ("IPOLY", 2, &[]),
    ("HEJŐ", 3, &[]),
    ("GALGA", 4, &[]),
    ("TARNA", 4, &[]),
    ("HERNÁD", 4, &[]),
    ("ONDAVA", 4, &["TAPOLY"]),
    ("LATORCA", 4, &["LABORC"]),
    ("LABORC", 5, &["UNG"]),
    ("UNG", 6, &[]),
    ("TAPOLY", 5, &[]),
    ("GYÖNGYÖS", 3, &[]),
];

static DANUBE_BASIN: LazyLock<RiverHierarchy> = LazyLock::new(|| {
    let nodes = BASIN_TABLE
        .iter()
        .map(|(name, rank, tributaries)| {
            RiverNode::new(
                river_name(name),
                tributaries.iter().map(|t| river_name(t)).collect(),
                *rank,
            )
        })
        .collect();
    RiverHierarchy::new(nodes).expect("built-in Danube basin table is valid")
});

fn river_name(raw: &str) -> RiverName {
    RiverName::parse(raw).expect("built-in river name is well-formed")
}

/// The production hierarchy, validated once on first use.
#[must_use]
pub fn danube_basin() -> &'static RiverHierarchy {
    &DANUBE_BASIN
}

#[must_use]
pub fn trunk_rivers() -> Vec<RiverName> {
    TRUNK_RIVER_TOKENS.iter().map(|t| river_name(t)).collect()
}
