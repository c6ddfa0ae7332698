// SPDX-License-Identifier: Apache-2.0

use wastemap_model::{danube_basin, Country, RiverName, Size, WasteType};
use wastemap_query::{FilterSelection, FilterToken};

fn name(raw: &str) -> RiverName {
    RiverName::parse(raw).expect("river name")
}

#[test]
fn from_tokens_classifies_each_facet_and_ignores_garbage() {
    let basin = danube_basin();
    let selection = FilterSelection::from_tokens(
        basin,
        ["HUNGARY", "BAG", "STILLHERE", "PLASTIC", "TISZA", "NOT_A_TOKEN", ""],
    );
    assert!(selection.countries.contains(&Country::Hungary));
    assert!(selection.sizes.contains(&Size::Bag));
    assert!(selection.types.contains(&WasteType::Plastic));
    assert!(selection.rivers.contains(&name("TISZA")));
    assert_eq!(
        selection.countries.len()
            + selection.sizes.len()
            + selection.statuses.len()
            + selection.types.len()
            + selection.rivers.len(),
        5,
        "unknown tokens must not land anywhere"
    );
}

#[test]
fn river_tokens_normalize_case_on_selection() {
    let basin = danube_basin();
    let selection = FilterSelection::from_tokens(basin, ["szamos"]);
    assert!(selection.rivers.contains(&name("SZAMOS")));
}

#[test]
fn deselecting_a_river_cascades_to_equal_and_higher_ranks() {
    let basin = danube_basin();
    let mut selection = FilterSelection::from_tokens(basin, ["DUNA", "TISZA", "SZAMOS"]);

    // TISZA has rank 2: dropping it also drops SZAMOS (rank 3), DUNA stays.
    selection.deselect(basin, &FilterToken::River(name("TISZA")));
    assert!(selection.rivers.contains(&name("DUNA")));
    assert!(!selection.rivers.contains(&name("TISZA")));
    assert!(!selection.rivers.contains(&name("SZAMOS")));
}

#[test]
fn deselecting_a_trunk_clears_the_whole_river_path() {
    let basin = danube_basin();
    let mut selection = FilterSelection::from_tokens(basin, ["DUNA", "TISZA", "SZAMOS"]);

    selection.deselect(basin, &FilterToken::River(name("DUNA")));
    assert!(selection.rivers.is_empty());
}

#[test]
fn deselecting_non_river_facets_removes_only_that_token() {
    let basin = danube_basin();
    let mut selection = FilterSelection::from_tokens(basin, ["HUNGARY", "UKRAINE", "BAG", "TISZA"]);

    selection.deselect(basin, &FilterToken::Country(Country::Hungary));
    assert!(!selection.countries.contains(&Country::Hungary));
    assert!(selection.countries.contains(&Country::Ukraine));
    assert!(selection.sizes.contains(&Size::Bag));
    assert!(selection.rivers.contains(&name("TISZA")));
}

#[test]
fn with_leaves_the_original_selection_untouched() {
    let basin = danube_basin();
    let selection = FilterSelection::from_tokens(basin, ["HUNGARY"]);
    let trial = selection.with(FilterToken::Size(Size::Car));
    assert!(trial.sizes.contains(&Size::Car));
    assert!(selection.sizes.is_empty());
}

#[test]
fn selection_round_trips_through_json() {
    let basin = danube_basin();
    let selection = FilterSelection::from_tokens(basin, ["HUNGARY", "BAG", "STILLHERE", "TISZA"]);
    let encoded = serde_json::to_string(&selection).expect("encode");
    let decoded: FilterSelection = serde_json::from_str(&encoded).expect("decode");
    assert_eq!(selection, decoded);
}

#[test]
fn empty_selection_reports_empty() {
    assert!(FilterSelection::new().is_empty());
    let basin = danube_basin();
    assert!(!FilterSelection::from_tokens(basin, ["HUNGARY"]).is_empty());
}
