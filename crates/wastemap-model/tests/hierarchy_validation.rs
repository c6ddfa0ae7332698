// SPDX-License-Identifier: Apache-2.0

use wastemap_model::{
    danube_basin, trunk_rivers, HierarchyError, RiverHierarchy, RiverName, RiverNode,
};

fn name(raw: &str) -> RiverName {
    RiverName::parse(raw).expect("river name")
}

fn node(raw: &str, rank: u32, tributaries: &[&str]) -> RiverNode {
    RiverNode::new(name(raw), tributaries.iter().map(|t| name(t)).collect(), rank)
}

#[test]
fn duplicate_names_are_rejected() {
    let err = RiverHierarchy::new(vec![node("DUNA", 1, &[]), node("DUNA", 1, &[])])
        .expect_err("duplicate");
    assert_eq!(err, HierarchyError::DuplicateName(name("DUNA")));
}

#[test]
fn unknown_tributary_references_are_rejected() {
    let err = RiverHierarchy::new(vec![node("DUNA", 1, &["TISZA"])]).expect_err("unknown");
    assert_eq!(
        err,
        HierarchyError::UnknownTributary {
            river: name("DUNA"),
            tributary: name("TISZA"),
        }
    );
}

#[test]
fn zero_rank_is_rejected() {
    let err = RiverHierarchy::new(vec![node("DUNA", 0, &[])]).expect_err("zero rank");
    assert_eq!(err, HierarchyError::ZeroRank(name("DUNA")));
}

#[test]
fn cycles_are_rejected() {
    let err = RiverHierarchy::new(vec![
        node("DUNA", 1, &["TISZA"]),
        node("TISZA", 2, &["SZAMOS"]),
        node("SZAMOS", 3, &["DUNA"]),
    ])
    .expect_err("cycle");
    assert!(matches!(err, HierarchyError::Cycle(_)));
}

#[test]
fn self_loop_is_rejected() {
    let err = RiverHierarchy::new(vec![node("DUNA", 1, &["DUNA"])]).expect_err("self loop");
    assert_eq!(err, HierarchyError::Cycle(name("DUNA")));
}

#[test]
fn downstream_closure_follows_tributaries_only() {
    let hierarchy = RiverHierarchy::new(vec![
        node("DUNA", 1, &["TISZA", "SIÓ"]),
        node("TISZA", 2, &["SZAMOS"]),
        node("SZAMOS", 3, &[]),
        node("SIÓ", 2, &[]),
    ])
    .expect("hierarchy");

    let closure = hierarchy.downstream_closure(&name("TISZA"));
    assert!(closure.contains(&name("TISZA")));
    assert!(closure.contains(&name("SZAMOS")));
    assert!(!closure.contains(&name("DUNA")));
    assert!(!closure.contains(&name("SIÓ")));
}

#[test]
fn built_in_basin_table_is_valid_and_complete() {
    let basin = danube_basin();
    assert!(basin.len() >= 48);

    for trunk in trunk_rivers() {
        let node = basin.get(&trunk).expect("trunk present");
        assert_eq!(node.rank, 1, "{trunk} must be a trunk river");
    }

    // Every tributary list resolves inside the table.
    for node in basin.iter() {
        for tributary in &node.tributaries {
            assert!(basin.contains(tributary), "missing tributary {tributary}");
        }
    }
}

#[test]
fn built_in_basin_spans_duna_to_ung() {
    let basin = danube_basin();
    let closure = basin.downstream_closure(&name("DUNA"));
    // UNG sits six ranks down: DUNA > TISZA > BODROG > LATORCA > LABORC > UNG.
    assert!(closure.contains(&name("UNG")));
    // ZALA is a separate trunk, never reachable from DUNA.
    assert!(!closure.contains(&name("ZALA")));
}
