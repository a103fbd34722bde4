// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{Catalog, CatalogError};
use crate::model::fixtures::sid;
use crate::nav::{build_chain_with_names, IntegrityError};
use crate::store::{FamilyLookup, LookupError};

static TEMP_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempFile {
    path: std::path::PathBuf,
}

impl TempFile {
    fn with_contents(prefix: &str, contents: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("evodex-{prefix}-{}-{nanos}-{counter}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

#[fixture]
fn demo() -> Catalog {
    Catalog::demo()
}

#[rstest]
fn demo_catalog_parses(demo: Catalog) {
    assert!(demo.len() >= 20);
    assert_eq!(demo.entry(sid(133)).map(|entry| entry.name()), Some("Eevee"));
    let ids: Vec<_> = demo.species().map(|entry| entry.id()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[rstest]
fn family_of_middle_stage_starts_at_root(demo: Catalog) {
    let record = demo.fetch_family(sid(5)).expect("lookup").expect("family");

    assert_eq!(record.root_id, sid(4));
    assert_eq!(record.edges.len(), 2);
    assert_eq!(record.names.get(&sid(6)).map(|name| name.as_str()), Some("Charizard"));
}

#[rstest]
fn family_of_branch_member_contains_all_siblings(demo: Catalog) {
    let record = demo.fetch_family(sid(470)).expect("lookup").expect("family");

    assert_eq!(record.root_id, sid(133));
    assert_eq!(record.edges.len(), 7);
}

#[rstest]
fn species_without_relatives_is_empty_not_error(demo: Catalog) {
    assert!(demo.fetch_family(sid(132)).expect("lookup").is_none());
    assert_eq!(demo.species_name(sid(132)).as_deref(), Some("Ditto"));
}

#[rstest]
fn unknown_species_is_an_error(demo: Catalog) {
    let err = demo.fetch_family(sid(9999)).unwrap_err();
    assert!(matches!(err, LookupError::UnknownSpecies(id) if id == sid(9999)));
}

#[test]
fn load_reads_json_file() {
    let file = TempFile::with_contents(
        "load",
        r#"{"species":[{"id":7,"name":"Squirtle"}],"evolutions":[{"from":7,"to":8,"trigger":"level16"}]}"#,
    );

    let catalog = Catalog::load(&file.path).expect("load");

    assert_eq!(catalog.len(), 1);
    let record = catalog.fetch_family(sid(8)).expect("lookup").expect("family");
    assert_eq!(record.root_id, sid(7));
    assert!(record.names.get(&sid(8)).is_none());
}

#[test]
fn load_reports_missing_file() {
    let err = Catalog::load("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn parse_rejects_duplicate_species() {
    let err = Catalog::from_json_str(
        r#"{"species":[{"id":1,"name":"A"},{"id":1,"name":"B"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSpecies(id) if id == sid(1)));
}

#[test]
fn parse_rejects_malformed_json() {
    let err = Catalog::from_json_str("{\"species\": [").unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
}

#[test]
fn second_parent_is_handed_to_builder() {
    let catalog = Catalog::from_json_str(
        r#"{"evolutions":[
            {"from":1,"to":2,"trigger":"a"},
            {"from":1,"to":3,"trigger":"b"},
            {"from":9,"to":3,"trigger":"c"}
        ]}"#,
    )
    .expect("catalog");

    let record = catalog.fetch_family(sid(2)).expect("lookup").expect("family");
    let err = build_chain_with_names(record.root_id, &record.edges, &record.names).unwrap_err();

    assert!(matches!(err, IntegrityError::MultipleParents { child, .. } if child == sid(3)));
}

#[test]
fn parent_cycle_does_not_hang() {
    let catalog = Catalog::from_json_str(
        r#"{"evolutions":[
            {"from":1,"to":2,"trigger":"a"},
            {"from":2,"to":1,"trigger":"b"}
        ]}"#,
    )
    .expect("catalog");

    let record = catalog.fetch_family(sid(2)).expect("lookup").expect("family");
    let err = build_chain_with_names(record.root_id, &record.edges, &record.names).unwrap_err();

    assert!(matches!(err, IntegrityError::RootHasParent { .. }));
}
