//! Resolution behavior of the route table.

use std::path::PathBuf;

use spa_router::config::loader::load_config;
use spa_router::{ComponentRegistry, RouteTable, StaticView};

mod common;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join(name)
}

#[test]
fn test_root_aliases_milestone() {
    let (table, milestone, _) = common::milestone_table();

    // '/' and '/milestone' deliberately bind the same component: the
    // milestone planner is the default view.
    let at_root = table.resolve_component("/").unwrap();
    let at_path = table.resolve_component("/milestone").unwrap();
    assert_eq!(at_root, at_path);
    assert_eq!(at_root, &milestone);
}

#[test]
fn test_hello_resolves_its_own_component() {
    let (table, milestone, hello) = common::milestone_table();

    let at_hello = table.resolve_component("/hello").unwrap();
    assert_eq!(at_hello, &hello);
    assert_ne!(at_hello, &milestone);
}

#[test]
fn test_variant_without_hello_does_not_match_it() {
    let (table, _) = common::named_table();
    assert!(table.resolve("/hello").is_none());
    assert!(table.resolve_component("/hello").is_none());
}

#[test]
fn test_duplicate_name_selects_first_entry() {
    let (table, milestone) = common::named_table();

    // Both entries carry name "milestone"; document order decides, so the
    // '/' entry shadows '/milestone' for named lookup.
    let entry = table.entry_named("milestone").unwrap();
    assert_eq!(entry.path(), "/");
    assert_eq!(entry.component(), &milestone);
}

#[test]
fn test_unnamed_table_has_no_named_entries() {
    let (table, _, _) = common::milestone_table();
    assert!(table.entry_named("milestone").is_none());
    assert!(table.entry_named("hello").is_none());
    assert!(table.entry_named("").is_none());
}

#[test]
fn test_construction_is_deterministic() {
    let config = load_config(&fixture("routes.toml")).unwrap();

    let mut registry = ComponentRegistry::new();
    registry.register("MileStone", StaticView::new("MileStone"));
    registry.register("HelloWorld", StaticView::new("HelloWorld"));

    let first = RouteTable::from_config(&config, &registry).unwrap();
    let second = RouteTable::from_config(&config, &registry).unwrap();

    assert_eq!(first.len(), second.len());
    for location in ["/", "/milestone", "/hello", "/elevation"] {
        match (first.resolve(location), second.resolve(location)) {
            (Some(a), Some(b)) => {
                assert_eq!(a.path(), b.path());
                assert_eq!(a.component(), b.component());
            }
            (None, None) => {}
            (a, b) => panic!("tables diverge at {location:?}: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn test_fixture_tables_resolve_like_literal_ones() {
    let config = load_config(&fixture("routes_named.toml")).unwrap();

    let mut registry = ComponentRegistry::new();
    let milestone = registry.register("MileStone", StaticView::new("MileStone"));

    let table = RouteTable::from_config(&config, &registry).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.resolve_component("/"), Some(&milestone));
    assert_eq!(table.resolve_component("/milestone"), Some(&milestone));
    assert!(table.resolve("/hello").is_none());
    assert_eq!(table.entry_named("milestone").unwrap().path(), "/");
}
