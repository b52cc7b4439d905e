use kdroster::{Config, Record, Registry, RegistryBuilder, SpatialIndex};
use std::io::Write;

fn ids(records: &[Record]) -> Vec<u64> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn test_basic_operations() {
    let mut roster = Registry::new();

    let a = roster.register("A", "0001", "Ops", 0.0, 0.0);
    let b = roster.register("B", "0002", "Ops", 10.0, 10.0);
    let c = roster.register("C", "0003", "Ops", 1.0, 1.0);
    assert_eq!(ids(&[a.clone(), b.clone(), c.clone()]), vec![1, 2, 3]);

    // A and C are equidistant from (0.5, 0.5); A is the answer.
    assert_eq!(roster.nearest(0.5, 0.5).unwrap(), a);

    assert!(roster.remove(a.id));
    assert_eq!(roster.nearest(0.5, 0.5).unwrap(), c);
    assert_eq!(roster.list(), vec![b, c]);
}

#[test]
fn test_empty_registry_nearest() {
    let roster = Registry::new();
    assert!(roster.nearest(0.0, 0.0).is_none());
    assert!(roster.list().is_empty());
}

#[test]
fn test_list_preserves_registration_order() {
    let mut roster = Registry::new();
    let coords = [(5.0, 5.0), (-3.0, 8.0), (0.0, 0.0), (9.0, -9.0), (5.0, 5.0)];
    for (i, (x, y)) in coords.iter().enumerate() {
        roster.register(format!("r{}", i), i.to_string(), "Ops", *x, *y);
    }

    assert_eq!(ids(&roster.list()), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_remove_unknown_id() {
    let mut roster = Registry::new();
    roster.register("A", "1", "Ops", 0.0, 0.0);
    roster.register("B", "2", "Ops", 1.0, 0.0);
    let before = roster.list();

    assert!(!roster.remove(99));
    assert_eq!(roster.list(), before);
    assert_eq!(roster.stats().rebuilds, 0);
}

#[test]
fn test_remove_everything_then_register_again() {
    let mut roster = Registry::new();
    for i in 0..5 {
        roster.register("r", "x", "Ops", i as f64, 0.0);
    }
    for id in 1..=5 {
        assert!(roster.remove(id));
    }
    assert!(roster.is_empty());
    assert!(roster.nearest(1.0, 1.0).is_none());

    let next = roster.register("again", "x", "Ops", 1.0, 1.0);
    assert_eq!(next.id, 6);
    assert_eq!(roster.nearest(100.0, 100.0).unwrap().id, 6);
}

#[test]
fn test_search_operations() {
    let mut roster = Registry::new();
    roster.register("Ana Torres", "45678912", "Sales", 0.0, 0.0);
    roster.register("Bruno Diaz", "12345678", "Support", 1.0, 1.0);
    roster.register("ANALIA Ruiz", "99945600", "Sales", 2.0, 2.0);

    assert_eq!(ids(&roster.search_by_name("ana")), vec![1, 3]);
    assert_eq!(ids(&roster.search_by_external_id("8912")), vec![1]);
    assert_eq!(ids(&roster.search_by_external_id("123")), vec![2]);
    assert!(roster.search_by_name("zoe").is_empty());
}

#[test]
fn test_duplicates_are_accepted() {
    let mut roster = Registry::new();
    roster.register("Same", "000", "Ops", 2.0, 2.0);
    roster.register("Same", "000", "Ops", 2.0, 2.0);

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.search_by_name("same").len(), 2);
}

#[test]
fn test_builder_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{ "first_id": 100, "capacity_hint": 8 }}"#).unwrap();

    let mut roster = RegistryBuilder::new()
        .config_path(file.path())
        .build()
        .unwrap();
    assert_eq!(roster.register("A", "1", "Ops", 0.0, 0.0).id, 100);

    let roster = Registry::from_config_path(file.path()).unwrap();
    assert_eq!(roster.next_id(), 100);
}

#[test]
fn test_builder_rejects_bad_config_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{ "first_id": 1, "unknown": true }}"#).unwrap();

    assert!(RegistryBuilder::new().config_path(file.path()).build().is_err());
}

#[test]
fn test_stats_track_operations() {
    let mut roster = RegistryBuilder::new()
        .config(Config::default().with_rebuild_warn_threshold(2))
        .build()
        .unwrap();

    for i in 0..4 {
        roster.register("r", "x", "Ops", i as f64, 0.0);
    }
    roster.remove(2);
    roster.remove(3);

    let stats = roster.stats();
    assert_eq!(stats.records, 2);
    assert_eq!(stats.rebuilds, 2);
    assert_eq!(stats.operations, 6);
    // x = 0 then x = 3, a two-node spine
    assert_eq!(stats.depth, 2);
}

#[test]
fn test_spatial_index_directly() {
    let mut index = SpatialIndex::new();
    index.insert(Record::new(5, "five", "5", "Ops", kdroster::Point::new(2.0, 2.0)));
    index.insert(Record::new(6, "six", "6", "Ops", kdroster::Point::new(2.0, 2.0)));

    let target = kdroster::Point::new(2.0, 2.0);
    let first = index.nearest(&target).unwrap().id;
    for _ in 0..5 {
        assert_eq!(index.nearest(&target).unwrap().id, first);
    }
}
