//! Randomized comparisons of the k-d tree against an exhaustive scan.

use kdroster::compute::distance::euclidean;
use kdroster::{KdTree, Point, Record, Registry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn linear_scan<'a>(records: &'a [Record], target: &Point<f64>) -> Option<&'a Record> {
    let mut best: Option<&Record> = None;
    for record in records {
        match best {
            Some(current)
                if euclidean(target, &current.location) <= euclidean(target, &record.location) => {}
            _ => best = Some(record),
        }
    }
    best
}

fn random_point(rng: &mut StdRng, span: f64) -> Point<f64> {
    Point::new(rng.gen_range(-span..span), rng.gen_range(-span..span))
}

fn assert_matches_scan(roster: &Registry, target: &Point<f64>) {
    let records = roster.list();
    let expected = linear_scan(&records, target);
    let found = roster.nearest(target.x(), target.y());

    match (expected, found) {
        (None, None) => {}
        (Some(expected), Some(found)) => {
            let expected_dist = euclidean(target, &expected.location);
            let found_dist = euclidean(target, &found.location);
            assert_eq!(
                found_dist, expected_dist,
                "target {:?}: tree gave {} ({}), scan gave {} ({})",
                target, found.id, found_dist, expected.id, expected_dist
            );
            if expected_dist < f64::EPSILON {
                assert_eq!(found.location, expected.location);
            }
        }
        (expected, found) => panic!("scan {:?} vs tree {:?}", expected, found),
    }
}

#[test]
fn test_nearest_matches_linear_scan() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for size in [1, 2, 3, 10, 100, 1_000] {
        let mut roster = Registry::new();
        for i in 0..size {
            let p = random_point(&mut rng, 100.0);
            roster.register(format!("r{}", i), i.to_string(), "rand", p.x(), p.y());
        }

        for _ in 0..200 {
            let target = random_point(&mut rng, 150.0);
            assert_matches_scan(&roster, &target);
        }
    }
}

#[test]
fn test_nearest_matches_scan_on_integer_grid() {
    // Integer coordinates produce many ties on the splitting axes.
    let mut rng = StdRng::seed_from_u64(7);
    let mut roster = Registry::new();
    for i in 0..500 {
        let x = rng.gen_range(0..20) as f64;
        let y = rng.gen_range(0..20) as f64;
        roster.register("g", i.to_string(), "grid", x, y);
    }

    for tx in -2..22 {
        for ty in -2..22 {
            assert_matches_scan(&roster, &Point::new(tx as f64 + 0.5, ty as f64));
        }
    }
}

#[test]
fn test_nearest_matches_scan_after_removals() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut roster = Registry::new();
    for i in 0..400 {
        let p = random_point(&mut rng, 50.0);
        roster.register("r", i.to_string(), "rand", p.x(), p.y());
    }

    for _ in 0..150 {
        let live = roster.list();
        let victim = live[rng.gen_range(0..live.len())].id;
        assert!(roster.remove(victim));
        assert!(roster.list().iter().all(|r| r.id != victim));

        for _ in 0..10 {
            let target = random_point(&mut rng, 60.0);
            assert_matches_scan(&roster, &target);
        }
    }
    assert_eq!(roster.len(), 250);
}

#[test]
fn test_rebuild_matches_fresh_build() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut roster = Registry::new();
    for i in 0..300 {
        let x = rng.gen_range(0..30) as f64;
        let y = rng.gen_range(0..30) as f64;
        roster.register("r", i.to_string(), "rand", x, y);
    }
    for id in (1..=300).step_by(7) {
        assert!(roster.remove(id));
    }

    // Same sequence, inserted fresh in the same order.
    let fresh = KdTree::from_records(roster.list());

    for _ in 0..500 {
        let target = Point::new(rng.gen_range(-5.0..35.0), rng.gen_range(-5.0..35.0));
        let rebuilt = roster.nearest(target.x(), target.y()).unwrap();
        let expected = fresh.nearest(&target).unwrap();
        assert_eq!(rebuilt.id, expected.id, "target {:?}", target);
    }
}
