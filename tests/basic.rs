//! Basic behavior of the filter through the public API

use bloomguard::{estimate_parameters, BloomError, BloomFilter};

#[test]
fn test_basic_insert_and_find() {
    let filter = BloomFilter::new(1024, 3).unwrap();

    filter.insert(b"gopher");

    assert!(
        filter.contains(b"gopher"),
        "Should find the item we just added"
    );
}

#[test]
fn test_empty_filter_reports_absent() {
    let filter = BloomFilter::from_estimate(1000, 0.01).unwrap();
    for i in 0u64..1000 {
        assert!(!filter.contains(&i.to_le_bytes()));
    }
}

#[test]
fn test_sizing() {
    assert_eq!(BloomFilter::new(64, 3).unwrap().snapshot().len(), 8);
    assert_eq!(BloomFilter::new(65, 3).unwrap().snapshot().len(), 9);
    assert!(BloomFilter::new(64, 3).unwrap().snapshot().iter().all(|&b| b == 0));
}

#[test]
fn test_invalid_construction() {
    assert_eq!(
        BloomFilter::new(0, 3).unwrap_err(),
        BloomError::InvalidFilterSize { size: 0 }
    );
    assert_eq!(
        BloomFilter::new(8, 0).unwrap_err(),
        BloomError::InvalidHashCount { count: 0 }
    );
}

#[test]
fn test_idempotence() {
    let filter = BloomFilter::new(2048, 5).unwrap();
    filter.insert(b"twice");
    let after_one = filter.snapshot();
    filter.insert(b"twice");
    assert_eq!(filter.snapshot(), after_one);
}

#[test]
fn test_monotonicity() {
    let filter = BloomFilter::new(4096, 4).unwrap();
    let mut previous = filter.snapshot();

    for i in 0u32..300 {
        filter.insert(format!("word-{i}").as_bytes());
        let current = filter.snapshot();
        for (before, after) in previous.iter().zip(&current) {
            assert_eq!(before & after, *before, "a set bit was cleared");
        }
        previous = current;
    }
}

#[test]
fn test_no_false_negatives() {
    let (m, k) = estimate_parameters(1000, 0.01).unwrap();
    let filter = BloomFilter::new(m, k).unwrap();

    for i in 0u64..1000 {
        filter.insert(&i.to_be_bytes());
    }
    for i in 0u64..1000 {
        assert!(filter.contains(&i.to_be_bytes()), "False negative for {}", i);
    }
}

#[test]
fn test_batch_operations() {
    let filter = BloomFilter::from_estimate(1000, 0.01).unwrap();
    let items: Vec<&[u8]> = vec![b"apple".as_slice(), b"banana".as_slice(), b"cherry".as_slice()];

    filter.insert_batch(items.iter().copied());

    for item in &items {
        assert!(filter.contains(item));
    }
    assert_eq!(
        filter.contains_batch(items.iter().copied()),
        vec![true, true, true]
    );
}

#[test]
fn test_estimator_values() {
    assert_eq!(estimate_parameters(1000, 0.01).unwrap(), (9586, 7));

    for &(n, p) in &[(1, 0.5), (10, 0.1), (1_000_000, 0.0001), (7, 0.999)] {
        let (m, k) = estimate_parameters(n, p).unwrap();
        assert!(m > 0 && k > 0, "n={n} p={p} gave m={m} k={k}");
    }
}

#[test]
fn test_estimator_rejects_invalid_input() {
    assert!(estimate_parameters(0, 0.01).is_err());
    assert!(estimate_parameters(100, 0.0).is_err());
    assert!(estimate_parameters(100, 1.0).is_err());
    assert!(estimate_parameters(100, f64::NAN).is_err());
}

#[test]
fn test_health_report_tracks_saturation() {
    let filter = BloomFilter::from_estimate(100, 0.01).unwrap();
    assert!(filter.health_check().is_healthy());

    for i in 0u32..2000 {
        filter.insert(&i.to_le_bytes());
    }
    let health = filter.health_check();
    assert!(health.is_critical(), "{health}");
}
