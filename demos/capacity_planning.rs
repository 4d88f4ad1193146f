//! Bloom filter capacity planning example.
//!
//! Sizes filters for a few workloads, loads them past capacity, and prints
//! the health report at each stage.
//!
//! Run with: cargo run --example capacity_planning

use bloomguard::core::params::{bits_per_element, expected_fp_rate};
use bloomguard::{BloomFilter, FilterParams, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Bloom Filter Capacity Planning\n");

    let workloads = [
        ("Session dedup", 10_000, 0.01),
        ("URL crawler frontier", 1_000_000, 0.001),
        ("Spell-check dictionary", 250_000, 0.0001),
    ];

    println!(
        "{:<24} {:>10} {:>8} {:>12} {:>4} {:>10}",
        "workload", "n", "p", "m (bits)", "k", "bytes"
    );
    for (name, n, p) in workloads {
        let params = FilterParams::estimate(n, p)?;
        println!(
            "{:<24} {:>10} {:>8} {:>12} {:>4} {:>10}",
            name,
            n,
            p,
            params.bits,
            params.hashes,
            params.byte_len()
        );
        println!(
            "{:<24} {:.2} bits/element, predicted FPR at n = {:.5}",
            "",
            bits_per_element(p)?,
            expected_fp_rate(params.bits, n, params.hashes)?
        );
    }

    println!("\nLoading a 10,000-item filter past capacity:");
    let filter = BloomFilter::from_estimate(10_000, 0.01)?;
    let mut inserted = 0u64;
    for target in [5_000u64, 10_000, 20_000, 40_000] {
        while inserted < target {
            filter.insert(format!("session-{inserted}").as_bytes());
            inserted += 1;
        }
        println!("  {:>6} items: {}", inserted, filter.health_check());
    }

    Ok(())
}
