//! Timing smoke test for the multiplication path
//!
//! Timing measurements are noisy on shared machines, so this is ignored by
//! default; run it with `cargo test -p bikering-tests -- --ignored`.

use bikering_algorithms::Ring;
use bikering_tests::constant_time::{TestConfig, TimingTester};
use bikering_tests::fixtures::random_element;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

#[test]
#[ignore]
fn multiply_timing_does_not_depend_on_operand_density() {
    let config = TestConfig::default()
        .with_mean_ratio_range(0.85, 1.15)
        .with_t_stat_threshold(5.0)
        .with_samples(60, 25);
    let tester = TimingTester::from_config(&config);
    let mut rng = ChaCha20Rng::seed_from_u64(0x6374);

    let ring = Ring::new(4099).unwrap();
    let dense = random_element(&ring, &mut rng);
    let sparse = ring.one();
    let other = random_element(&ring, &mut rng);
    let mut z = ring.create();

    for _ in 0..config.num_warmup {
        ring.multiply(black_box(&dense), black_box(&other), &mut z);
        ring.multiply(black_box(&sparse), black_box(&other), &mut z);
    }

    let times_dense = tester.measure(|| ring.multiply(black_box(&dense), black_box(&other), &mut z));
    let times_sparse = tester.measure(|| ring.multiply(black_box(&sparse), black_box(&other), &mut z));

    let analysis = tester.analyze(&times_dense, &times_sparse, &config);
    assert!(analysis.is_constant_time, "{:?}", analysis);
}
