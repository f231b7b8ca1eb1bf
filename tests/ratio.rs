// tests/ratio.rs

use hypersphere_walk::estimator::ratio::{estimate_ratio, walk_ratio};
use hypersphere_walk::space::lattice::ChoiceAxis;
use hypersphere_walk::WalkConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn cfg(dimension: usize, radius: f64, cycles: usize) -> WalkConfig {
    WalkConfig { dimension, radius, cycles, ..WalkConfig::default() }
}

#[test]
fn ratio_stays_in_unit_interval() {
    let c = cfg(3, 1.0, 2_000);
    let axis = ChoiceAxis::new(0.8, c.spacing);

    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let r = estimate_ratio(&mut rng, &c, &axis, 0.7).unwrap();
        assert!((0.0..=1.0).contains(&r), "seed {seed}: ratio {r}");
    }
}

#[test]
fn ratio_is_hits_over_full_budget() {
    let c = cfg(2, 1.0, 1_000);
    let axis = ChoiceAxis::new(1.0, c.spacing);

    let walk = walk_ratio(&mut ChaCha8Rng::seed_from_u64(9), &c, &axis, 0.9).unwrap();
    let r = estimate_ratio(&mut ChaCha8Rng::seed_from_u64(9), &c, &axis, 0.9).unwrap();

    assert_eq!(r, walk.hits as f64 / 1_000.0);
    assert_eq!(walk.cycles, 1_000);
    assert!(walk.hits <= walk.cycles);
}

#[test]
fn unreachable_inner_cube_gives_exact_zero() {
    // A negative edge admits no coordinate at all.
    let c = cfg(2, 1.0, 500);
    let axis = ChoiceAxis::new(0.6, c.spacing);

    let walk = walk_ratio(&mut ChaCha8Rng::seed_from_u64(1), &c, &axis, -1.0).unwrap();
    assert_eq!(walk.hits, 0);
    assert_eq!(walk.ratio(), 0.0);
}

#[test]
fn inner_cube_equal_to_outer_inside_sphere_hits_every_visit() {
    // The whole 0.6-cube sits inside a radius-100 sphere.
    let c = cfg(2, 100.0, 1_000);
    let axis = ChoiceAxis::new(0.6, c.spacing);

    let walk = walk_ratio(&mut ChaCha8Rng::seed_from_u64(4), &c, &axis, 0.6).unwrap();
    assert!(walk.hits == walk.cycles || walk.stopped_early);
    assert!(walk.ratio() > 0.9, "ratio {}", walk.ratio());
    assert!(walk.moves > 0);
}

#[test]
fn stuck_walker_stops_early_and_keeps_divisor() {
    // Single-point axis in 20-D: every non-zero offset leaves the lattice and the
    // all-zero offset has probability 3^-20, so the retry cursor runs out.
    let c = cfg(20, 1.0, 100);
    let axis = ChoiceAxis::new(0.0, c.spacing);
    assert_eq!(axis.len(), 1);

    let walk = walk_ratio(&mut ChaCha8Rng::seed_from_u64(2), &c, &axis, 0.0).unwrap();
    assert!(walk.stopped_early);
    assert_eq!(walk.moves, 0);
    assert_eq!(walk.hits, 1);
    assert_eq!(walk.rejected, 100);
    assert_eq!(walk.ratio(), 0.01);
}

#[test]
fn estimator_is_reusable_with_fresh_randomness() {
    let c = cfg(2, 1.0, 300);
    let axis = ChoiceAxis::new(0.5, c.spacing);
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    let ratios: Vec<f64> = (0..5)
        .map(|_| estimate_ratio(&mut rng, &c, &axis, 0.4).unwrap())
        .collect();
    assert!(ratios.iter().all(|r| (0.0..=1.0).contains(r)));
}
